//! agentctl - Command-line view of an agent's components
//!
//! Prints the same status list the dashboard shows, as a text table.

use agentdash_core::{get_secret, AgentClient, HealthState, StatusList, StatusListView};
use clap::{Parser, Subcommand};
use std::process;
use std::time::Duration;
use tracing::{error, info};

/// agentctl - agent component status tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Agent URL to connect to
    #[arg(
        short,
        long,
        default_value = "http://localhost:12345",
        env = "AGENT_URL"
    )]
    url: String,

    /// API token for the agent (falls back to the file named by AGENT_TOKEN_FILE)
    #[arg(short, long, env = "AGENT_TOKEN")]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "AGENT_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that the agent API is reachable
    Health,

    /// List components with their health
    List {
        /// List the components of this module instead of the top level
        #[arg(short, long)]
        parent: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match AgentClient::builder(&cli.url)
        .token(resolve_token(cli.token.clone()))
        .timeout(Duration::from_secs(cli.timeout))
        .build()
    {
        Ok(client) => match cli.command {
            Commands::Health => handle_health(&client).await,
            Commands::List { parent } => handle_list(&client, parent).await,
        },
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Token from the command line or environment, else from `AGENT_TOKEN_FILE`
fn resolve_token(token: Option<String>) -> Option<String> {
    token.or_else(|| get_secret("AGENT_TOKEN"))
}

async fn handle_health(client: &AgentClient) -> anyhow::Result<()> {
    client.ping().await?;
    info!(agent = %client.base_url(), "Agent is reachable");
    println!("✓ Agent at {} is reachable", client.base_url());
    Ok(())
}

async fn handle_list(client: &AgentClient, parent: Option<String>) -> anyhow::Result<()> {
    let parent = parent.filter(|p| !p.is_empty());

    let components = match &parent {
        Some(parent) => client.component(parent).await?.module_info,
        None => client.components().await?,
    };

    let list = StatusListView::new().render(&components, parent.as_deref());
    print!("{}", format_table(&list));
    Ok(())
}

/// Format a status list as an aligned text table
fn format_table(list: &StatusList<HealthState>) -> String {
    let headers = ["HEALTH", "ID", "TARGET"];

    let mut widths = headers.map(str::len);
    for row in &list.rows {
        widths[0] = widths[0].max(row.status.as_str().len());
        widths[1] = widths[1].max(row.id.len());
        widths[2] = widths[2].max(row.target.len());
    }

    let mut out = format!(
        "{:<w0$}  {:<w1$}  {}\n",
        headers[0],
        headers[1],
        headers[2],
        w0 = widths[0],
        w1 = widths[1],
    );
    for row in &list.rows {
        out.push_str(&format!(
            "{:<w0$}  {:<w1$}  {}\n",
            row.status.as_str(),
            row.id,
            row.target,
            w0 = widths[0],
            w1 = widths[1],
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentdash_core::ComponentInfo;

    #[test]
    fn test_format_empty_table() {
        let list = StatusListView::new().render::<ComponentInfo>(&[], None);
        assert_eq!(format_table(&list), "HEALTH  ID  TARGET\n");
    }

    #[test]
    fn test_format_table_keeps_order() {
        let components = vec![
            ComponentInfo::new("a", HealthState::Healthy),
            ComponentInfo::new("b", HealthState::Unhealthy),
        ];
        let list = StatusListView::new().render(&components, Some("grp"));

        let table = format_table(&list);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "HEALTH     ID  TARGET");
        assert_eq!(lines[1], "healthy    a   /component/grp/a");
        assert_eq!(lines[2], "unhealthy  b   /component/grp/b");
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = Cli::try_parse_from(["agentctl", "--timeout", "0", "health"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["agentctl", "--timeout", "3", "health"]).unwrap();
        assert_eq!(cli.timeout, 3);
    }

    #[test]
    fn test_token_from_file() {
        let path = std::env::temp_dir().join(format!("agentctl-token-{}", std::process::id()));
        std::fs::write(&path, "file-token\n").unwrap();
        std::env::remove_var("AGENT_TOKEN");
        std::env::set_var("AGENT_TOKEN_FILE", &path);

        assert_eq!(resolve_token(None).as_deref(), Some("file-token"));
        assert_eq!(
            resolve_token(Some("flag-token".to_string())).as_deref(),
            Some("flag-token")
        );

        std::env::remove_var("AGENT_TOKEN_FILE");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_cli_parses_list_parent() {
        let cli = Cli::parse_from(["agentctl", "list", "--parent", "module.git.x"]);
        match cli.command {
            Commands::List { parent } => assert_eq!(parent.as_deref(), Some("module.git.x")),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
