//! agentdash server
//!
//! Serves the component dashboard for an agent, rendered with Dioxus SSR
//! behind an Axum router.

use clap::Parser;
use tracing::{info, instrument};

mod config;
mod routes;
mod state;
mod ui;

use config::Config;
use state::AppState;

/// agentdash server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to bind to
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    addr: String,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
#[instrument]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server=debug".into()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    info!(addr = %args.addr, agent = %config.agent_url, "Starting agentdash server");

    let state = AppState::new(config)?;

    if let Err(e) = state.agent.ping().await {
        tracing::warn!(error = %e, "Agent is not reachable yet; pages will show an error until it is");
    }

    let app = routes::app_routes(state)
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }),
        )
        .layer(tower_http::compression::CompressionLayer::new())
        .layer(tower_http::cors::CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&args.addr).await?;
    info!(addr = %args.addr, "Server listening");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
