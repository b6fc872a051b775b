//! Configuration management

use agentdash_core::{get_secret, AgentClient, Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ui::theme::ThemeMode;

/// Default agent HTTP address
pub const DEFAULT_AGENT_URL: &str = "http://localhost:12345";

/// Default timeout for requests to the agent, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Base URL of the agent whose components are shown
    #[serde(default = "default_agent_url")]
    pub agent_url: String,

    /// Timeout for requests to the agent
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Bearer token for the agent API
    #[serde(default)]
    pub agent_token: Option<String>,

    /// Dashboard color theme
    #[serde(default)]
    pub theme: ThemeMode,
}

fn default_agent_url() -> String {
    DEFAULT_AGENT_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent_url: default_agent_url(),
            request_timeout_secs: default_timeout_secs(),
            agent_token: None,
            theme: ThemeMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or environment
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            Self::load_from_file(p)
        } else {
            Self::load_from_env()
        }
    }

    /// Load from configuration file
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used
    fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(Error::ConfigError(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from environment variables
    fn load_from_env() -> Result<Self> {
        let agent_url = std::env::var("AGENT_URL").unwrap_or_else(|_| default_agent_url());

        let request_timeout_secs = match std::env::var("AGENT_TIMEOUT_SECS") {
            Ok(value) => Self::parse_timeout(&value)?,
            Err(_) => default_timeout_secs(),
        };

        // Support file-based token (Docker/K8s secrets)
        let agent_token = get_secret("AGENT_TOKEN");

        let theme = match std::env::var("AGENTDASH_THEME") {
            Ok(value) => value.parse().map_err(Error::ConfigError)?,
            Err(_) => ThemeMode::default(),
        };

        let config = Config {
            agent_url,
            request_timeout_secs,
            agent_token,
            theme,
        };
        config.validate()?;
        Ok(config)
    }

    fn parse_timeout(value: &str) -> Result<u64> {
        match value.trim().parse::<u64>() {
            Ok(0) | Err(_) => Err(Error::ConfigError(format!(
                "Invalid AGENT_TIMEOUT_SECS: {}",
                value
            ))),
            Ok(secs) => Ok(secs),
        }
    }

    /// Build an agent client from this configuration
    pub fn agent_client(&self) -> Result<AgentClient> {
        self.validate()?;
        AgentClient::builder(&self.agent_url)
            .timeout(Duration::from_secs(self.request_timeout_secs))
            .token(self.agent_token.clone())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            agent_url = "https://agent.example.com:12345"
            request_timeout_secs = 3
            agent_token = "s3cret"
            theme = "light"
            "#,
        )
        .unwrap();

        assert_eq!(config.agent_url, "https://agent.example.com:12345");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.agent_token.as_deref(), Some("s3cret"));
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn test_parse_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = Config::parse("request_timeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_zero_timeout_in_file_is_rejected() {
        let err = Config::parse("request_timeout_secs = 0").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
        assert!(err.to_string().contains("request_timeout_secs"));

        let config = Config {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(config.agent_client(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(Config::parse_timeout(" 5 ").unwrap(), 5);
        assert!(Config::parse_timeout("0").is_err());
        assert!(Config::parse_timeout("five").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Some("/nonexistent/agentdash.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_agent_client_from_config() {
        let config = Config {
            agent_url: "http://agent:12345/".to_string(),
            ..Default::default()
        };
        let client = config.agent_client().unwrap();
        assert_eq!(client.base_url(), "http://agent:12345");
    }
}
