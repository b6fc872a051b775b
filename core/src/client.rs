//! HTTP client for the agent's component API

use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::types::ComponentInfo;

/// Path of the component listing endpoint on the agent
pub const COMPONENTS_API_PATH: &str = "/api/v0/web/components";

/// Client for fetching component state from a running agent
#[derive(Debug, Clone)]
pub struct AgentClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl AgentClient {
    /// Create a new client with the default request timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: impl Into<String>) -> AgentClientBuilder {
        AgentClientBuilder {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the component list
    pub fn components_url(&self) -> String {
        format!("{}{}", self.base_url, COMPONENTS_API_PATH)
    }

    /// URL of a single component; nested module IDs keep their `/` separators
    pub fn component_url(&self, id: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            COMPONENTS_API_PATH,
            id.trim_start_matches('/')
        )
    }

    /// Fetch all top-level components
    #[instrument(skip(self), fields(agent = %self.base_url))]
    pub async fn components(&self) -> Result<Vec<ComponentInfo>> {
        let url = self.components_url();
        debug!(%url, "Fetching components");

        let response = self.request(&url).send().await?;
        let response = Self::check_status(response, None)?;
        let components: Vec<ComponentInfo> = serde_json::from_slice(&response.bytes().await?)?;

        debug!(count = components.len(), "Fetched components");
        Ok(components)
    }

    /// Fetch a single component by ID
    #[instrument(skip(self), fields(agent = %self.base_url))]
    pub async fn component(&self, id: &str) -> Result<ComponentInfo> {
        let url = self.component_url(id);
        debug!(%url, "Fetching component");

        let response = self.request(&url).send().await?;
        let response = Self::check_status(response, Some(id))?;
        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }

    /// Check that the agent is reachable
    pub async fn ping(&self) -> Result<()> {
        let response = self.request(&self.components_url()).send().await?;
        Self::check_status(response, None).map(|_| ())
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn check_status(response: reqwest::Response, id: Option<&str>) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => Err(Error::NotFound(id.to_string())),
            _ => {
                warn!(%status, url = %response.url(), "Agent returned error status");
                Err(Error::HttpError(format!("Agent returned {}", status)))
            }
        }
    }
}

/// Builder for [`AgentClient`]
#[derive(Debug)]
pub struct AgentClientBuilder {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl AgentClientBuilder {
    /// Bearer token sent with every request
    pub fn token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<AgentClient> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::ConfigError(format!(
                "Agent URL must start with http:// or https://: {}",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(AgentClient {
            base_url,
            token: self.token,
            client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HealthState;

    #[test]
    fn test_urls() {
        let client = AgentClient::new("http://localhost:12345/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:12345");
        assert_eq!(
            client.components_url(),
            "http://localhost:12345/api/v0/web/components"
        );
        assert_eq!(
            client.component_url("module.git.shared/local.file.token"),
            "http://localhost:12345/api/v0/web/components/module.git.shared/local.file.token"
        );
        assert_eq!(
            client.component_url("/a.b"),
            "http://localhost:12345/api/v0/web/components/a.b"
        );
    }

    #[test]
    fn test_rejects_invalid_url() {
        let err = AgentClient::new("localhost:12345").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let client = AgentClient::builder("http://agent")
            .token(Some(String::new()))
            .build()
            .unwrap();
        assert!(client.token.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_agent_is_http_error() {
        let client = AgentClient::builder("http://127.0.0.1:1")
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();

        let err = client.components().await.unwrap_err();
        assert!(matches!(err, Error::HttpError(_)));
    }

    mod agent {
        use axum::{
            extract::Path,
            http::{header, HeaderMap, StatusCode},
            response::{IntoResponse, Response},
            routing::get,
            Json, Router,
        };
        use serde_json::json;

        async fn list() -> Json<serde_json::Value> {
            Json(json!([
                { "id": "local.file.token", "health": { "state": "healthy" } },
                {
                    "id": "module.git.shared",
                    "health": { "state": "unhealthy", "message": "pull failed" },
                    "moduleInfo": [
                        { "id": "prometheus.scrape.inner", "health": { "state": "exited" } }
                    ]
                }
            ]))
        }

        async fn component(Path(id): Path<String>, headers: HeaderMap) -> Response {
            match id.as_str() {
                "module.git.shared" => Json(json!({
                    "id": "module.git.shared",
                    "health": { "state": "unhealthy" },
                    "moduleInfo": [
                        { "id": "prometheus.scrape.inner", "health": { "state": "exited" } }
                    ]
                }))
                .into_response(),
                "whoami" => {
                    let auth = headers
                        .get(header::AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    Json(json!({ "id": "whoami", "label": auth })).into_response()
                }
                "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
                "garbage" => (StatusCode::OK, "not json").into_response(),
                _ => StatusCode::NOT_FOUND.into_response(),
            }
        }

        /// Serve a stand-in agent API on an ephemeral port and return its URL
        pub async fn spawn() -> String {
            let app = Router::new()
                .route("/api/v0/web/components", get(list))
                .route("/api/v0/web/components/{*id}", get(component));

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            format!("http://{}", addr)
        }
    }

    #[tokio::test]
    async fn test_components_decoded_from_agent() {
        let client = AgentClient::new(agent::spawn().await).unwrap();

        let components = client.components().await.unwrap();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].id, "local.file.token");
        assert_eq!(components[1].health.state, HealthState::Unhealthy);
        assert_eq!(components[1].health.message.as_deref(), Some("pull failed"));
        assert_eq!(components[1].module_info[0].id, "prometheus.scrape.inner");
        assert_eq!(components[1].module_info[0].health.state, HealthState::Exited);

        client.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_component_with_module() {
        let client = AgentClient::new(agent::spawn().await).unwrap();

        let module = client.component("module.git.shared").await.unwrap();
        assert!(module.has_module());
        assert_eq!(module.module_info[0].id, "prometheus.scrape.inner");
    }

    #[tokio::test]
    async fn test_missing_component_is_not_found() {
        let client = AgentClient::new(agent::spawn().await).unwrap();

        let err = client.component("module.git.shared/nope").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(ref id) if id == "module.git.shared/nope"));
    }

    #[tokio::test]
    async fn test_agent_error_status_is_http_error() {
        let client = AgentClient::new(agent::spawn().await).unwrap();

        let err = client.component("broken").await.unwrap_err();
        assert!(matches!(err, Error::HttpError(ref msg) if msg.contains("500")));
    }

    #[tokio::test]
    async fn test_invalid_body_is_serialization_error() {
        let client = AgentClient::new(agent::spawn().await).unwrap();

        let err = client.component("garbage").await.unwrap_err();
        assert!(matches!(err, Error::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_token_sent_as_bearer() {
        let client = AgentClient::builder(agent::spawn().await)
            .token(Some("s3cret".to_string()))
            .build()
            .unwrap();

        let info = client.component("whoami").await.unwrap();
        assert_eq!(info.label.as_deref(), Some("Bearer s3cret"));
    }
}
