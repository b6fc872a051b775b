//! Application state

use agentdash_core::{AgentClient, Result, StatusListView};
use std::sync::Arc;

use crate::config::Config;

/// Shared application state
///
/// Cloned into every Axum handler; all fields are read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub agent: Arc<AgentClient>,
    pub view: Arc<StatusListView>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Result<Self> {
        let agent = config.agent_client()?;

        Ok(Self {
            config: Arc::new(config),
            agent: Arc::new(agent),
            view: Arc::new(StatusListView::new()),
        })
    }
}
