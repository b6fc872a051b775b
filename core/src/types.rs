//! Shared types for the agent's component API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::view::StatusEntity;

/// Health state reported by a component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Unhealthy,
    Exited,
    /// Also used for any state string this dashboard does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

impl HealthState {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthState::Healthy => "healthy",
            HealthState::Unhealthy => "unhealthy",
            HealthState::Exited => "exited",
            HealthState::Unknown => "unknown",
        }
    }

    /// Is the component running without problems?
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthState::Healthy)
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health of a single component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentHealth {
    pub state: HealthState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<DateTime<Utc>>,
}

/// Component as reported by the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    /// Unique component ID (e.g. `prometheus.scrape.default`)
    pub id: String,
    /// Component name without label (e.g. `prometheus.scrape`)
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub health: ComponentHealth,
    #[serde(default)]
    pub references_to: Vec<String>,
    #[serde(default)]
    pub referenced_by: Vec<String>,
    /// Components running inside this component's module, if it loads one
    #[serde(default)]
    pub module_info: Vec<ComponentInfo>,
}

impl ComponentInfo {
    /// Create a component with the given health and no references
    pub fn new(id: impl Into<String>, state: HealthState) -> Self {
        let id = id.into();
        let name = match id.rsplit_once('.') {
            Some((name, _)) => name.to_string(),
            None => id.clone(),
        };

        Self {
            id,
            name,
            label: None,
            health: ComponentHealth {
                state,
                ..Default::default()
            },
            references_to: Vec::new(),
            referenced_by: Vec::new(),
            module_info: Vec::new(),
        }
    }

    /// Does this component run a nested module?
    pub fn has_module(&self) -> bool {
        !self.module_info.is_empty()
    }
}

impl StatusEntity for ComponentInfo {
    type Status = HealthState;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &HealthState {
        &self.health.state
    }
}
