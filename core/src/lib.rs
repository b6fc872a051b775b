//! Core library for agentdash
//!
//! This crate defines the component model reported by the agent, the status
//! list view that turns components into table rows, and the client used to
//! fetch component state.

pub mod client;
pub mod error;
pub mod secrets;
pub mod types;
pub mod view;

// Re-exports
pub use client::{AgentClient, AgentClientBuilder};
pub use error::{Error, Result};
pub use secrets::get_secret;
pub use types::{ComponentHealth, ComponentInfo, HealthState};
pub use view::{
    navigation_target, Row, StatusEntity, StatusList, StatusListView, COMPONENT_BASE_PATH,
    TABLE_HEADERS,
};
