//! Dashboard pages

pub mod component_detail;
pub mod components;
pub mod not_found;

pub use component_detail::ComponentDetail;
pub use components::Components;
pub use not_found::{AgentUnavailable, NotFound};
