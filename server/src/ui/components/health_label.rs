//! Health label component for component status

use agentdash_core::HealthState;
use dioxus::prelude::*;

/// Badge variant and display text for a health state
pub(crate) fn health_badge(health: HealthState) -> (&'static str, &'static str) {
    match health {
        HealthState::Healthy => ("success", "Healthy"),
        HealthState::Unhealthy => ("error", "Unhealthy"),
        HealthState::Exited => ("warning", "Exited"),
        HealthState::Unknown => ("muted", "Unknown"),
    }
}

#[component]
pub fn HealthLabel(health: HealthState) -> Element {
    let (variant, text) = health_badge(health);

    rsx! {
        span {
            class: "badge badge-{variant}",
            "{text}"
        }
    }
}
