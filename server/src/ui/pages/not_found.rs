//! Error pages

use dioxus::prelude::*;

use crate::ui::components::NavLink;

/// 404 page for a component the agent does not know about
#[component]
pub fn NotFound(id: String) -> Element {
    rsx! {
        div {
            style: "text-align: center; padding: 64px;",
            h1 { "404 - Component Not Found" }
            p {
                style: "color: var(--text-secondary); margin: 16px 0;",
                "The component \"{id}\" could not be found."
            }
            NavLink {
                to: "/",
                class: "view-button",
                "← Back to Components"
            }
        }
    }
}

/// Shown when the agent API could not be reached or returned an error
#[component]
pub fn AgentUnavailable(agent_url: String, message: String) -> Element {
    rsx! {
        div {
            class: "card",
            style: "text-align: center; padding: 48px;",
            h1 { "Agent Unavailable" }
            p {
                style: "color: var(--text-muted);",
                "Failed to load components from {agent_url}"
            }
            p {
                style: "color: var(--text-secondary); margin-top: 8px;",
                "{message}"
            }
        }
    }
}
