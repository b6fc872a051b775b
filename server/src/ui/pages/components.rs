//! Component list page

use agentdash_core::{ComponentInfo, StatusListView};
use dioxus::prelude::*;

use crate::ui::components::ComponentList;

#[component]
pub fn Components(components: Vec<ComponentInfo>, #[props(default)] view: StatusListView) -> Element {
    let total = components.len();
    let unhealthy = components
        .iter()
        .filter(|c| !c.health.state.is_healthy())
        .count();

    rsx! {
        div {
            h1 { "Components" }
            p {
                class: "page-subtitle",
                if unhealthy == 0 {
                    "{total} component(s), all healthy"
                } else {
                    "{total} component(s), {unhealthy} need attention"
                }
            }
            ComponentList { components: components, view: view }
        }
    }
}
