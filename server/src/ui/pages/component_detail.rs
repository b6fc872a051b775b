//! Component detail page

use agentdash_core::{ComponentInfo, StatusListView};
use dioxus::prelude::*;

use crate::ui::components::{ComponentList, HealthLabel, NavLink};

/// Details of a single component.
///
/// `parent` is the module the component runs in, if any. References resolve
/// within the same module.
#[component]
pub fn ComponentDetail(
    component: ComponentInfo,
    parent: Option<String>,
    #[props(default)] view: StatusListView,
) -> Element {
    let health = &component.health;
    let message = health.message.clone().unwrap_or_default();
    let updated = health
        .updated_time
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());
    let label = component.label.clone().unwrap_or_default();

    // Nested module components are addressed below this component's full path
    let module_parent = match parent.as_deref() {
        Some(parent) if !parent.is_empty() => format!("{}/{}", parent, component.id),
        _ => component.id.clone(),
    };

    rsx! {
        div {
            h1 { "{component.id}" }

            div {
                class: "card",
                dl {
                    class: "detail-grid",
                    dt { "Name" }
                    dd { "{component.name}" }
                    dt { "Label" }
                    dd { "{label}" }
                    dt { "Health" }
                    dd { HealthLabel { health: health.state } }
                    dt { "Message" }
                    dd { "{message}" }
                    dt { "Last updated" }
                    dd { "{updated}" }
                }
            }

            References {
                title: "Dependencies",
                ids: component.references_to.clone(),
                parent: parent.clone(),
                view: view.clone(),
            }
            References {
                title: "Dependants",
                ids: component.referenced_by.clone(),
                parent: parent.clone(),
                view: view.clone(),
            }

            if component.has_module() {
                h2 { "Module components" }
                ComponentList {
                    components: component.module_info.clone(),
                    parent: module_parent,
                    view: view.clone(),
                }
            }
        }
    }
}

#[component]
fn References(
    title: String,
    ids: Vec<String>,
    parent: Option<String>,
    view: StatusListView,
) -> Element {
    rsx! {
        h2 { "{title}" }
        if ids.is_empty() {
            p { class: "page-subtitle", "None" }
        } else {
            ul {
                class: "reference-list",
                for id in ids.iter() {
                    li {
                        key: "{id}",
                        NavLink {
                            to: view.target(parent.as_deref(), id),
                            "{id}"
                        }
                    }
                }
            }
        }
    }
}
