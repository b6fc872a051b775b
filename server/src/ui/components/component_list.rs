//! Table of components with their health and a link to each detail page

use agentdash_core::{ComponentInfo, StatusList, StatusListView};
use dioxus::prelude::*;

use super::{HealthLabel, NavLink, Table};

const HEADER_STYLE: &str = "width: 130px;";

/// Lists `components` in the order given.
///
/// `parent` is the ID of the module the components belong to; it becomes part
/// of each "View" link. `view` decides where links point.
#[component]
pub fn ComponentList(
    components: Vec<ComponentInfo>,
    parent: Option<String>,
    #[props(default)] view: StatusListView,
) -> Element {
    let StatusList { headers, rows } = view.render(&components, parent.as_deref());

    rsx! {
        div {
            class: "component-list",
            Table {
                headers: headers,
                style: "{HEADER_STYLE}",
                for row in rows {
                    tr {
                        key: "{row.key}",
                        class: "component-row",
                        style: "line-height: 2.5;",
                        td {
                            HealthLabel { health: row.status }
                        }
                        td {
                            class: "id-column",
                            span { class: "id-name", "{row.id}" }
                            NavLink {
                                to: row.target.clone(),
                                class: "view-button",
                                "View"
                            }
                        }
                    }
                }
            }
        }
    }
}
