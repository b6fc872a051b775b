//! Application layout component

use dioxus::prelude::*;

use crate::ui::{components::NavLink, theme::inject_global_css};

/// Page chrome shared by every dashboard page
#[component]
pub fn AppLayout(children: Element) -> Element {
    rsx! {
        {inject_global_css()}

        div { class: "app-container",
            header { class: "header",
                NavLink { to: "/", "agentdash" }
            }

            main { class: "main-content",
                {children}
            }
        }
    }
}
