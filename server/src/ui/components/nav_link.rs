//! Link to another dashboard page

use dioxus::prelude::*;

#[component]
pub fn NavLink(to: String, #[props(default)] class: String, children: Element) -> Element {
    rsx! {
        a {
            href: "{to}",
            class: "{class}",
            {children}
        }
    }
}
