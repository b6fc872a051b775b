//! Table shell: header row plus caller-supplied body rows

use dioxus::prelude::*;

#[component]
pub fn Table(
    headers: Vec<String>,
    // Inline style for every header cell
    #[props(default)]
    style: String,
    children: Element,
) -> Element {
    rsx! {
        table {
            class: "table",
            thead {
                tr {
                    for header in headers.iter() {
                        th {
                            key: "{header}",
                            style: "{style}",
                            "{header}"
                        }
                    }
                }
            }
            tbody {
                {children}
            }
        }
    }
}
