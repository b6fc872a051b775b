//! Dioxus web UI, rendered to HTML on the server

pub mod components;
pub mod layout;
pub mod pages;
pub mod theme;

use agentdash_core::{ComponentInfo, StatusListView};
use dioxus::prelude::*;

use crate::ui::{
    layout::AppLayout,
    pages::{AgentUnavailable, ComponentDetail, Components, NotFound},
    theme::ThemeMode,
};

/// Render `body` inside the app layout and wrap it in a full HTML document
fn render_document(title: &str, theme: ThemeMode, body: Element) -> String {
    let html_body = dioxus_ssr::render_element(rsx! {
        AppLayout { {body} }
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - agentdash</title>
</head>
<body>
    <div id="main">
        {html_body}
    </div>
</body>
</html>"#,
        theme = theme.as_str(),
        title = escape(title),
    )
}

/// Minimal HTML escaping for text placed outside the Dioxus tree
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn components_page(
    theme: ThemeMode,
    view: &StatusListView,
    components: Vec<ComponentInfo>,
) -> String {
    render_document(
        "Components",
        theme,
        rsx! { Components { components: components, view: view.clone() } },
    )
}

pub fn component_detail_page(
    theme: ThemeMode,
    view: &StatusListView,
    component: ComponentInfo,
    parent: Option<String>,
) -> String {
    let title = component.id.clone();
    render_document(
        &title,
        theme,
        rsx! { ComponentDetail { component: component, parent: parent, view: view.clone() } },
    )
}

pub fn not_found_page(theme: ThemeMode, id: &str) -> String {
    render_document(
        "Not Found",
        theme,
        rsx! { NotFound { id: id.to_string() } },
    )
}

pub fn agent_unavailable_page(theme: ThemeMode, agent_url: &str, message: &str) -> String {
    render_document(
        "Agent Unavailable",
        theme,
        rsx! {
            AgentUnavailable {
                agent_url: agent_url.to_string(),
                message: message.to_string(),
            }
        },
    )
}
