//! Theme management and CSS definitions

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Theme mode, set as `data-theme` on the document root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Global CSS with theme variables
pub const GLOBAL_CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

:root[data-theme="light"] {
    --bg-primary: #ffffff;
    --bg-secondary: #f5f7fa;
    --bg-tertiary: #e5e9f0;
    --text-primary: #2e3440;
    --text-secondary: #4c566a;
    --text-muted: #6c7a89;
    --accent-primary: #5e81ac;
    --accent-success: #a3be8c;
    --accent-warning: #ebcb8b;
    --accent-error: #bf616a;
    --accent-muted: #9aa5b4;
    --border-color: #d8dee9;
    --shadow: rgba(0, 0, 0, 0.1);
}

:root[data-theme="dark"] {
    --bg-primary: #2e3440;
    --bg-secondary: #3b4252;
    --bg-tertiary: #434c5e;
    --text-primary: #eceff4;
    --text-secondary: #d8dee9;
    --text-muted: #a8b0c0;
    --accent-primary: #81a1c1;
    --accent-success: #a3be8c;
    --accent-warning: #ebcb8b;
    --accent-error: #bf616a;
    --accent-muted: #616e88;
    --border-color: #4c566a;
    --shadow: rgba(0, 0, 0, 0.3);
}

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    font-size: 16px;
    line-height: 1.5;
    background-color: var(--bg-primary);
    color: var(--text-primary);
}

.header {
    height: 60px;
    background-color: var(--bg-secondary);
    border-bottom: 1px solid var(--border-color);
    display: flex;
    align-items: center;
    padding: 0 24px;
    gap: 24px;
}

.header a {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--accent-primary);
    text-decoration: none;
}

.main-content {
    padding: 32px;
}

h1 {
    font-size: 2rem;
    font-weight: 600;
    margin-bottom: 16px;
}

h2 {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 24px 0 12px;
}

.page-subtitle {
    color: var(--text-secondary);
    margin-bottom: 24px;
}

.card {
    background-color: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: 12px;
    padding: 24px;
    box-shadow: 0 2px 8px var(--shadow);
}

/* Status list */
.component-list .table {
    width: 100%;
    border-collapse: collapse;
}

.component-list th {
    text-align: left;
    color: var(--text-muted);
    font-size: 0.875rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    border-bottom: 1px solid var(--border-color);
}

.component-list td {
    border-bottom: 1px solid var(--border-color);
}

.id-column {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.id-name {
    font-family: ui-monospace, monospace;
}

.view-button {
    padding: 2px 12px;
    border-radius: 8px;
    background-color: var(--bg-tertiary);
    color: var(--text-primary);
    text-decoration: none;
    font-size: 0.875rem;
}

.view-button:hover {
    background-color: var(--border-color);
}

/* Detail page */
.detail-grid {
    display: grid;
    grid-template-columns: 160px 1fr;
    gap: 8px 16px;
}

.detail-grid dt {
    color: var(--text-muted);
}

.reference-list {
    list-style: none;
}

.reference-list a {
    color: var(--accent-primary);
}

/* Badge */
.badge {
    display: inline-block;
    padding: 4px 12px;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 600;
}

.badge-success {
    background-color: var(--accent-success);
    color: white;
}

.badge-warning {
    background-color: var(--accent-warning);
    color: var(--text-primary);
}

.badge-error {
    background-color: var(--accent-error);
    color: white;
}

.badge-muted {
    background-color: var(--accent-muted);
    color: white;
}
"#;

/// Inject global CSS into the document
pub fn inject_global_css() -> Element {
    rsx! {
        style { dangerous_inner_html: GLOBAL_CSS }
    }
}
