//! Status list view
//!
//! Turns an ordered list of status-bearing entities into table rows. Each row
//! pairs the entity's status with its ID and the path its "View" link points
//! to. Rendering of the status, the table and the link is left to the caller.

use serde::Serialize;

/// Base path all navigation targets are rooted under
pub const COMPONENT_BASE_PATH: &str = "/component";

/// Column headers of the status list table
pub const TABLE_HEADERS: [&str; 2] = ["Health", "ID"];

/// Something that can be shown as one row of a status list
pub trait StatusEntity {
    /// Status value handed to the status indicator untouched
    type Status: Clone + PartialEq;

    /// Identifier shown in the row and used as the last path segment
    fn id(&self) -> &str;

    fn status(&self) -> &Self::Status;

    /// Stable key used by the UI to diff rows between renders
    fn key(&self) -> &str {
        self.id()
    }
}

/// One rendered table line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row<S> {
    pub key: String,
    pub status: S,
    pub id: String,
    pub target: String,
}

/// Rendered table: fixed headers plus one row per entity, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusList<S> {
    pub headers: Vec<String>,
    pub rows: Vec<Row<S>>,
}

impl<S> StatusList<S> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Build the navigation target for an entity.
///
/// `<base>/<prefix>/<id>` when `prefix` is non-empty, `<base>/<id>` otherwise.
pub fn navigation_target(base: &str, prefix: Option<&str>, id: &str) -> String {
    let base = base.trim_end_matches('/');
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}/{}/{}", base, prefix, id),
        _ => format!("{}/{}", base, id),
    }
}

/// Maps entities to status list rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusListView {
    base_path: String,
}

impl StatusListView {
    pub fn new() -> Self {
        Self::with_base_path(COMPONENT_BASE_PATH)
    }

    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        let base_path: String = base_path.into();
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Target for a single entity ID under this view's base path
    pub fn target(&self, path_prefix: Option<&str>, id: &str) -> String {
        navigation_target(&self.base_path, path_prefix, id)
    }

    /// Render `entities` as rows, preserving their order.
    ///
    /// Duplicate IDs are passed through as duplicate rows and keys.
    pub fn render<E: StatusEntity>(
        &self,
        entities: &[E],
        path_prefix: Option<&str>,
    ) -> StatusList<E::Status> {
        let rows = entities
            .iter()
            .map(|entity| Row {
                key: entity.key().to_string(),
                status: entity.status().clone(),
                id: entity.id().to_string(),
                target: self.target(path_prefix, entity.id()),
            })
            .collect();

        StatusList {
            headers: TABLE_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }
}

impl Default for StatusListView {
    fn default() -> Self {
        Self::new()
    }
}
