//! HTTP routes: dashboard pages and JSON API

use agentdash_core::{ComponentInfo, Error, HealthState, StatusList};
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, instrument, warn};

use crate::state::AppState;
use crate::ui;

type PageResult = Result<Html<String>, (StatusCode, Html<String>)>;
type ApiResult<T> = Result<Json<T>, (StatusCode, Json<serde_json::Value>)>;

/// Create main router with all routes
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        // Dashboard pages
        .route("/", get(components_page))
        .route("/component/{*id}", get(component_page))
        // REST API routes
        .nest("/api/v1", api_routes())
        .fallback(not_found)
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/components", get(list_components))
}

/// Split a nested component path into its module path and local ID
fn split_component_path(path: &str) -> (Option<String>, &str) {
    match path.trim_matches('/').rsplit_once('/') {
        Some((parent, id)) => (Some(parent.to_string()), id),
        None => (None, path.trim_matches('/')),
    }
}

fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// Turn an agent error into an error page
fn page_error(state: &AppState, err: Error, id: Option<&str>) -> (StatusCode, Html<String>) {
    let theme = state.config.theme;
    let status = status_for(&err);

    let body = match (&err, id) {
        (Error::NotFound(_), Some(id)) => ui::not_found_page(theme, id),
        _ => {
            error!(error = %err, "Failed to load data from agent");
            ui::agent_unavailable_page(theme, state.agent.base_url(), &err.to_string())
        }
    };

    (status, Html(body))
}

fn api_error(err: Error) -> (StatusCode, Json<serde_json::Value>) {
    let status = status_for(&err);
    if status != StatusCode::NOT_FOUND {
        error!(error = %err, "Agent request failed");
    }
    (status, Json(json!({ "error": err.to_string() })))
}

/// Component list page
#[instrument(skip(state))]
async fn components_page(State(state): State<AppState>) -> PageResult {
    let components = state
        .agent
        .components()
        .await
        .map_err(|e| page_error(&state, e, None))?;

    debug!(count = components.len(), "Rendering component list");
    Ok(Html(ui::components_page(
        state.config.theme,
        &state.view,
        components,
    )))
}

/// Component detail page; nested module components use `module/.../id` paths
#[instrument(skip(state))]
async fn component_page(State(state): State<AppState>, Path(path): Path<String>) -> PageResult {
    let component = state
        .agent
        .component(&path)
        .await
        .map_err(|e| page_error(&state, e, Some(&path)))?;

    let (parent, _) = split_component_path(&path);
    Ok(Html(ui::component_detail_page(
        state.config.theme,
        &state.view,
        component,
        parent,
    )))
}

/// Health check endpoint
#[instrument]
async fn health_check() -> impl IntoResponse {
    debug!("Health check requested");
    Json(json!({
        "status": "ok",
        "service": "agentdash",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    /// Module whose components should be listed
    parent: Option<String>,
}

/// Status list rows as JSON
#[instrument(skip(state))]
async fn list_components(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<StatusList<HealthState>> {
    let parent = query.parent.filter(|p| !p.is_empty());

    let components: Vec<ComponentInfo> = match &parent {
        Some(parent) => {
            state
                .agent
                .component(parent)
                .await
                .map_err(api_error)?
                .module_info
        }
        None => state.agent.components().await.map_err(api_error)?,
    };

    Ok(Json(state.view.render(&components, parent.as_deref())))
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> (StatusCode, Html<String>) {
    warn!(path = %uri.path(), "Route not found");
    let page = ui::not_found_page(state.config.theme, uri.path());
    (StatusCode::NOT_FOUND, Html(page))
}
