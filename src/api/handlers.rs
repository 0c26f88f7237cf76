use std::sync::{Arc, LazyLock};

use axum::Json;
use axum::extract::{Path, Query, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use serde::Deserialize;

use crate::listing::Listing;
use crate::track::InflightEntry;

use super::error::ApiError;
use super::state::ApiState;

static OPENAPI_JSON: LazyLock<serde_json::Value> = LazyLock::new(|| {
    let yaml = include_str!("../../openapi.yaml");
    serde_yaml_ng::from_str(yaml).expect("openapi.yaml must be valid YAML")
});

pub async fn openapi() -> Json<serde_json::Value> {
    Json(OPENAPI_JSON.clone())
}

pub async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub include_meta: bool,
    pub depth: Option<usize>,
}

pub async fn list_root(
    State(state): State<Arc<ApiState>>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Listing>, ApiError> {
    list_path(&state, "", &q).await
}

pub async fn list(
    State(state): State<Arc<ApiState>>,
    Path(path): Path<String>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Listing>, ApiError> {
    list_path(&state, path.trim_matches('/'), &q).await
}

async fn list_path(state: &ApiState, path: &str, q: &ListQuery) -> Result<Json<Listing>, ApiError> {
    let depth = q.depth.unwrap_or_else(|| state.builder.default_depth());
    let listing = state.builder.build(path, q.include_meta, depth).await?;
    Ok(Json(listing))
}

pub async fn inflight(State(state): State<Arc<ApiState>>) -> Json<Vec<InflightEntry>> {
    Json(state.tracker.snapshot())
}

pub async fn track_request(
    State(state): State<Arc<ApiState>>,
    req: Request,
    next: Next,
) -> Response {
    let uri = req.uri().to_string();
    state.tracker.register(&uri);
    let res = next.run(req).await;
    state.tracker.unregister(&uri);
    res
}
