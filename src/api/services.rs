use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error, info};

use super::{
    error::ApiError,
    models::{HealthResponse, NOTICE_NOT_EXIST, NOTICE_NOT_SHOWCASE, NoticeResponse},
    state::AppState,
    utils,
};
use crate::content::{NodeQuery, SHOWCASE_TYPE};
use crate::projection::FIELD_FEATURED;

/// Query keys accepted by the single showcase endpoint
const SHOWCASE_QUERY_KEYS: &[&str] = &["showcase"];

/// Maximum number of items returned by the list endpoint
pub const LIST_RANGE: usize = 3;

/// Single showcase endpoint (GET /showcase?showcase={id})
///
/// ## Flow:
/// 1. Reject any query key other than `showcase` (400 `{"err": "Invalid Parameter"}`)
/// 2. Parse the id and load the node; missing or unparseable -> notice
/// 3. Check the node type; anything but `showcase` -> notice
/// 4. Project title, text fields, both images, social links, linked article, featured flag
///
/// Notices are returned with 200 OK. A content-store fault fails the whole
/// request with 500 rather than returning a partially projected showcase.
pub async fn get_showcase(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    utils::ensure_allowed_keys(params.keys().map(String::as_str), SHOWCASE_QUERY_KEYS)
        .inspect_err(|err| {
            state.metrics.invalid_parameter();
            debug!(error = %err, "Rejected showcase request");
        })?;

    let Some(node_id) = utils::parse_node_id(params.get("showcase").map(String::as_str)) else {
        return Ok(notice(&state, NOTICE_NOT_EXIST));
    };

    let node = state
        .store
        .load_node(node_id)
        .await
        .map_err(|err| store_fault(&state, err.into(), node_id))?;

    let Some(node) = node else {
        return Ok(notice(&state, NOTICE_NOT_EXIST));
    };

    if !node.is_type(SHOWCASE_TYPE) {
        debug!(node_id, node_type = %node.node_type, "Node is not a showcase");
        return Ok(notice(&state, NOTICE_NOT_SHOWCASE));
    }

    let detail = state
        .projector
        .project_showcase(&node)
        .await
        .map_err(|err| store_fault(&state, err.into(), node_id))?;

    state.metrics.showcase_served();
    Ok((StatusCode::OK, Json(detail)).into_response())
}

/// Showcase list endpoint (GET /showcases?featured={0|1})
///
/// Returns up to [`LIST_RANGE`] showcases whose featured flag matches the
/// request, in random order. `featured=1` selects featured showcases; any
/// other value, or none, selects the rest. Other query keys are ignored.
pub async fn list_showcases(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let featured = utils::parse_featured_flag(params.get("featured").map(String::as_str));

    let query = NodeQuery::new(SHOWCASE_TYPE)
        .condition_flag(FIELD_FEATURED, featured)
        .random()
        .range(LIST_RANGE);

    let ids = state
        .store
        .query_nodes(&query)
        .await
        .map_err(|err| list_fault(&state, err.into(), featured))?;

    let nodes = state
        .store
        .load_nodes(&ids)
        .await
        .map_err(|err| list_fault(&state, err.into(), featured))?;

    let mut items = Vec::with_capacity(nodes.len());
    for node in &nodes {
        let summary = state
            .projector
            .project_summary(node)
            .await
            .map_err(|err| list_fault(&state, err.into(), featured))?;
        items.push(summary);
    }

    info!(featured, count = items.len(), "Showcase list served");
    state.metrics.list_served();
    Ok((StatusCode::OK, Json(items)).into_response())
}

/// Health check endpoint (GET /health)
///
/// Checks the content store with a single lookup. Returns 503 Service
/// Unavailable if that lookup fails, 200 OK otherwise.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let mut components = HashMap::new();
    components.insert("api".to_string(), "healthy".to_string());

    let store_status = match state.store.load_node(0).await {
        Ok(_) => "healthy",
        Err(err) => {
            error!(error = %err, "Content store health check failed");
            "unhealthy"
        }
    };
    components.insert("content_store".to_string(), store_status.to_string());

    let all_healthy = components.values().all(|status| status == "healthy");
    let (overall_status, status_code) = if all_healthy {
        ("healthy", StatusCode::OK)
    } else {
        ("unhealthy", StatusCode::SERVICE_UNAVAILABLE)
    };

    let response = HealthResponse {
        status: overall_status.to_string(),
        components,
        counters: state.metrics.snapshot().into_map(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (status_code, Json(response))
}

fn notice(state: &AppState, message: &str) -> Response {
    state.metrics.notice_returned();
    (StatusCode::OK, Json(NoticeResponse::new(message))).into_response()
}

fn store_fault(state: &AppState, err: ApiError, node_id: u64) -> ApiError {
    state.metrics.store_fault();
    error!(node_id, error = %err, "Showcase projection failed");
    err
}

fn list_fault(state: &AppState, err: ApiError, featured: bool) -> ApiError {
    state.metrics.store_fault();
    error!(featured, error = %err, "Showcase list projection failed");
    err
}
