use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::error;

use waypost_common::Topic;
use waypost_discover::DiscoverMode;

use crate::AppState;

// --- Query structs ---

#[derive(Deserialize)]
pub struct DiscoverQuery {
    topic: Option<String>,
    mode: Option<String>,
}

// --- Handlers ---

/// GET /api/discover?topic={topic}&mode={normal|preview}
///
/// Absent or unrecognized topic and mode fall back to their defaults rather
/// than failing the request.
pub async fn api_discover(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DiscoverQuery>,
) -> impl IntoResponse {
    let topic = params
        .topic
        .as_deref()
        .and_then(|s| s.parse::<Topic>().ok())
        .unwrap_or_default();
    let mode = params
        .mode
        .as_deref()
        .and_then(DiscoverMode::parse)
        .unwrap_or_default();

    match state.aggregator.discover(topic.entry(), mode).await {
        Ok(items) => (StatusCode::OK, Json(serde_json::json!({ "blogs": items }))).into_response(),
        Err(e) => {
            error!(topic = %topic, ?mode, error = %e, "Discover aggregation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "message": "An error has occurred" })),
            )
                .into_response()
        }
    }
}
