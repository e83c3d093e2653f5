use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use super::AppState;

/// Ready when the proxy answers its own health probe.
pub(super) async fn health_ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.client.health().await {
        Ok(proxy) => (
            StatusCode::OK,
            Json(json!({ "status": "ready", "proxy": proxy })),
        ),
        Err(e) => {
            tracing::warn!(target: "findmusicd", error = %e, "proxy health probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable", "error": e.to_string() })),
            )
        }
    }
}
