//! Readiness probe handler.

use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Report whether the paste store is ready.
///
/// The first probe opens the store. `200` when a read transaction succeeds,
/// `503` when the store is open but cannot serve reads, `500` when opening it
/// fails.
pub async fn healthz(State(state): State<AppState>) -> Response {
    let db = match state.store.get().await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!("Health check could not open store: {}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "ok": false, "error": err.to_string() })),
            )
                .into_response();
        }
    };

    match db.ping() {
        Ok(()) => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
        Err(err) => {
            tracing::warn!("Health check probe failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "ok": false, "status": "db_not_connected" })),
            )
                .into_response()
        }
    }
}
