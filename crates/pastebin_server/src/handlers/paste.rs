//! Paste create and read endpoints.

use super::request_clock;
use crate::{
    error::HttpError,
    models::paste::{CreatePasteRequest, CreatedPaste, PasteView},
    service, AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};

/// Create a new paste.
///
/// # Returns
/// `201 Created` with the new id and its share path.
///
/// # Errors
/// Returns `400` for a malformed body or invalid fields, `500` when storage
/// fails.
pub async fn create_paste(
    State(state): State<AppState>,
    payload: Result<Json<CreatePasteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedPaste>), HttpError> {
    let Json(req) = payload?;
    let db = state.store.get().await?;
    let created = service::create_paste(&db, req, state.config.max_paste_size)?;
    tracing::info!("Created paste {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch a paste and consume one view.
///
/// # Returns
/// The content, creation time and post-increment view count.
///
/// # Errors
/// Returns `404` with the not-found reason, or `500` when storage fails.
pub async fn get_paste(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<PasteView>, HttpError> {
    let clock = request_clock(&headers, state.config.test_mode);
    let db = state.store.get().await?;
    let view = service::read_and_consume(&db, &id, clock.as_ref())?;
    Ok(Json(view))
}
