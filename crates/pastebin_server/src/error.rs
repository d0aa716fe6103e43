//! HTTP error mapping for API handlers.

use crate::AppError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Error returned by JSON handlers.
#[derive(Debug)]
pub enum HttpError {
    /// Domain or storage failure.
    App(AppError),
    /// Request body could not be decoded.
    Body(JsonRejection),
}

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        Self::App(value)
    }
}

impl From<JsonRejection> for HttpError {
    fn from(value: JsonRejection) -> Self {
        Self::Body(value)
    }
}

impl HttpError {
    /// Status code and client-facing message.
    ///
    /// Storage details are logged here and never returned to the caller.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            HttpError::App(AppError::Validation { message, .. }) => {
                (StatusCode::BAD_REQUEST, message.clone())
            }
            HttpError::App(AppError::NotFound(reason)) => {
                (StatusCode::NOT_FOUND, reason.message().to_string())
            }
            HttpError::App(err) => {
                tracing::error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            HttpError::Body(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
