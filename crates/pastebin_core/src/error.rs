//! Application error types for core storage and domain logic.
use std::fmt;
use thiserror::Error;

/// Why a paste could not be served.
///
/// All variants surface with the same status code; only the message differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// No record exists for the id.
    Missing,
    /// The record's absolute expiry time has passed.
    TimeExpired,
    /// The record has been viewed `max_views` times already.
    ViewsExhausted,
}

impl NotFoundReason {
    /// Client-facing message for this reason.
    pub fn message(self) -> &'static str {
        match self {
            Self::Missing => "Not found",
            Self::TimeExpired => "Expired (Time)",
            Self::ViewsExhausted => "Expired (Views)",
        }
    }
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] redb::Error),

    #[error("Storage error: {0}")]
    StorageMessage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("{0}")]
    NotFound(NotFoundReason),

    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Internal server error")]
    Internal,
}

impl AppError {
    /// Build a validation error for `field`.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

impl From<redb::DatabaseError> for AppError {
    fn from(value: redb::DatabaseError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::TransactionError> for AppError {
    fn from(value: redb::TransactionError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::TableError> for AppError {
    fn from(value: redb::TableError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::StorageError> for AppError {
    fn from(value: redb::StorageError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::CommitError> for AppError {
    fn from(value: redb::CommitError) -> Self {
        Self::Database(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, NotFoundReason};

    #[test]
    fn not_found_reasons_render_client_messages() {
        assert_eq!(
            AppError::NotFound(NotFoundReason::Missing).to_string(),
            "Not found"
        );
        assert_eq!(
            AppError::NotFound(NotFoundReason::TimeExpired).to_string(),
            "Expired (Time)"
        );
        assert_eq!(
            AppError::NotFound(NotFoundReason::ViewsExhausted).to_string(),
            "Expired (Views)"
        );
    }

    #[test]
    fn validation_error_displays_message_only() {
        let err = AppError::validation("max_views", "max_views must be >= 1");
        assert_eq!(err.to_string(), "max_views must be >= 1");
        assert!(matches!(
            err,
            AppError::Validation {
                field: "max_views",
                ..
            }
        ));
    }
}
