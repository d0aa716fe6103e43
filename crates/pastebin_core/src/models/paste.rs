//! Paste record and request/response payloads.

use crate::error::NotFoundReason;
use serde::{Deserialize, Serialize};

/// A stored paste.
///
/// Timestamps are milliseconds since the Unix epoch. Everything except
/// `current_views` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteRecord {
    pub id: String,
    pub content: String,
    pub created_at: i64,
    pub expires_at: Option<i64>,
    pub max_views: Option<u64>,
    pub current_views: u64,
}

/// Request payload for creating a paste.
///
/// Fields are kept loose (optional, any JSON number) so that missing,
/// out-of-range or fractional values reach validation instead of failing JSON
/// decoding.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CreatePasteRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub ttl_seconds: Option<f64>,
    #[serde(default)]
    pub max_views: Option<f64>,
}

/// Response body for a created paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPaste {
    pub id: String,
    pub url: String,
}

/// Content returned by a successful read.
///
/// `current_views` includes the read that produced this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteView {
    pub content: String,
    pub created_at: i64,
    pub current_views: u64,
}

impl PasteRecord {
    /// Build a fresh record with zero views.
    pub fn new(
        id: String,
        content: String,
        created_at: i64,
        expires_at: Option<i64>,
        max_views: Option<u64>,
    ) -> Self {
        Self {
            id,
            content,
            created_at,
            expires_at,
            max_views,
            current_views: 0,
        }
    }

    /// `true` once `now` is strictly past the expiry instant.
    pub fn is_time_expired(&self, now_millis: i64) -> bool {
        self.expires_at
            .is_some_and(|expires_at| now_millis > expires_at)
    }

    /// `true` when every permitted view has been used.
    pub fn is_view_exhausted(&self) -> bool {
        self.max_views
            .is_some_and(|max_views| self.current_views >= max_views)
    }

    /// Check both expiry conditions in order, time first.
    ///
    /// # Errors
    /// Returns the first failing [`NotFoundReason`].
    pub fn ensure_alive(&self, now_millis: i64) -> Result<(), NotFoundReason> {
        if self.is_time_expired(now_millis) {
            return Err(NotFoundReason::TimeExpired);
        }
        if self.is_view_exhausted() {
            return Err(NotFoundReason::ViewsExhausted);
        }
        Ok(())
    }

    /// Project the served fields.
    pub fn to_view(&self) -> PasteView {
        PasteView {
            content: self.content.clone(),
            created_at: self.created_at,
            current_views: self.current_views,
        }
    }
}
