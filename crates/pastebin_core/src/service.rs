//! Paste creation and the expiry-gated read shared by every read surface.

use crate::{
    clock::{Clock, SystemClock},
    db::ViewIncrement,
    error::{AppError, NotFoundReason},
    models::paste::{CreatePasteRequest, CreatedPaste, PasteRecord, PasteView},
    naming, Database,
};

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPaste {
    pub content: String,
    pub ttl_seconds: Option<u64>,
    pub max_views: Option<u64>,
}

impl NewPaste {
    /// Absolute expiry for a paste created at `created_at` (ms).
    ///
    /// # Errors
    /// Returns a `ttl_seconds` validation error if the expiry overflows.
    pub fn expires_at(&self, created_at: i64) -> Result<Option<i64>, AppError> {
        let Some(ttl_seconds) = self.ttl_seconds else {
            return Ok(None);
        };
        i64::try_from(ttl_seconds)
            .ok()
            .and_then(|ttl| ttl.checked_mul(1000))
            .and_then(|ttl_ms| created_at.checked_add(ttl_ms))
            .map(Some)
            .ok_or_else(|| AppError::validation("ttl_seconds", "ttl_seconds is too large"))
    }
}

// 2^64; whole numbers at or above it do not fit a u64.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Accept a JSON number that is a whole number `>= 1`.
///
/// `5.0` is treated like `5`; `1.5` is rejected.
fn positive_whole_number(field: &'static str, value: Option<f64>) -> Result<Option<u64>, AppError> {
    let Some(value) = value else {
        return Ok(None);
    };
    if !(value >= 1.0) {
        return Err(AppError::validation(field, format!("{} must be >= 1", field)));
    }
    if value.fract() != 0.0 {
        return Err(AppError::validation(
            field,
            format!("{} must be a whole number", field),
        ));
    }
    if value >= U64_LIMIT {
        return Err(AppError::validation(field, format!("{} is too large", field)));
    }
    Ok(Some(value as u64))
}

/// Validate a create request.
///
/// Checks run in field order: `content`, `ttl_seconds`, `max_views`.
///
/// # Arguments
/// - `req`: Decoded request payload.
/// - `max_paste_size`: Upper bound on content size in bytes.
///
/// # Errors
/// Returns [`AppError::Validation`] naming the first invalid field.
pub fn validate_create_request(
    req: CreatePasteRequest,
    max_paste_size: usize,
) -> Result<NewPaste, AppError> {
    let content = match req.content {
        Some(content) if !content.trim().is_empty() => content,
        _ => return Err(AppError::validation("content", "Content is required")),
    };
    if content.len() > max_paste_size {
        return Err(AppError::validation(
            "content",
            format!("Paste size exceeds maximum of {} bytes", max_paste_size),
        ));
    }

    let ttl_seconds = positive_whole_number("ttl_seconds", req.ttl_seconds)?;
    let max_views = positive_whole_number("max_views", req.max_views)?;

    Ok(NewPaste {
        content,
        ttl_seconds,
        max_views,
    })
}

/// Validate and persist a new paste.
///
/// Creation time always comes from the system clock; the test-mode time
/// override only applies to reads.
///
/// # Returns
/// The new id and its share path.
///
/// # Errors
/// Returns a validation error for bad input, or a storage error when the
/// insert fails (including the rare id collision).
pub fn create_paste(
    db: &Database,
    req: CreatePasteRequest,
    max_paste_size: usize,
) -> Result<CreatedPaste, AppError> {
    let new_paste = validate_create_request(req, max_paste_size)?;
    let created_at = SystemClock.now_millis();
    let expires_at = new_paste.expires_at(created_at)?;

    let record = PasteRecord::new(
        naming::generate_id(),
        new_paste.content,
        created_at,
        expires_at,
        new_paste.max_views,
    );
    db.pastes.create(&record)?;

    tracing::debug!(
        id = %record.id,
        expires_at = ?record.expires_at,
        max_views = ?record.max_views,
        "created paste"
    );
    Ok(CreatedPaste {
        url: naming::share_path(&record.id),
        id: record.id,
    })
}

/// Serve a paste and consume one view.
///
/// Checks run in order and the first failure wins: existence, time expiry
/// (`now > expires_at`), view exhaustion (`current_views >= max_views`). Both
/// expiry checks see the pre-increment row. A failed read never changes the
/// stored counter.
///
/// # Arguments
/// - `db`: Open database handle.
/// - `id`: Paste id.
/// - `clock`: Time source for the expiry comparison, read once.
///
/// # Returns
/// Content, creation time and the post-increment view count.
///
/// # Errors
/// Returns [`AppError::NotFound`] with the failing reason, or a storage error.
pub fn read_and_consume(
    db: &Database,
    id: &str,
    clock: &dyn Clock,
) -> Result<PasteView, AppError> {
    let now = clock.now_millis();

    let paste = db
        .pastes
        .get(id)?
        .ok_or(AppError::NotFound(NotFoundReason::Missing))?;
    paste.ensure_alive(now).map_err(AppError::NotFound)?;

    match db.pastes.increment_views(id)? {
        ViewIncrement::Applied(updated) => {
            tracing::debug!(id, current_views = updated.current_views, "served paste");
            Ok(updated.to_view())
        }
        // Another reader consumed the last view between lookup and increment.
        ViewIncrement::LimitReached => Err(AppError::NotFound(NotFoundReason::ViewsExhausted)),
        ViewIncrement::Missing => Err(AppError::NotFound(NotFoundReason::Missing)),
    }
}
