//! Shared test-only helpers for pastebin_core.

use crate::{models::paste::PasteRecord, Database};
use tempfile::TempDir;

/// Creates an isolated temporary database and returns it with the temp dir.
///
/// Keep the [`TempDir`] alive for the full test to preserve the backing files.
///
/// # Panics
/// Panics if temp-dir creation, path conversion, or database initialization
/// fails in the test environment.
pub(crate) fn setup_temp_db() -> (Database, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("db");
    let db = Database::new(db_path.to_str().expect("db path")).expect("db");
    (db, temp_dir)
}

/// Insert a record with fixed timestamps, bypassing id generation.
pub(crate) fn insert_record(
    db: &Database,
    id: &str,
    created_at: i64,
    expires_at: Option<i64>,
    max_views: Option<u64>,
) -> PasteRecord {
    let record = PasteRecord::new(
        id.to_string(),
        format!("content of {}", id),
        created_at,
        expires_at,
        max_views,
    );
    db.pastes.create(&record).expect("insert record");
    record
}
