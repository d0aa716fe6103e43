//! Database layer for paste storage.

/// Paste storage helpers.
pub mod paste;
/// redb table definitions.
pub mod tables;

use crate::error::AppError;
use redb::ReadableDatabase;
use std::path::Path;
use std::sync::Arc;

pub use paste::{PasteDb, ViewIncrement};

/// Database handle with access to the paste table.
pub struct Database {
    pub db: Arc<redb::Database>,
    pub pastes: paste::PasteDb,
}

#[cfg(test)]
mod tests;

impl Database {
    /// Build a database handle from an existing shared redb instance.
    ///
    /// # Returns
    /// A new [`Database`] wrapper that shares the underlying redb instance.
    ///
    /// # Errors
    /// Returns an error if the paste table cannot be initialized.
    pub fn from_shared(db: Arc<redb::Database>) -> Result<Self, AppError> {
        Ok(Self {
            pastes: paste::PasteDb::new(db.clone())?,
            db,
        })
    }

    /// Clone this handle for another worker in the same process.
    ///
    /// redb holds an exclusive file lock, so a second `open` of the same path
    /// would fail; sharing the instance avoids that.
    ///
    /// # Errors
    /// Returns an error if table initialization fails.
    pub fn share(&self) -> Result<Self, AppError> {
        Self::from_shared(self.db.clone())
    }

    /// Open (or create) the database stored under the `path` directory.
    ///
    /// # Returns
    /// A fully initialized [`Database`].
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the file is locked
    /// by another process, or table initialization fails.
    pub fn new(path: &str) -> Result<Self, AppError> {
        let dir = Path::new(path);
        std::fs::create_dir_all(dir).map_err(|err| {
            AppError::StorageMessage(format!(
                "Failed to create database directory '{}': {}",
                dir.display(),
                err
            ))
        })?;

        let file = dir.join(tables::REDB_FILE_NAME);
        let db = match redb::Database::create(&file) {
            Ok(db) => Arc::new(db),
            Err(redb::DatabaseError::DatabaseAlreadyOpen) => {
                return Err(AppError::StorageMessage(format!(
                    "Database '{}' is already open in another process. \
                    Stop it first, or set DB_PATH to use a different location.",
                    file.display()
                )));
            }
            Err(err) => return Err(err.into()),
        };
        tracing::debug!("Opened paste database at {}", file.display());

        Self::from_shared(db)
    }

    /// Readiness probe: open a read transaction on the paste table.
    ///
    /// # Errors
    /// Returns an error when the store cannot serve reads.
    pub fn ping(&self) -> Result<(), AppError> {
        let read_txn = self.db.begin_read()?;
        read_txn.open_table(tables::PASTES)?;
        Ok(())
    }
}
