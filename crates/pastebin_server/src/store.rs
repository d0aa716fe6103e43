//! Process-wide paste database handle, opened on first use.

use crate::{AppError, Database};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Lazily connected database shared by all handlers.
///
/// The first caller opens the database; concurrent first callers wait on the
/// same initialization. A failed open leaves the cell empty so a later request
/// retries. There is no explicit teardown.
pub struct LazyDatabase {
    path: String,
    cell: OnceCell<Arc<Database>>,
}

impl LazyDatabase {
    /// Create an unconnected handle for the database directory at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    /// Wrap an already open database.
    pub fn connected(db: Database) -> Self {
        Self {
            path: String::new(),
            cell: OnceCell::new_with(Some(Arc::new(db))),
        }
    }

    /// Return the shared database, opening it if this is the first use.
    ///
    /// # Errors
    /// Returns an error when the database cannot be opened.
    pub async fn get(&self) -> Result<Arc<Database>, AppError> {
        self.cell
            .get_or_try_init(|| async {
                let path = self.path.clone();
                let db = tokio::task::spawn_blocking(move || Database::new(&path))
                    .await
                    .map_err(|err| {
                        AppError::StorageMessage(format!("database open task failed: {}", err))
                    })??;
                tracing::info!("Connected to paste database at {}", self.path);
                Ok::<_, AppError>(Arc::new(db))
            })
            .await
            .cloned()
    }

    /// Whether the database has been opened.
    pub fn is_connected(&self) -> bool {
        self.cell.initialized()
    }
}
