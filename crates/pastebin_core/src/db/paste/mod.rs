//! Paste storage operations backed by redb.

use crate::{db::tables::PASTES, error::AppError, models::paste::PasteRecord};
use redb::{ReadableDatabase, ReadableTable};
use std::sync::Arc;

/// Outcome of a conditional view increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewIncrement {
    /// The counter was bumped; holds the post-increment row.
    Applied(PasteRecord),
    /// `current_views` had already reached `max_views`; nothing was written.
    LimitReached,
    /// No row exists for the id.
    Missing,
}

fn deserialize_paste(bytes: &[u8]) -> Result<PasteRecord, AppError> {
    Ok(bincode::deserialize(bytes)?)
}

/// Accessor for the paste table.
pub struct PasteDb {
    db: Arc<redb::Database>,
}

impl PasteDb {
    /// Initialize the paste table if it does not exist yet.
    ///
    /// # Errors
    /// Returns an error when redb transaction/table initialization fails.
    pub fn new(db: Arc<redb::Database>) -> Result<Self, AppError> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(PASTES)?;
        write_txn.commit()?;
        Ok(Self { db })
    }

    /// Insert a new paste row.
    ///
    /// # Errors
    /// Returns an error when serialization fails, the id already exists, or
    /// storage operations fail. Existing rows are never overwritten.
    pub fn create(&self, paste: &PasteRecord) -> Result<(), AppError> {
        let encoded = bincode::serialize(paste)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut pastes = write_txn.open_table(PASTES)?;
            if pastes.get(paste.id.as_str())?.is_some() {
                return Err(AppError::StorageMessage(format!(
                    "Paste id '{}' already exists",
                    paste.id
                )));
            }
            pastes.insert(paste.id.as_str(), encoded.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Fetch a paste by id.
    ///
    /// # Returns
    /// `Ok(Some(paste))` when found, `Ok(None)` when missing.
    ///
    /// # Errors
    /// Returns an error when storage access or deserialization fails.
    pub fn get(&self, id: &str) -> Result<Option<PasteRecord>, AppError> {
        let read_txn = self.db.begin_read()?;
        let pastes = read_txn.open_table(PASTES)?;
        match pastes.get(id)? {
            Some(value) => Ok(Some(deserialize_paste(value.value())?)),
            None => Ok(None),
        }
    }

    /// Add one view to a paste, unless its view limit is already reached.
    ///
    /// The read, limit check and write happen inside one write transaction.
    /// redb serializes write transactions, so concurrent callers can neither
    /// lose an increment nor push `current_views` past `max_views`.
    ///
    /// # Errors
    /// Returns an error when storage access or (de)serialization fails.
    pub fn increment_views(&self, id: &str) -> Result<ViewIncrement, AppError> {
        let write_txn = self.db.begin_write()?;
        let outcome = {
            let mut pastes = write_txn.open_table(PASTES)?;

            let Some(guard) = pastes.get(id)? else {
                return Ok(ViewIncrement::Missing);
            };
            let mut paste = deserialize_paste(guard.value())?;
            drop(guard);

            if paste.is_view_exhausted() {
                return Ok(ViewIncrement::LimitReached);
            }

            paste.current_views = paste.current_views.saturating_add(1);
            let encoded = bincode::serialize(&paste)?;
            pastes.insert(id, encoded.as_slice())?;
            ViewIncrement::Applied(paste)
        };

        write_txn.commit()?;
        Ok(outcome)
    }
}
