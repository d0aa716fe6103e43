//! Core domain library for the paste service (config, storage, expiry rules).

/// Time sources for creation and expiry checks.
pub mod clock;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants.
pub mod constants;
/// Database access layer.
pub mod db;
/// Application error types (storage/domain).
pub mod error;
/// Data models for API requests and persistence.
pub mod models;
/// Paste identifier helpers.
pub mod naming;
/// Create and read-and-consume operations.
pub mod service;

#[cfg(test)]
mod env;
#[cfg(test)]
pub(crate) mod test_support;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use constants::DEFAULT_PORT;
pub use db::Database;
pub use error::{AppError, NotFoundReason};
