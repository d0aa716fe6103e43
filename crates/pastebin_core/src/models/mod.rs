//! Data models for API requests and persistence.

/// Paste data types.
pub mod paste;

#[cfg(test)]
mod tests;
