//! Shared constants used across pastebin crates.

/// Default API port.
pub const DEFAULT_PORT: u16 = 38421;

/// Default maximum paste size accepted by the API layer.
pub const DEFAULT_MAX_PASTE_SIZE: usize = 10 * 1024 * 1024;

/// Length of generated paste identifiers.
pub const PASTE_ID_LENGTH: usize = 8;

/// URL-safe alphabet for paste identifiers (64 symbols, 6 bits each).
pub const PASTE_ID_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Request header carrying an override of "now" in milliseconds (test mode only).
pub const TEST_NOW_HEADER: &str = "x-test-now-ms";

/// Path prefix of the shareable paste view.
pub const SHARE_PATH_PREFIX: &str = "/p/";
