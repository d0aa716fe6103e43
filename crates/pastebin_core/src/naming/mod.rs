//! Short paste identifier generation.

use crate::constants::{PASTE_ID_ALPHABET, PASTE_ID_LENGTH, SHARE_PATH_PREFIX};
use rand::Rng;

/// Generate a random URL-safe paste id.
///
/// Ids are drawn from the thread-local CSPRNG with 6 bits of entropy per
/// character. No lookup against existing rows is made; the store's primary
/// key insert is the only collision guard.
///
/// # Returns
/// A [`PASTE_ID_LENGTH`]-character id.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..PASTE_ID_LENGTH)
        .map(|_| PASTE_ID_ALPHABET[rng.gen_range(0..PASTE_ID_ALPHABET.len())] as char)
        .collect()
}

/// Relative path where a paste can be viewed.
pub fn share_path(id: &str) -> String {
    format!("{}{}", SHARE_PATH_PREFIX, id)
}
