//! Stable on-disk identifiers for list sources.

use sha2::{Digest, Sha256};

/// Extension of stored list files.
pub const LIST_EXTENSION: &str = "txt";

/// SHA-256 of the URL as lowercase hex. Used as the stored file stem.
pub fn source_id(url: &str) -> String {
    hex::encode(Sha256::digest(url.as_bytes()))
}

/// `<id>.txt`, the name a list is stored under and advertised by in the manifest.
pub fn file_name(id: &str) -> String {
    format!("{}.{}", id, LIST_EXTENSION)
}
