//! SHA-256 hex digest helper.
//!
//! Used for weather cache keys and anywhere else a stable, opaque digest of a
//! string is needed.

use sha2::{Digest, Sha256};

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}
