//! SHA-256 checksums
//!
//! Output matches `sha256sum` on Linux and `shasum -a 256` on macOS:
//! 64 lowercase hex characters.

use sha2::{Digest, Sha256};

/// Length of a hex-encoded SHA-256 digest
pub const SHA256_HEX_LEN: usize = 64;

/// Compute SHA256 checksum of data
pub fn compute_checksum(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
