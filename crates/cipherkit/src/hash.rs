//! Hex-encoded digest helpers.
//!
//! MD5 is exposed solely because the legacy key adapter and its historical
//! callers depend on it; it is not collision-resistant and must not be used
//! for anything security-sensitive. New code wanting a digest should use
//! [`sha256_hex`].

use md5::Md5;
use sha2::{Digest, Sha256};

/// Lowercase hex MD5 digest of `data` (32 characters).
pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}

/// Lowercase hex SHA-256 digest of `data` (64 characters).
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
