//! Key, IV, and nonce validation.
//!
//! Every cipher entry point runs these checks before any cryptographic call,
//! so malformed input fails fast with a typed error instead of being silently
//! truncated or padded. Lengths are measured in raw bytes exactly as supplied
//! by the caller — no trimming, no normalisation.

use thiserror::Error;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of a CBC initialisation vector (one AES block).
pub const IV_LEN: usize = 16;

/// Byte length of a GCM nonce (96 bits, the NIST SP 800-38D recommended size).
pub const NONCE_LEN: usize = 12;

/// Rejection reasons for key material supplied to a cipher.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The key is absent or not exactly [`KEY_LEN`] bytes.
    #[error("invalid key: {KEY_LEN}-byte value required")]
    InvalidKey,

    /// The IV is absent or not exactly [`IV_LEN`] bytes.
    #[error("invalid iv: {IV_LEN}-byte value required")]
    InvalidIv,

    /// The nonce is absent or not exactly [`NONCE_LEN`] bytes.
    #[error("invalid nonce: {NONCE_LEN}-byte value required")]
    InvalidNonce,
}

/// Check that `key` is exactly [`KEY_LEN`] bytes.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidKey`] otherwise.
pub fn validate_key(key: &[u8]) -> Result<(), ValidationError> {
    if key.len() != KEY_LEN {
        return Err(ValidationError::InvalidKey);
    }
    Ok(())
}

/// Check that `iv` is exactly [`IV_LEN`] bytes.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidIv`] otherwise.
pub fn validate_iv(iv: &[u8]) -> Result<(), ValidationError> {
    if iv.len() != IV_LEN {
        return Err(ValidationError::InvalidIv);
    }
    Ok(())
}

/// Check that `nonce` is exactly [`NONCE_LEN`] bytes.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidNonce`] otherwise.
pub fn validate_nonce(nonce: &[u8]) -> Result<(), ValidationError> {
    if nonce.len() != NONCE_LEN {
        return Err(ValidationError::InvalidNonce);
    }
    Ok(())
}
