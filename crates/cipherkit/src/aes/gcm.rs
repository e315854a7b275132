//! AES-256-GCM authenticated encryption of UTF-8 strings.
//!
//! The envelope is `base64(tag ‖ ciphertext)`: the 16-byte authentication tag
//! comes first, the ciphertext immediately follows. No length prefix is
//! needed because the tag length is fixed.
//!
//! **A nonce MUST be provided and MUST be unique per (key, message) pair.**
//! Unlike the CBC IV there is no default: nonce reuse under the same key
//! destroys both confidentiality and the authentication guarantee for every
//! affected message, and can let an attacker recover the authentication key.
//! Use [`generate_nonce`] to produce a fresh nonce for every encryption.
//! Encryption is deliberately deterministic for a fixed (key, message, nonce)
//! triple — uniqueness is the caller's obligation, and this module cannot
//! enforce it across calls.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

use crate::validate::{validate_key, validate_nonce, ValidationError};

use super::TAG_LEN;

/// Errors produced by the GCM cipher.
#[derive(Debug, Error)]
pub enum GcmError {
    /// Key or nonce failed validation; raised before any cipher call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The ciphertext envelope is not valid base64.
    #[error("ciphertext is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The envelope is shorter than the authentication tag.
    #[error("ciphertext envelope too short: at least {TAG_LEN} tag bytes required")]
    Truncated,

    /// The authentication tag did not verify — the ciphertext was tampered
    /// with, or the key or nonce is wrong. No plaintext is released.
    #[error("authentication failed: tag mismatch")]
    Authentication,

    /// AEAD encryption itself failed (effectively unreachable for in-memory
    /// messages with a valid key and nonce).
    #[error("aead encryption failed")]
    Encrypt,

    /// The authenticated plaintext is not valid UTF-8.
    #[error("decrypted bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encrypt a UTF-8 string with AES-256-GCM.
///
/// Returns `base64(tag ‖ ciphertext)`. Encrypting the same (key, plaintext,
/// nonce) triple twice yields byte-identical output.
///
/// # Errors
///
/// Returns [`GcmError::Validation`] if the key is not 32 bytes or the nonce
/// is not 12 bytes. A missing nonce is an error here by design — there is no
/// GCM counterpart to the CBC null-IV fallback.
pub fn encrypt(key: &[u8], plaintext: &str, nonce: &[u8]) -> Result<String, GcmError> {
    validate_key(key)?;
    validate_nonce(nonce)?;

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| ValidationError::InvalidKey)?;
    // aes-gcm appends the tag; the envelope wants it up front.
    let sealed = cipher
        .encrypt(Nonce::from_slice(nonce), plaintext.as_bytes())
        .map_err(|_| GcmError::Encrypt)?;
    let (ciphertext, tag) = sealed.split_at(sealed.len() - TAG_LEN);

    let mut envelope = Vec::with_capacity(sealed.len());
    envelope.extend_from_slice(tag);
    envelope.extend_from_slice(ciphertext);
    Ok(STANDARD.encode(envelope))
}

/// Decrypt a `base64(tag ‖ ciphertext)` envelope back to a string.
///
/// The tag is verified before any plaintext is released: a one-byte mutation
/// of the ciphertext or tag, a wrong key, or a wrong nonce all fail with
/// [`GcmError::Authentication`] — never garbled output. This integrity
/// guarantee is what distinguishes GCM from [`super::cbc`].
///
/// # Errors
///
/// Returns [`GcmError::Validation`] on bad key/nonce lengths,
/// [`GcmError::Base64`] / [`GcmError::Truncated`] on a malformed envelope,
/// and [`GcmError::Authentication`] on tag mismatch.
pub fn decrypt(key: &[u8], envelope_b64: &str, nonce: &[u8]) -> Result<String, GcmError> {
    validate_key(key)?;
    validate_nonce(nonce)?;

    let combined = STANDARD.decode(envelope_b64)?;
    if combined.len() < TAG_LEN {
        return Err(GcmError::Truncated);
    }
    let (tag, ciphertext) = combined.split_at(TAG_LEN);

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| ValidationError::InvalidKey)?;
    let mut sealed = Vec::with_capacity(combined.len());
    sealed.extend_from_slice(ciphertext);
    sealed.extend_from_slice(tag);

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), sealed.as_slice())
        .map_err(|_| GcmError::Authentication)?;
    Ok(String::from_utf8(plaintext)?)
}

/// Generate a random 12-character nonce (hex characters, used as raw bytes).
///
/// A new nonce MUST be generated for every encryption under the same key.
pub fn generate_nonce() -> String {
    super::hex_token(crate::validate::NONCE_LEN)
}
