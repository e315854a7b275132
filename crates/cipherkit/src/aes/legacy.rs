//! Deprecated legacy cipher mode: arbitrary-length keys hashed with MD5.
//!
//! Historical callers passed free-form passphrases instead of 32-byte keys;
//! this mode keeps them working by deriving the actual CBC key as the MD5 hex
//! digest of whatever was supplied ([`derive_key`]). The derivation is not a
//! real KDF and the default IV is the fixed [`super::NULL_IV`], so this mode
//! is insecure by modern standards — it exists strictly for backward
//! compatibility and stays isolated from [`super::cbc`] and [`super::gcm`]:
//! the relaxed validation here never applies to the strict paths.
//!
//! Every entry point logs a deprecation warning when invoked. New callers use
//! [`super::cbc`] with a full-length key (or better, [`super::gcm`]).

use rand::{distributions::Alphanumeric, Rng};
use tracing::warn;

use crate::hash::md5_hex;
use crate::validate::{ValidationError, KEY_LEN};

use super::cbc::{self, CbcError};

/// Derive the 32-byte-equivalent CBC key for a legacy passphrase: the
/// lowercase MD5 hex digest (32 ASCII characters) of the raw input bytes.
pub fn derive_key(key: &[u8]) -> String {
    md5_hex(key)
}

/// Encrypt with a variable-length legacy key.
///
/// The key is presence-checked only, then MD5-derived and handed to
/// [`cbc::encrypt`]. `iv` defaults to [`super::NULL_IV`].
///
/// # Errors
///
/// Returns [`CbcError::Validation`] on an empty key or bad IV length.
#[deprecated(note = "use aes::cbc::encrypt with a 32-byte key")]
pub fn encrypt(key: &[u8], plaintext: &str, iv: Option<&[u8]>) -> Result<String, CbcError> {
    warn!("legacy encrypt is deprecated, use aes::cbc::encrypt with a hashed key instead");
    validate_key(key)?;
    cbc::encrypt(derive_key(key).as_bytes(), plaintext, iv)
}

/// Decrypt a ciphertext produced by the legacy mode.
///
/// # Errors
///
/// Returns [`CbcError::Validation`] on an empty key or bad IV length, plus
/// the usual [`cbc::decrypt`] failures.
#[deprecated(note = "use aes::cbc::decrypt with a 32-byte key")]
pub fn decrypt(key: &[u8], ciphertext_b64: &str, iv: Option<&[u8]>) -> Result<String, CbcError> {
    warn!("legacy decrypt is deprecated, use aes::cbc::decrypt with a hashed key instead");
    validate_key(key)?;
    cbc::decrypt(derive_key(key).as_bytes(), ciphertext_b64, iv)
}

/// Generate a random IV.
#[deprecated(note = "use aes::cbc::generate_iv")]
pub fn generate_iv() -> String {
    warn!("legacy generate_iv is deprecated, use aes::cbc::generate_iv instead");
    cbc::generate_iv()
}

/// Generate a legacy key: the MD5 hex digest of a random 32-character
/// alphanumeric string. The digest step is redundant (the legacy encrypt path
/// hashes again) but is the historical construction, preserved as-is.
#[deprecated(note = "generate 32 bytes of key material directly instead")]
pub fn generate_key() -> String {
    warn!("legacy generate_key is deprecated, generate 32-byte key material directly instead");
    let seed: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(KEY_LEN)
        .map(char::from)
        .collect();
    derive_key(seed.as_bytes())
}

/// Legacy key check: only presence is required. A key that is not 32 bytes
/// would fail the strict paths, so a warning is logged to flag callers that
/// will break when they migrate.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidKey`] only when the key is empty.
#[deprecated(note = "use validate::validate_key")]
pub fn validate_key(key: &[u8]) -> Result<(), ValidationError> {
    warn!("legacy validate_key is deprecated, use validate::validate_key instead");
    if key.is_empty() {
        return Err(ValidationError::InvalidKey);
    }
    if key.len() != KEY_LEN {
        warn!(
            key_len = key.len(),
            "legacy key is not 32 bytes; strict cipher paths will reject it"
        );
    }
    Ok(())
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"my secret";
    const IV: &[u8] = b"thisisacorrectiv";

    #[test]
    fn derive_key_known_vector() {
        assert_eq!(derive_key(SECRET), "0003d04b8e93ae73189ea88a01b6a0b5");
    }

    #[test]
    fn derived_key_passes_strict_validation() {
        assert!(crate::validate::validate_key(derive_key(SECRET).as_bytes()).is_ok());
    }

    #[test]
    fn known_vector() {
        let encrypted = encrypt(SECRET, "plaintext", Some(IV)).unwrap();
        assert_eq!(encrypted, "QHYtdyk+N7++AMlapdOjdw==");
    }

    #[test]
    fn round_trip_with_default_iv() {
        let encrypted = encrypt(SECRET, "plaintext", None).unwrap();
        assert_eq!(decrypt(SECRET, &encrypted, None).unwrap(), "plaintext");
    }

    #[test]
    fn accepts_any_key_length() {
        let encrypted = encrypt(b"x", "plaintext", Some(IV)).unwrap();
        assert_eq!(decrypt(b"x", &encrypted, Some(IV)).unwrap(), "plaintext");
    }

    #[test]
    fn matches_strict_cbc_under_derived_key() {
        let via_legacy = encrypt(SECRET, "plaintext", Some(IV)).unwrap();
        let via_strict =
            cbc::encrypt(derive_key(SECRET).as_bytes(), "plaintext", Some(IV)).unwrap();
        assert_eq!(via_legacy, via_strict);
    }

    #[test]
    fn rejects_empty_key() {
        let err = encrypt(b"", "plaintext", Some(IV)).unwrap_err();
        assert!(matches!(
            err,
            CbcError::Validation(ValidationError::InvalidKey)
        ));
    }

    #[test]
    fn still_validates_iv_length() {
        let err = encrypt(SECRET, "plaintext", Some(b"invalidiv".as_slice())).unwrap_err();
        assert!(matches!(err, CbcError::Validation(ValidationError::InvalidIv)));
    }

    #[test]
    fn generate_key_is_32_hex_chars() {
        let key = generate_key();
        assert_eq!(key.len(), 32);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(key, generate_key());
    }

    #[test]
    fn validate_key_presence_only() {
        assert!(validate_key(b"short").is_ok());
        assert!(validate_key(b"").is_err());
    }
}
