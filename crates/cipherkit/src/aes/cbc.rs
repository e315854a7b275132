//! AES-256-CBC encryption and decryption of UTF-8 strings.
//!
//! CBC provides confidentiality only — there is no authentication tag, so
//! decrypting with the wrong key or IV does not fail; it yields garbled
//! output. That is long-standing documented behaviour for this mode (callers
//! depending on integrity use [`super::gcm`] instead) and must not be "fixed"
//! here.
//!
//! The ciphertext envelope is `base64(raw CBC ciphertext)` with standard
//! alphabet and padding, wire-compatible with the historical producer.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

use crate::validate::{validate_iv, validate_key, ValidationError};

use super::NULL_IV;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Errors produced by the CBC cipher.
#[derive(Debug, Error)]
pub enum CbcError {
    /// Key or IV failed validation; raised before any cipher call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The ciphertext envelope is not valid base64.
    #[error("ciphertext is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decryption produced invalid PKCS#7 padding (truncated or corrupted
    /// ciphertext, or a wrong key/IV that happened to garble the final block).
    #[error("decryption produced invalid padding")]
    Padding,
}

/// Encrypt a UTF-8 string with AES-256-CBC and PKCS#7 padding.
///
/// `iv` defaults to [`NULL_IV`] when `None` — a known-weak compatibility
/// fallback; pass a fresh [`generate_iv`] value for anything new.
///
/// # Errors
///
/// Returns [`CbcError::Validation`] if the key is not 32 bytes or the IV is
/// not 16 bytes.
pub fn encrypt(key: &[u8], plaintext: &str, iv: Option<&[u8]>) -> Result<String, CbcError> {
    let iv = iv.unwrap_or(NULL_IV);
    validate_key(key)?;
    validate_iv(iv)?;

    let encryptor =
        Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| ValidationError::InvalidKey)?;
    let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
    Ok(STANDARD.encode(ciphertext))
}

/// Decrypt a base64 AES-256-CBC envelope back to a string.
///
/// The decrypted bytes are decoded as UTF-8 **lossily**: a wrong IV garbles
/// the leading block without tripping any integrity check, and the garbled
/// text (not an error) is what this mode has always returned.
///
/// # Errors
///
/// Returns [`CbcError::Validation`] on a bad key/IV length,
/// [`CbcError::Base64`] on a malformed envelope, and [`CbcError::Padding`]
/// when the final block does not unpad.
pub fn decrypt(key: &[u8], ciphertext_b64: &str, iv: Option<&[u8]>) -> Result<String, CbcError> {
    let iv = iv.unwrap_or(NULL_IV);
    validate_key(key)?;
    validate_iv(iv)?;

    let ciphertext = STANDARD.decode(ciphertext_b64)?;
    let decryptor =
        Aes256CbcDec::new_from_slices(key, iv).map_err(|_| ValidationError::InvalidKey)?;
    let plaintext = decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| CbcError::Padding)?;
    Ok(String::from_utf8_lossy(&plaintext).into_owned())
}

/// Generate a random 16-character IV (hex characters, used as raw bytes).
pub fn generate_iv() -> String {
    super::hex_token(crate::validate::IV_LEN)
}
