//! AES-256 symmetric ciphers: strict CBC, authenticated GCM, and the
//! deprecated legacy mode.
//!
//! All three variants share the 32-byte key contract enforced by
//! [`crate::validate`] and return base64 ciphertext envelopes. They share no
//! mutable configuration — the legacy mode's relaxed key rules never leak
//! into [`cbc`] or [`gcm`].

use rand::RngCore;

pub mod cbc;
pub mod gcm;
pub mod legacy;

/// Byte length of a GCM authentication tag.
pub const TAG_LEN: usize = 16;

/// The all-zeros default IV (the ASCII characters `0000000000000000`).
///
/// A fixed IV leaks plaintext-prefix equality across messages under the same
/// key; it is retained only so ciphertexts from historical callers that never
/// passed an IV keep decrypting. Callers wanting confidentiality against
/// prefix correlation must supply a fresh [`cbc::generate_iv`] value per
/// message. The GCM path never substitutes this constant.
pub const NULL_IV: &[u8; 16] = b"0000000000000000";

/// Fixed-width random token: `len` characters taken from the hex encoding of
/// fresh OS-seeded random bytes.
///
/// This is the historical construction for generated IVs and nonces — the
/// token is ASCII hex, so its raw bytes are what the cipher consumes.
pub(crate) fn hex_token(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut bytes);
    let mut token = hex::encode(bytes);
    token.truncate(len);
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_iv_is_ascii_zeros() {
        assert_eq!(NULL_IV.len(), crate::validate::IV_LEN);
        assert!(NULL_IV.iter().all(|&b| b == b'0'));
    }

    #[test]
    fn hex_token_has_requested_width() {
        assert_eq!(hex_token(16).len(), 16);
        assert_eq!(hex_token(12).len(), 12);
    }

    #[test]
    fn hex_token_is_hex_and_non_repeating() {
        let a = hex_token(16);
        let b = hex_token(16);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
