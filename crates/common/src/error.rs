//! Common error types shared across crates.

use thiserror::Error;

/// Rejection reasons for a requested RSA key size.
///
/// Produced when validating the bit-size argument of a generation request,
/// before any key material is touched. The worker binary maps these to its
/// `missing_key_size` / `invalid_key_size` failure codes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeySizeError {
    /// No key size was supplied (e.g. the worker was invoked without its
    /// positional argument).
    #[error("key size argument is required")]
    Missing,

    /// The supplied key size is not a number.
    #[error("key size must be numeric, got {0:?}")]
    NonNumeric(String),

    /// The supplied key size is zero or not a multiple of 8 bits.
    #[error("key size must be a positive multiple of 8, got {0}")]
    Invalid(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        assert!(KeySizeError::NonNumeric("abc".into())
            .to_string()
            .contains("abc"));
        assert!(KeySizeError::Invalid(1001).to_string().contains("1001"));
    }

    #[test]
    fn display_for_missing_mentions_requirement() {
        assert!(KeySizeError::Missing.to_string().contains("required"));
    }
}
