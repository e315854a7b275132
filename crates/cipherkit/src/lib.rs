//! `cipherkit` — symmetric and asymmetric cryptographic primitives behind one
//! uniform call surface.
//!
//! Provides:
//! - AES-256-CBC ([`aes::cbc`]) and AES-256-GCM ([`aes::gcm`]) with base64
//!   ciphertext envelopes.
//! - A deprecated legacy mode ([`aes::legacy`]) that hashes arbitrary-length
//!   keys with MD5 before delegating to CBC, kept only for historical callers.
//! - RSA encryption, decryption, signing, and verification over PEM-encoded
//!   keys ([`rsa`]).
//! - RSA key-pair generation, synchronously in-process or asynchronously via
//!   an isolated `keygen-worker` process ([`keygen`]).
//!
//! Every cipher call validates key, IV, and nonce lengths ([`validate`])
//! before touching key material. GCM nonces are mandatory and must be unique
//! per (key, message) pair — see the [`aes::gcm`] module documentation for
//! why reuse is catastrophic.

pub mod aes;
pub mod hash;
pub mod keygen;
pub mod rsa;
pub mod validate;

pub use common::{KeyPair, KeySize, KeySizeError, WorkerFailure};
