//! Common types, protocol definitions, and errors shared across `cipherkit` crates.

pub mod error;
pub mod protocol;

pub use error::KeySizeError;
pub use protocol::{KeyPair, KeySize, WorkerFailure};
