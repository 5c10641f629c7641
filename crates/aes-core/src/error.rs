//! Error types for length validation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Precondition failures reported before any round transform runs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key material is not 16, 24 or 32 bytes long.
    #[error("invalid key length: expected 16, 24 or 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// Input to encryption or decryption is not exactly one block.
    #[error("invalid block length: expected 16 bytes, got {0}")]
    InvalidBlockLength(usize),

    /// A stored schedule does not hold `Nr + 1` round keys for its key size.
    #[error("invalid key schedule: expected {expected} round keys, got {actual}")]
    InvalidScheduleLength {
        /// Round keys required by the key size.
        expected: usize,
        /// Round keys actually present.
        actual: usize,
    },
}
