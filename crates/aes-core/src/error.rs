//! Error kinds surfaced by the cipher engine.

use thiserror::Error;

/// Rejections raised by key expansion, block, and chaining operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Key was not 16, 24 or 32 bytes long.
    #[error("key must be 16, 24 or 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// Block input was not exactly 16 bytes long.
    #[error("block must be exactly 16 bytes, got {0}")]
    InvalidBlockSize(usize),

    /// Bulk input length was not a multiple of the block size.
    #[error("data length {0} is not a multiple of the 16-byte block size")]
    UnalignedData(usize),

    /// Initialization vector was not exactly one block long.
    #[error("initialization vector must be exactly 16 bytes, got {0}")]
    InvalidIvSize(usize),
}

/// Result alias for cipher operations.
pub type Result<T> = core::result::Result<T, Error>;
