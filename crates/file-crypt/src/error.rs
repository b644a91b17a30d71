//! Error kinds for the file encryption layer.

use thiserror::Error;

/// Failures surfaced while sealing or opening buffers and files.
#[derive(Debug, Error)]
pub enum Error {
    /// The cipher core rejected the key, data or IV.
    #[error("cipher error: {0}")]
    Cipher(#[from] aes_core::Error),

    /// Decrypted data did not end in well-formed padding.
    #[error("input is corrupted: invalid padding")]
    CorruptPadding,

    /// CBC input too short to carry the leading initialization vector.
    #[error("ciphertext of {0} bytes is too short to carry an initialization vector")]
    TruncatedCiphertext(usize),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for file encryption operations.
pub type Result<T> = std::result::Result<T, Error>;
