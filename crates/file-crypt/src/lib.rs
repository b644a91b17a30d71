//! File-level AES encryption: padding, IV framing, and whole-file operations.
//!
//! This crate turns the block-aligned primitives of `aes-core` into an
//! arbitrary-length interface. Plaintext is padded PKCS-style before
//! encryption; CBC ciphertext carries its initialization vector in the
//! first 16 bytes of the output so decryption needs only the key.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod file;
pub mod padding;

pub use crate::error::{Error, Result};
pub use crate::file::{
    decrypt_buffer, decrypt_file, encrypt_buffer, encrypt_file, generate_iv, Mode,
};
