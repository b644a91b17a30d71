//! AES block cipher engine used by the file encryption layers above it.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedule for 128, 192 and 256-bit keys.
//! - Single-block encryption and decryption over a column-major 4x4 state.
//! - Bulk ECB and CBC chaining for block-aligned buffers.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod mode;
mod round;
mod sbox;
mod state;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::error::{Error, Result};
pub use crate::key::{KeySize, RoundKeys};
pub use crate::mode::{decrypt_cbc, decrypt_ecb, encrypt_cbc, encrypt_ecb};
