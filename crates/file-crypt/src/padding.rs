//! PKCS-style byte padding for block alignment.

use aes_core::BLOCK_SIZE;

use crate::error::{Error, Result};

/// Pads the buffer up to the next block boundary.
///
/// Between 1 and 16 bytes are appended, each holding the number of bytes
/// added. Already-aligned input gains a full block so the count is always
/// recoverable.
pub fn pad(data: &mut Vec<u8>) {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    data.resize(data.len() + pad_len, pad_len as u8);
}

/// Validates and strips the padding appended by [`pad`].
pub fn unpad(data: &mut Vec<u8>) -> Result<()> {
    let pad_len = match data.last() {
        Some(&byte) => byte as usize,
        None => return Err(Error::CorruptPadding),
    };
    if pad_len == 0 || pad_len > data.len() {
        return Err(Error::CorruptPadding);
    }

    let tail_start = data.len() - pad_len;
    if data[tail_start..].iter().any(|&byte| byte as usize != pad_len) {
        return Err(Error::CorruptPadding);
    }

    data.truncate(tail_start);
    Ok(())
}
