//! Whole-buffer and whole-file encryption with IV framing.

use std::fmt;
use std::fs;
use std::path::Path;

use aes_core::{Block, BLOCK_SIZE};
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::error::{Error, Result};
use crate::padding;

/// Block chaining mode selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Electronic codebook: every block encrypted independently.
    Ecb,
    /// Cipher block chaining with a random IV prepended to the output.
    Cbc,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Ecb => f.write_str("ecb"),
            Mode::Cbc => f.write_str("cbc"),
        }
    }
}

/// Draws a fresh CBC initialization vector from `rng`.
pub fn generate_iv<R: RngCore + CryptoRng>(rng: &mut R) -> Block {
    let mut iv = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut iv);
    iv
}

/// Pads and encrypts a buffer.
///
/// CBC output carries its IV in the leading block: `[IV][ciphertext]`.
/// ECB output is the bare ciphertext and `rng` goes unused.
pub fn encrypt_buffer<R>(data: &[u8], key: &[u8], mode: Mode, rng: &mut R) -> Result<Vec<u8>>
where
    R: RngCore + CryptoRng,
{
    let mut plain = data.to_vec();
    padding::pad(&mut plain);
    debug!("padded {} plaintext bytes to {}", data.len(), plain.len());

    match mode {
        Mode::Ecb => Ok(aes_core::encrypt_ecb(key, &plain)?),
        Mode::Cbc => {
            let iv = generate_iv(rng);
            let mut out = Vec::with_capacity(BLOCK_SIZE + plain.len());
            out.extend_from_slice(&iv);
            out.extend_from_slice(&aes_core::encrypt_cbc(key, &plain, &iv)?);
            Ok(out)
        }
    }
}

/// Decrypts a buffer produced by [`encrypt_buffer`] and strips the padding.
///
/// CBC input must start with the 16-byte IV written at encryption time.
pub fn decrypt_buffer(data: &[u8], key: &[u8], mode: Mode) -> Result<Vec<u8>> {
    let mut plain = match mode {
        Mode::Ecb => aes_core::decrypt_ecb(key, data)?,
        Mode::Cbc => {
            if data.len() < BLOCK_SIZE {
                return Err(Error::TruncatedCiphertext(data.len()));
            }
            let (iv, body) = data.split_at(BLOCK_SIZE);
            aes_core::decrypt_cbc(key, body, iv)?
        }
    };
    padding::unpad(&mut plain)?;
    Ok(plain)
}

/// Encrypts the file at `src` and writes the result to `dst`.
///
/// The whole file is buffered in memory, so this suits documents rather
/// than multi-gigabyte archives.
pub fn encrypt_file<R>(src: &Path, dst: &Path, key: &[u8], mode: Mode, rng: &mut R) -> Result<()>
where
    R: RngCore + CryptoRng,
{
    let data = fs::read(src)?;
    debug!("read {} bytes from {}", data.len(), src.display());
    let out = encrypt_buffer(&data, key, mode, rng)?;
    fs::write(dst, &out)?;
    debug!("wrote {} bytes to {}", out.len(), dst.display());
    Ok(())
}

/// Decrypts the file at `src` and writes the plaintext to `dst`.
pub fn decrypt_file(src: &Path, dst: &Path, key: &[u8], mode: Mode) -> Result<()> {
    let data = fs::read(src)?;
    debug!("read {} bytes from {}", data.len(), src.display());
    let out = decrypt_buffer(&data, key, mode)?;
    fs::write(dst, &out)?;
    debug!("wrote {} bytes to {}", out.len(), dst.display());
    Ok(())
}
