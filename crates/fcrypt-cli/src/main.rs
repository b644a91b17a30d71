//! Command-line interface for `fcrypt`.

#![forbid(unsafe_code)]

mod logger;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use file_crypt::Mode;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::info;
use tracing::metadata::LevelFilter;

/// AES file encryption CLI.
#[derive(Parser)]
#[command(
    name = "fcrypt",
    version,
    author,
    about = "AES file encryption (ECB/CBC, 128/192/256-bit keys)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file.
    Encrypt {
        /// Cipher key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Block chaining mode.
        #[arg(long, value_enum, default_value_t = ModeArg::Cbc)]
        mode: ModeArg,
        /// Source file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Destination file.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Optional RNG seed for reproducible IV generation.
        #[arg(long)]
        iv_seed: Option<u64>,
    },
    /// Decrypt a file.
    Decrypt {
        /// Cipher key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Block chaining mode the file was encrypted with.
        #[arg(long, value_enum, default_value_t = ModeArg::Cbc)]
        mode: ModeArg,
        /// Source file (ciphertext).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Destination file (plaintext).
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
}

/// Chaining mode on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Electronic codebook.
    Ecb,
    /// Cipher block chaining.
    Cbc,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Ecb => Mode::Ecb,
            ModeArg::Cbc => Mode::Cbc,
        }
    }
}

fn main() -> Result<()> {
    logger::init(LevelFilter::INFO);
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt {
            key_hex,
            mode,
            input,
            output,
            iv_seed,
        } => cmd_encrypt(&key_hex, mode.into(), &input, &output, iv_seed),
        Commands::Decrypt {
            key_hex,
            mode,
            input,
            output,
        } => cmd_decrypt(&key_hex, mode.into(), &input, &output),
    }
}

fn cmd_encrypt(
    key_hex: &str,
    mode: Mode,
    input: &Path,
    output: &Path,
    iv_seed: Option<u64>,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let mut rng = seeded_rng(iv_seed);
    file_crypt::encrypt_file(input, output, &key, mode, &mut rng)
        .with_context(|| format!("encrypt {}", input.display()))?;
    info!(
        "encrypted {} -> {} ({} mode, {}-bit key)",
        input.display(),
        output.display(),
        mode,
        key.len() * 8
    );
    Ok(())
}

fn cmd_decrypt(key_hex: &str, mode: Mode, input: &Path, output: &Path) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    file_crypt::decrypt_file(input, output, &key, mode)
        .with_context(|| format!("decrypt {}", input.display()))?;
    info!(
        "decrypted {} -> {} ({} mode)",
        input.display(),
        output.display(),
        mode
    );
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Vec<u8>> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if !matches!(bytes.len(), 16 | 24 | 32) {
        bail!(
            "key must be 16, 24 or 32 bytes (32, 48 or 64 hex characters), got {}",
            bytes.len()
        );
    }
    Ok(bytes)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
