//! Key sizes and expanded round keys.

use crate::block::Block;
use crate::error::{Error, Result};

/// Round keys in the largest (AES-256) schedule.
const MAX_ROUND_KEYS: usize = 15;

/// The three key lengths AES supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Classifies a raw key by its byte length.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(Error::InvalidKeyLength(other)),
        }
    }

    /// Key length in bytes.
    #[inline]
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /// Key length in 32-bit words (`Nk` in FIPS-197).
    #[inline]
    pub const fn nk(self) -> usize {
        self.key_len() / 4
    }

    /// Number of cipher rounds (`Nr` in FIPS-197).
    #[inline]
    pub const fn rounds(self) -> usize {
        self.nk() + 6
    }
}

/// Expanded round keys for one cipher key.
///
/// Storage is sized for the largest schedule; only the first
/// `rounds() + 1` entries are meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys {
    keys: [Block; MAX_ROUND_KEYS],
    rounds: usize,
}

impl RoundKeys {
    pub(crate) fn new(keys: [Block; MAX_ROUND_KEYS], rounds: usize) -> Self {
        Self { keys, rounds }
    }

    /// Returns the round key at the requested index (0..=rounds).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        assert!(round <= self.rounds, "round key {} out of range", round);
        &self.keys[round]
    }

    /// Number of cipher rounds this schedule drives.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_supported_lengths() {
        assert_eq!(KeySize::from_len(16).unwrap(), KeySize::Aes128);
        assert_eq!(KeySize::from_len(24).unwrap(), KeySize::Aes192);
        assert_eq!(KeySize::from_len(32).unwrap(), KeySize::Aes256);
    }

    #[test]
    fn rejects_other_lengths() {
        for len in [0, 1, 15, 17, 20, 33, 64] {
            assert_eq!(KeySize::from_len(len).unwrap_err(), Error::InvalidKeyLength(len));
        }
    }

    #[test]
    fn round_counts_follow_key_size() {
        assert_eq!(KeySize::Aes128.rounds(), 10);
        assert_eq!(KeySize::Aes192.rounds(), 12);
        assert_eq!(KeySize::Aes256.rounds(), 14);
        assert_eq!(KeySize::Aes128.nk(), 4);
        assert_eq!(KeySize::Aes192.nk(), 6);
        assert_eq!(KeySize::Aes256.nk(), 8);
    }
}
