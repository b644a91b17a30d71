//! Key schedule and single-block encryption/decryption.

use crate::block::Block;
use crate::error::{Error, Result};
use crate::key::{KeySize, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;
use crate::state::State;

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Words in the largest (AES-256) expanded schedule.
const MAX_SCHEDULE_WORDS: usize = 60;

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expands a 16, 24 or 32-byte key into the full round-key schedule.
pub fn expand_key(key: &[u8]) -> Result<RoundKeys> {
    let size = KeySize::from_len(key.len())?;
    let nk = size.nk();
    let rounds = size.rounds();
    let total_words = 4 * (rounds + 1);

    let mut w = [0u32; MAX_SCHEDULE_WORDS];
    for (i, chunk) in key.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in nk..total_words {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[(i / nk) - 1]) << 24);
        } else if nk > 6 && i % nk == 4 {
            // The 256-bit schedule substitutes mid-stride as well.
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    let mut keys = [[0u8; 16]; 15];
    for (round, round_key) in keys.iter_mut().take(rounds + 1).enumerate() {
        for word_idx in 0..4 {
            let bytes = w[round * 4 + word_idx].to_be_bytes();
            round_key[word_idx * 4..word_idx * 4 + 4].copy_from_slice(&bytes);
        }
    }

    Ok(RoundKeys::new(keys, rounds))
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &[u8], round_keys: &RoundKeys) -> Result<Block> {
    let block: Block = block
        .try_into()
        .map_err(|_| Error::InvalidBlockSize(block.len()))?;
    Ok(encrypt_fixed(&block, round_keys))
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &[u8], round_keys: &RoundKeys) -> Result<Block> {
    let block: Block = block
        .try_into()
        .map_err(|_| Error::InvalidBlockSize(block.len()))?;
    Ok(decrypt_fixed(&block, round_keys))
}

pub(crate) fn encrypt_fixed(block: &Block, round_keys: &RoundKeys) -> Block {
    let rounds = round_keys.rounds();
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(rounds));

    state.to_block()
}

pub(crate) fn decrypt_fixed(block: &Block, round_keys: &RoundKeys) -> Block {
    let rounds = round_keys.rounds();
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys.get(rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state.to_block()
}
