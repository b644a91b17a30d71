//! AES round transformations.

use crate::block::Block;
use crate::sbox::{inv_sbox, sbox};
use crate::state::State;

/// MixColumns coefficient matrix (FIPS-197 section 5.1.3).
const MIX_MATRIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Inverse MixColumns coefficient matrix (FIPS-197 section 5.3.3).
const INV_MIX_MATRIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for row in 0..4 {
        for col in 0..4 {
            state.set(row, col, sbox(state.get(row, col)));
        }
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for row in 0..4 {
        for col in 0..4 {
            state.set(row, col, inv_sbox(state.get(row, col)));
        }
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut State) {
    for row in 1..4 {
        let mut bytes = state.row(row);
        bytes.rotate_left(row);
        state.set_row(row, bytes);
    }
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for row in 1..4 {
        let mut bytes = state.row(row);
        bytes.rotate_right(row);
        state.set_row(row, bytes);
    }
}

/// Multiplies two field elements in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let hi_bit_set = a & 0x80;
        a <<= 1;
        if hi_bit_set != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
    }
    product
}

fn mix_columns_with(state: &mut State, matrix: &[[u8; 4]; 4]) {
    for col in 0..4 {
        let column = state.column(col);
        let mut mixed = [0u8; 4];
        for (row, out) in mixed.iter_mut().enumerate() {
            *out = gmul(matrix[row][0], column[0])
                ^ gmul(matrix[row][1], column[1])
                ^ gmul(matrix[row][2], column[2])
                ^ gmul(matrix[row][3], column[3]);
        }
        state.set_column(col, mixed);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    mix_columns_with(state, &MIX_MATRIX);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    mix_columns_with(state, &INV_MIX_MATRIX);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &Block) {
    state.xor_block(round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random_state(rng: &mut ChaCha20Rng) -> State {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        State::from_block(&block)
    }

    #[test]
    fn shift_rows_moves_expected_positions() {
        let block: Block = [
            0x00, 0x01, 0x02, 0x03, 0x10, 0x11, 0x12, 0x13, 0x20, 0x21, 0x22, 0x23, 0x30, 0x31,
            0x32, 0x33,
        ];
        let mut state = State::from_block(&block);
        shift_rows(&mut state);

        assert_eq!(state.row(0), [0x00, 0x10, 0x20, 0x30]);
        assert_eq!(state.row(1), [0x11, 0x21, 0x31, 0x01]);
        assert_eq!(state.row(2), [0x22, 0x32, 0x02, 0x12]);
        assert_eq!(state.row(3), [0x33, 0x03, 0x13, 0x23]);
    }

    #[test]
    fn inv_shift_rows_undoes_shift_rows() {
        let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
        for _ in 0..32 {
            let original = random_state(&mut rng);
            let mut state = original;
            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn mix_columns_matches_known_column() {
        // Worked example from FIPS-197 section 5.1.3.
        let mut state = State::from_block(&[0u8; 16]);
        state.set_column(0, [0xd4, 0xbf, 0x5d, 0x30]);
        mix_columns(&mut state);
        assert_eq!(state.column(0), [0x04, 0x66, 0x81, 0xe5]);
    }

    #[test]
    fn inv_mix_columns_undoes_mix_columns() {
        let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
        for _ in 0..32 {
            let original = random_state(&mut rng);
            let mut state = original;
            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn inv_sub_bytes_undoes_sub_bytes() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        let original = random_state(&mut rng);
        let mut state = original;
        sub_bytes(&mut state);
        inv_sub_bytes(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn add_round_key_is_self_inverse() {
        let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
        let original = random_state(&mut rng);
        let mut round_key = [0u8; 16];
        rng.fill_bytes(&mut round_key);

        let mut state = original;
        add_round_key(&mut state, &round_key);
        assert_ne!(state, original);
        add_round_key(&mut state, &round_key);
        assert_eq!(state, original);
    }

    #[test]
    fn gmul_known_products() {
        assert_eq!(gmul(0x57, 0x83), 0xc1);
        assert_eq!(gmul(0x57, 0x13), 0xfe);
        assert_eq!(gmul(0x02, 0x80), 0x1b);
        assert_eq!(gmul(0x01, 0xab), 0xab);
    }
}
