//! Column-major 4x4 cipher state.

use crate::block::{xor_in_place, Block};

/// The 4x4 byte grid the round transforms operate on.
///
/// Bytes are stored column-major: block byte `i` lands at row `i % 4`,
/// column `i / 4`, so a flat index is always `row + 4 * column`. With that
/// layout a [`Block`] maps onto the grid without any shuffling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State(Block);

impl State {
    /// Loads a block into the grid.
    #[inline]
    pub fn from_block(block: &Block) -> Self {
        Self(*block)
    }

    /// Serializes the grid back into a block.
    #[inline]
    pub fn to_block(self) -> Block {
        self.0
    }

    /// Reads the byte at `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row + 4 * col]
    }

    /// Writes the byte at `row`, `col`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.0[row + 4 * col] = value;
    }

    /// Copies out row `row` across all four columns.
    #[inline]
    pub fn row(&self, row: usize) -> [u8; 4] {
        [
            self.0[row],
            self.0[row + 4],
            self.0[row + 8],
            self.0[row + 12],
        ]
    }

    /// Writes `bytes` into row `row` across all four columns.
    #[inline]
    pub fn set_row(&mut self, row: usize, bytes: [u8; 4]) {
        self.0[row] = bytes[0];
        self.0[row + 4] = bytes[1];
        self.0[row + 8] = bytes[2];
        self.0[row + 12] = bytes[3];
    }

    /// Copies out column `col`.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        let base = 4 * col;
        [
            self.0[base],
            self.0[base + 1],
            self.0[base + 2],
            self.0[base + 3],
        ]
    }

    /// Writes `bytes` into column `col`.
    #[inline]
    pub fn set_column(&mut self, col: usize, bytes: [u8; 4]) {
        self.0[4 * col..4 * col + 4].copy_from_slice(&bytes);
    }

    /// XORs a block into the grid byte for byte.
    #[inline]
    pub fn xor_block(&mut self, rhs: &Block) {
        xor_in_place(&mut self.0, rhs);
    }
}
