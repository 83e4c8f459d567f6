//! 128-bit scratchpad block.
//!
//! Byte order matches an SSE register loaded from memory: bytes `0..8` are
//! the low 64-bit word, bytes `0..4` the first 32-bit column.

use crate::kernels::constants::{BLOCK_SIZE, ROUND_KEYS};
use static_assertions::const_assert_eq;

/// One 16-byte scratchpad cell, aligned for `_mm_load_si128`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct Block {
    /// Raw bytes in memory order.
    pub b: [u8; BLOCK_SIZE],
}

const_assert_eq!(core::mem::size_of::<Block>(), BLOCK_SIZE);
const_assert_eq!(core::mem::align_of::<Block>(), BLOCK_SIZE);

/// Expanded AES key: ten round keys.
pub type RoundKeys = [Block; ROUND_KEYS];

impl Block {
    /// All-zero block.
    #[must_use]
    pub const fn zero() -> Self {
        Self { b: [0; BLOCK_SIZE] }
    }

    /// Block from its raw bytes.
    #[must_use]
    pub const fn from_bytes(b: [u8; BLOCK_SIZE]) -> Self {
        Self { b }
    }

    /// Block from two little-endian words.
    #[must_use]
    pub fn from_u64s(lo: u64, hi: u64) -> Self {
        let mut b = [0u8; BLOCK_SIZE];
        b[0..8].copy_from_slice(&lo.to_le_bytes());
        b[8..16].copy_from_slice(&hi.to_le_bytes());
        Self { b }
    }

    /// Low 64-bit word.
    #[must_use]
    pub fn lo(&self) -> u64 {
        let mut w = [0u8; 8];
        w.copy_from_slice(&self.b[0..8]);
        u64::from_le_bytes(w)
    }

    /// High 64-bit word.
    #[must_use]
    pub fn hi(&self) -> u64 {
        let mut w = [0u8; 8];
        w.copy_from_slice(&self.b[8..16]);
        u64::from_le_bytes(w)
    }

    /// Four little-endian 32-bit columns.
    #[must_use]
    pub fn to_u32s(&self) -> [u32; 4] {
        let mut out = [0u32; 4];
        for (col, chunk) in out.iter_mut().zip(self.b.chunks_exact(4)) {
            *col = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        out
    }

    /// Block from four little-endian 32-bit columns.
    #[must_use]
    pub fn from_u32s(cols: [u32; 4]) -> Self {
        let mut b = [0u8; BLOCK_SIZE];
        for (chunk, col) in b.chunks_exact_mut(4).zip(cols) {
            chunk.copy_from_slice(&col.to_le_bytes());
        }
        Self { b }
    }

    /// Bitwise XOR.
    #[must_use]
    pub fn xor(&self, other: &Self) -> Self {
        let mut res = *self;
        for (r, o) in res.b.iter_mut().zip(other.b) {
            *r ^= o;
        }
        res
    }

    /// Copy of column `lane` into all four columns (`_mm_shuffle_epi32` broadcast).
    #[must_use]
    pub fn broadcast_u32(&self, lane: usize) -> Self {
        let w = self.to_u32s()[lane];
        Self::from_u32s([w; 4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_views_agree() {
        let blk = Block::from_u64s(0x0706_0504_0302_0100, 0x0F0E_0D0C_0B0A_0908);
        assert_eq!(blk.b, core::array::from_fn(|i| i as u8));
        assert_eq!(
            blk.to_u32s(),
            [0x0302_0100, 0x0706_0504, 0x0B0A_0908, 0x0F0E_0D0C]
        );
        assert_eq!(Block::from_u32s(blk.to_u32s()), blk);
        assert_eq!(blk.broadcast_u32(3).to_u32s(), [0x0F0E_0D0C; 4]);
        assert_eq!(blk.xor(&blk), Block::zero());
    }
}
