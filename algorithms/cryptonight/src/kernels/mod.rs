//! Kernels
//!
//! Hardware-specific implementations of the CryptoNight memory-hard core
//! (explode, mix, implode). Both backends operate on the same `Block`
//! scratchpad and produce bit-identical results.

#![allow(clippy::cast_possible_truncation)]

#[cfg(target_arch = "x86_64")]
pub mod aesni;
pub mod block;
pub mod constants;
pub mod portable;

use crate::context::HashState;

// =============================================================================
// MIXING LOOP SEED
// =============================================================================

/// Initial registers of the mixing loop, taken from Keccak lanes 0..8.
///
/// `a = (w0 ^ w4, w1 ^ w5)`, `b = (w2 ^ w6, w3 ^ w7)` and the first address
/// is the low word of `a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MixSeed {
    /// Low word of `a`.
    pub al: u64,
    /// High word of `a`.
    pub ah: u64,
    /// Low word of `b`.
    pub bl: u64,
    /// High word of `b`.
    pub bh: u64,
}

impl MixSeed {
    /// Derive the loop registers from an exploded hash state.
    #[must_use]
    pub const fn from_state(state: &HashState) -> Self {
        let w = state.words();
        Self {
            al: w[0] ^ w[4],
            ah: w[1] ^ w[5],
            bl: w[2] ^ w[6],
            bh: w[3] ^ w[7],
        }
    }
}

/// Full 64x64 -> 128 multiply, returned as `(hi, lo)`.
#[inline]
#[must_use]
pub fn umul128(a: u64, b: u64) -> (u64, u64) {
    let p = u128::from(a) * u128::from(b);
    ((p >> 64) as u64, p as u64)
}

/// Byte offset of the 16-byte cell addressed by `addr`.
#[inline]
#[must_use]
pub const fn cell_offset(addr: u64, mask: usize) -> usize {
    (addr as usize) & mask
}
