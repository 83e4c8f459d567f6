//! Portable mixing loop.

use super::utils::aesenc;
use crate::context::HashState;
use crate::kernels::block::Block;
use crate::kernels::constants::BLOCK_SIZE;
use crate::kernels::{cell_offset, umul128, MixSeed};

/// Registers of one mixing lane.
struct Lane {
    al: u64,
    ah: u64,
    b: Block,
    idx: u64,
}

impl Lane {
    fn new(state: &HashState) -> Self {
        let seed = MixSeed::from_state(state);
        Self {
            al: seed.al,
            ah: seed.ah,
            b: Block::from_u64s(seed.bl, seed.bh),
            idx: seed.al,
        }
    }

    /// AES half-step: encrypt the addressed cell with `a`, store `b ^ c`.
    #[inline]
    fn aes_step(&mut self, pad: &mut [Block], mask: usize) {
        let slot = &mut pad[cell_offset(self.idx, mask) / BLOCK_SIZE];
        let c = aesenc(*slot, Block::from_u64s(self.al, self.ah));
        *slot = self.b.xor(&c);
        self.idx = c.lo();
        self.b = c;
    }

    /// Multiply half-step: 64x64 product of the new address and the cell's
    /// low word is added into `a`, written back, then `a` absorbs the cell.
    #[inline]
    fn mul_step(&mut self, pad: &mut [Block], mask: usize) {
        let slot = &mut pad[cell_offset(self.idx, mask) / BLOCK_SIZE];
        let (cl, ch) = (slot.lo(), slot.hi());
        let (hi, lo) = umul128(self.idx, cl);

        self.al = self.al.wrapping_add(hi);
        self.ah = self.ah.wrapping_add(lo);
        *slot = Block::from_u64s(self.al, self.ah);

        self.ah ^= ch;
        self.al ^= cl;
        self.idx = self.al;
    }
}

#[inline]
const fn pad_mask(pad: &[Block]) -> usize {
    pad.len() * BLOCK_SIZE - BLOCK_SIZE
}

/// Run `iterations` mixing steps over an exploded scratchpad.
///
/// An empty `pad` is left untouched.
pub fn mix(state: &HashState, pad: &mut [Block], iterations: usize) {
    if pad.is_empty() {
        return;
    }
    let mask = pad_mask(pad);
    let mut lane = Lane::new(state);
    for _ in 0..iterations {
        lane.aes_step(pad, mask);
        lane.mul_step(pad, mask);
    }
}

/// Two independent mixing loops with their steps interleaved.
///
/// Both pads are left untouched if either is empty.
pub fn mix_double(
    state0: &HashState,
    pad0: &mut [Block],
    state1: &HashState,
    pad1: &mut [Block],
    iterations: usize,
) {
    if pad0.is_empty() || pad1.is_empty() {
        return;
    }
    let (mask0, mask1) = (pad_mask(pad0), pad_mask(pad1));
    let mut lane0 = Lane::new(state0);
    let mut lane1 = Lane::new(state1);
    for _ in 0..iterations {
        lane0.aes_step(pad0, mask0);
        lane1.aes_step(pad1, mask1);
        lane0.mul_step(pad0, mask0);
        lane1.mul_step(pad1, mask1);
    }
}
