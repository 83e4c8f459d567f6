//! AES-NI mixing loop.
//!
//! Cells are addressed through raw pointers into the block slice; every
//! offset is masked to `len * 16 - 16` so all accesses stay in bounds and
//! 16-byte aligned.

use super::load;
use crate::context::HashState;
use crate::kernels::block::Block;
use crate::kernels::constants::BLOCK_SIZE;
use crate::kernels::{cell_offset, umul128, MixSeed};
use core::arch::x86_64::{
    __m128i, _mm_aesenc_si128, _mm_cvtsi128_si64, _mm_load_si128, _mm_prefetch, _mm_set_epi64x,
    _mm_store_si128, _mm_xor_si128, _MM_HINT_T0,
};

/// Registers of one mixing lane plus its scratchpad base.
struct Lane {
    al: u64,
    ah: u64,
    bx: __m128i,
    idx: u64,
    base: *mut u8,
    mask: usize,
}

impl Lane {
    #[inline]
    #[target_feature(enable = "sse2")]
    #[allow(unsafe_code)]
    unsafe fn new(state: &HashState, pad: &mut [Block]) -> Self {
        let seed = MixSeed::from_state(state);
        Self {
            al: seed.al,
            ah: seed.ah,
            bx: load(&Block::from_u64s(seed.bl, seed.bh)),
            idx: seed.al,
            base: pad.as_mut_ptr().cast(),
            mask: pad.len() * BLOCK_SIZE - BLOCK_SIZE,
        }
    }

    #[inline]
    #[allow(unsafe_code)]
    unsafe fn cell(&self) -> *mut u8 {
        // SAFETY: offset <= len * 16 - 16 by the mask.
        self.base.add(cell_offset(self.idx, self.mask))
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    #[allow(unsafe_code)]
    unsafe fn prefetch(&self) {
        _mm_prefetch::<_MM_HINT_T0>(self.cell().cast_const().cast());
    }

    #[inline]
    #[target_feature(enable = "aes")]
    #[target_feature(enable = "sse2")]
    #[allow(unsafe_code)]
    unsafe fn aes_step(&mut self, prefetch: bool) {
        let slot = self.cell().cast::<__m128i>();
        let cx = _mm_aesenc_si128(
            _mm_load_si128(slot),
            _mm_set_epi64x(self.ah as i64, self.al as i64),
        );
        _mm_store_si128(slot, _mm_xor_si128(self.bx, cx));
        self.idx = _mm_cvtsi128_si64(cx) as u64;
        self.bx = cx;
        if prefetch {
            self.prefetch();
        }
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    #[allow(unsafe_code)]
    unsafe fn mul_step(&mut self, prefetch: bool) {
        let slot = self.cell().cast::<u64>();
        let cl = slot.read();
        let ch = slot.add(1).read();
        let (hi, lo) = umul128(self.idx, cl);

        self.al = self.al.wrapping_add(hi);
        self.ah = self.ah.wrapping_add(lo);
        slot.write(self.al);
        slot.add(1).write(self.ah);

        self.ah ^= ch;
        self.al ^= cl;
        self.idx = self.al;
        if prefetch {
            self.prefetch();
        }
    }
}

/// Run `iterations` mixing steps over an exploded scratchpad.
///
/// # Safety
/// Requires AES-NI. Offsets are masked to `pad.len() * 16 - 16`; an empty
/// `pad` returns before the mask is formed.
// SAFETY: Requires AES/SSE2 (enforced by dispatcher).
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn mix(state: &HashState, pad: &mut [Block], iterations: usize, prefetch: bool) {
    if pad.is_empty() {
        return;
    }
    let mut lane = Lane::new(state, pad);
    for _ in 0..iterations {
        lane.aes_step(prefetch);
        lane.mul_step(prefetch);
    }
}

/// Two independent mixing loops with their steps interleaved.
///
/// Both pads are left untouched if either is empty.
///
/// # Safety
/// As [`mix`].
// SAFETY: As `mix`; `pad0` and `pad1` are distinct borrows.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn mix_double(
    state0: &HashState,
    pad0: &mut [Block],
    state1: &HashState,
    pad1: &mut [Block],
    iterations: usize,
    prefetch: bool,
) {
    if pad0.is_empty() || pad1.is_empty() {
        return;
    }
    let mut lane0 = Lane::new(state0, pad0);
    let mut lane1 = Lane::new(state1, pad1);
    for _ in 0..iterations {
        lane0.aes_step(prefetch);
        lane1.aes_step(prefetch);
        lane0.mul_step(prefetch);
        lane1.mul_step(prefetch);
    }
}
