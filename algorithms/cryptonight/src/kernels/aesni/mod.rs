//! AES-NI Kernel Module
//!
//! Hardware AES for the CryptoNight core. Explode and implode keep all eight
//! text blocks in registers (8-way ILP per round key); the mixing loop
//! issues one `AESENC` per step with optional prefetch of the next cell.

#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]

// =============================================================================
// MODULES
// =============================================================================

mod mix;
mod scratchpad;

use crate::config::Params;
use crate::context::Context;
use crate::kernels::block::Block;
use core::arch::x86_64::{__m128i, _mm_load_si128, _mm_store_si128};

// =============================================================================
// EXPORTS
// =============================================================================

pub use mix::{mix, mix_double};
pub use scratchpad::{explode, expand_key, implode};

// =============================================================================
// REGISTER HELPERS
// =============================================================================

/// Load an aligned block into a register.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub(crate) unsafe fn load(blk: &Block) -> __m128i {
    // Block is repr(align(16)).
    _mm_load_si128(core::ptr::from_ref(blk).cast())
}

/// Store a register into an aligned block.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub(crate) unsafe fn store(blk: &mut Block, v: __m128i) {
    _mm_store_si128(core::ptr::from_mut(blk).cast(), v);
}

// =============================================================================
// CORE
// =============================================================================

/// Explode, mix and implode one context.
///
/// # Safety
/// Requires AES-NI.
// SAFETY: Requires AES/SSE2 (enforced by dispatcher). Every scratchpad
// access is masked to `len - 16` of the context's own block slice.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn run(ctx: &mut Context, params: &Params, prefetch: bool) {
    let (state, pad) = ctx.parts_mut();
    let pad = pad.blocks_mut();
    explode(state, pad, prefetch);
    mix(state, pad, params.iterations(), prefetch);
    implode(pad, state, prefetch);
}

/// Two contexts with the mixing loops interleaved step by step.
///
/// # Safety
/// Requires AES-NI.
// SAFETY: As `run`; the two scratchpads are disjoint allocations.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn run_double(ctx0: &mut Context, ctx1: &mut Context, params: &Params, prefetch: bool) {
    let (state0, pad0) = ctx0.parts_mut();
    let (state1, pad1) = ctx1.parts_mut();
    let (pad0, pad1) = (pad0.blocks_mut(), pad1.blocks_mut());

    explode(state0, pad0, prefetch);
    explode(state1, pad1, prefetch);
    mix_double(state0, pad0, state1, pad1, params.iterations(), prefetch);
    implode(pad0, state0, prefetch);
    implode(pad1, state1, prefetch);
}
