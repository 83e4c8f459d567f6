//! Portable implementation of the CryptoNight core.
//!
//! Table-driven AES with no platform requirements. Explode and implode run
//! the eight text blocks as two passes of four independent lanes; the result
//! is byte-identical to the AES-NI kernel.

use self::utils::{aesenc, aeskeygenassist, sl_xor};
use crate::config::Params;
use crate::context::{Context, HashState};
use crate::kernels::block::{Block, RoundKeys};
use crate::kernels::constants::{
    EXPLODE_KEY_BLOCK, IMPLODE_KEY_BLOCK, KEY_SCHEDULE_RCON, ROUND_KEYS, TEXT_BLOCK,
    WINDOW_BLOCKS,
};

mod mix;
pub mod utils;

pub use mix::{mix, mix_double};

/// Lanes per pass (half a window).
const LANES: usize = 4;

// =============================================================================
// KEY SCHEDULE
// =============================================================================

/// Expand a 256-bit key (two state blocks) into ten round keys.
///
/// Same words as the first ten AES-256 round keys.
#[must_use]
pub fn expand_key(k0: Block, k1: Block) -> RoundKeys {
    let mut keys = [Block::zero(); ROUND_KEYS];
    keys[0] = k0;
    keys[1] = k1;

    let (mut x0, mut x2) = (k0, k1);
    for (step, rcon) in KEY_SCHEDULE_RCON.into_iter().enumerate() {
        x0 = sl_xor(x0).xor(&aeskeygenassist(x2, rcon).broadcast_u32(3));
        x2 = sl_xor(x2).xor(&aeskeygenassist(x0, 0x00).broadcast_u32(2));
        keys[2 + step * 2] = x0;
        keys[3 + step * 2] = x2;
    }
    keys
}

/// Ten plain `aesenc` rounds on each lane.
#[inline]
fn encrypt_lanes(x: &mut [Block; LANES], keys: &RoundKeys) {
    for key in keys {
        for lane in x.iter_mut() {
            *lane = aesenc(*lane, *key);
        }
    }
}

// =============================================================================
// SCRATCHPAD EXPANSION
// =============================================================================

/// Fill the scratchpad from the text window of the state.
///
/// Window `i` holds the text after `i + 1` rounds of ten-round encryption.
pub fn explode(state: &HashState, pad: &mut [Block]) {
    let keys = expand_key(
        state.block(EXPLODE_KEY_BLOCK),
        state.block(EXPLODE_KEY_BLOCK + 1),
    );

    for half in 0..WINDOW_BLOCKS / LANES {
        let first = half * LANES;
        let mut x: [Block; LANES] = core::array::from_fn(|j| state.block(TEXT_BLOCK + first + j));
        for window in pad.chunks_exact_mut(WINDOW_BLOCKS) {
            encrypt_lanes(&mut x, &keys);
            window[first..first + LANES].copy_from_slice(&x);
        }
    }
}

/// Fold the scratchpad back into the text window of the state.
pub fn implode(pad: &[Block], state: &mut HashState) {
    let keys = expand_key(
        state.block(IMPLODE_KEY_BLOCK),
        state.block(IMPLODE_KEY_BLOCK + 1),
    );

    for half in 0..WINDOW_BLOCKS / LANES {
        let first = half * LANES;
        let mut x: [Block; LANES] = core::array::from_fn(|j| state.block(TEXT_BLOCK + first + j));
        for window in pad.chunks_exact(WINDOW_BLOCKS) {
            for (lane, cell) in x.iter_mut().zip(&window[first..first + LANES]) {
                *lane = lane.xor(cell);
            }
            encrypt_lanes(&mut x, &keys);
        }
        for (j, lane) in x.into_iter().enumerate() {
            state.set_block(TEXT_BLOCK + first + j, lane);
        }
    }
}

// =============================================================================
// CORE
// =============================================================================

/// Explode, mix and implode one context.
pub fn run(ctx: &mut Context, params: &Params, _prefetch: bool) {
    let (state, pad) = ctx.parts_mut();
    let pad = pad.blocks_mut();
    explode(state, pad);
    mix(state, pad, params.iterations());
    implode(pad, state);
}

/// Two contexts with the mixing loops interleaved step by step.
pub fn run_double(ctx0: &mut Context, ctx1: &mut Context, params: &Params, _prefetch: bool) {
    let (state0, pad0) = ctx0.parts_mut();
    let (state1, pad1) = ctx1.parts_mut();
    let (pad0, pad1) = (pad0.blocks_mut(), pad1.blocks_mut());

    explode(state0, pad0);
    explode(state1, pad1);
    mix_double(state0, pad0, state1, pad1, params.iterations());
    implode(pad0, state0);
    implode(pad1, state1);
}
