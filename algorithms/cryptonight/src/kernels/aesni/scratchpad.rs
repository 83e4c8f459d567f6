//! AES-NI key schedule and scratchpad expansion/contraction.

use super::{load, store};
use crate::context::HashState;
use crate::kernels::block::Block;
use crate::kernels::constants::{
    EXPLODE_KEY_BLOCK, IMPLODE_KEY_BLOCK, ROUND_KEYS, TEXT_BLOCK, WINDOW_BLOCKS,
};
use core::arch::x86_64::{
    __m128i, _mm_aesenc_si128, _mm_aeskeygenassist_si128, _mm_prefetch, _mm_setzero_si128,
    _mm_shuffle_epi32, _mm_slli_si128, _mm_xor_si128, _MM_HINT_T0,
};

// =============================================================================
// KEY SCHEDULE
// =============================================================================

/// Running XOR across the four columns.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn sl_xor(x: __m128i) -> __m128i {
    let mut x = x;
    let mut t = _mm_slli_si128::<4>(x);
    x = _mm_xor_si128(x, t);
    t = _mm_slli_si128::<4>(t);
    x = _mm_xor_si128(x, t);
    t = _mm_slli_si128::<4>(t);
    _mm_xor_si128(x, t)
}

/// One schedule step: two new round keys from the previous pair.
#[inline]
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn genkey_sub<const RCON: i32>(x0: &mut __m128i, x2: &mut __m128i) {
    let t = _mm_shuffle_epi32::<0xFF>(_mm_aeskeygenassist_si128::<RCON>(*x2));
    *x0 = _mm_xor_si128(sl_xor(*x0), t);
    let t = _mm_shuffle_epi32::<0xAA>(_mm_aeskeygenassist_si128::<0x00>(*x0));
    *x2 = _mm_xor_si128(sl_xor(*x2), t);
}

/// Expand a 256-bit key (two registers) into ten round keys.
///
/// # Safety
/// Requires AES-NI.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn expand_key(k0: __m128i, k1: __m128i) -> [__m128i; ROUND_KEYS] {
    let (mut x0, mut x2) = (k0, k1);
    let mut keys = [_mm_setzero_si128(); ROUND_KEYS];
    keys[0] = x0;
    keys[1] = x2;

    // Immediate operands must be constants; the four steps are unrolled.
    genkey_sub::<0x01>(&mut x0, &mut x2);
    keys[2] = x0;
    keys[3] = x2;
    genkey_sub::<0x02>(&mut x0, &mut x2);
    keys[4] = x0;
    keys[5] = x2;
    genkey_sub::<0x04>(&mut x0, &mut x2);
    keys[6] = x0;
    keys[7] = x2;
    genkey_sub::<0x08>(&mut x0, &mut x2);
    keys[8] = x0;
    keys[9] = x2;
    keys
}

/// Round keys from two consecutive state blocks.
#[inline]
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn state_keys(state: &HashState, first: usize) -> [__m128i; ROUND_KEYS] {
    expand_key(load(&state.block(first)), load(&state.block(first + 1)))
}

/// Ten rounds on all eight lanes, key-major for ILP.
#[inline]
#[target_feature(enable = "aes")]
#[allow(unsafe_code)]
unsafe fn encrypt_window(x: &mut [__m128i; WINDOW_BLOCKS], keys: &[__m128i; ROUND_KEYS]) {
    for key in keys {
        for lane in x.iter_mut() {
            *lane = _mm_aesenc_si128(*lane, *key);
        }
    }
}

#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn prefetch_window(window: &[Block]) {
    // Prefetch never faults; one past the final window is harmless.
    let next = window.as_ptr().wrapping_add(WINDOW_BLOCKS);
    _mm_prefetch::<_MM_HINT_T0>(next.cast());
    _mm_prefetch::<_MM_HINT_T0>(next.wrapping_add(4).cast());
}

// =============================================================================
// SCRATCHPAD EXPANSION
// =============================================================================

/// Fill the scratchpad from the text window of the state.
///
/// # Safety
/// Requires AES-NI.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn explode(state: &HashState, pad: &mut [Block], prefetch: bool) {
    let keys = state_keys(state, EXPLODE_KEY_BLOCK);
    let mut x = [_mm_setzero_si128(); WINDOW_BLOCKS];
    for (j, lane) in x.iter_mut().enumerate() {
        *lane = load(&state.block(TEXT_BLOCK + j));
    }

    for window in pad.chunks_exact_mut(WINDOW_BLOCKS) {
        if prefetch {
            prefetch_window(window);
        }
        encrypt_window(&mut x, &keys);
        for (cell, lane) in window.iter_mut().zip(x) {
            store(cell, lane);
        }
    }
}

/// Fold the scratchpad back into the text window of the state.
///
/// # Safety
/// Requires AES-NI.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn implode(pad: &[Block], state: &mut HashState, prefetch: bool) {
    let keys = state_keys(state, IMPLODE_KEY_BLOCK);
    let mut x = [_mm_setzero_si128(); WINDOW_BLOCKS];
    for (j, lane) in x.iter_mut().enumerate() {
        *lane = load(&state.block(TEXT_BLOCK + j));
    }

    for window in pad.chunks_exact(WINDOW_BLOCKS) {
        if prefetch {
            prefetch_window(window);
        }
        for (lane, cell) in x.iter_mut().zip(window) {
            *lane = _mm_xor_si128(*lane, load(cell));
        }
        encrypt_window(&mut x, &keys);
    }

    for (j, lane) in x.into_iter().enumerate() {
        let mut blk = Block::zero();
        store(&mut blk, lane);
        state.set_block(TEXT_BLOCK + j, blk);
    }
}
