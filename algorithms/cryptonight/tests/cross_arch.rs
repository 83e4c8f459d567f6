//! Cross-Architecture Consistency Tests
//!
//! Verifies that the AES-NI and portable kernels produce IDENTICAL results
//! stage by stage (key schedule, explode, mix, implode) and end to end.
//! Skipped on machines without AES-NI.

#![cfg(target_arch = "x86_64")]
#![allow(unsafe_code)]
#![allow(clippy::unwrap_used, clippy::cast_possible_truncation)]

use cryptonight::kernels::block::Block;
use cryptonight::kernels::{aesni, portable};
use cryptonight::{hash_with, Backend, Config, Context, HashState, Params};
use std::arch::x86_64::{__m128i, _mm_loadu_si128, _mm_storeu_si128};

fn is_aesni_supported() -> bool {
    is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2")
}

fn sample_state(tag: u64) -> HashState {
    let mut state = HashState::new();
    for (i, w) in state.words_mut().iter_mut().enumerate() {
        *w = (i as u64 + 1)
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .rotate_left((tag % 64) as u32)
            ^ tag;
    }
    state
}

fn from_block(blk: &Block) -> __m128i {
    unsafe { _mm_loadu_si128(blk.b.as_ptr().cast()) }
}

fn to_block(v: __m128i) -> Block {
    let mut blk = Block::zero();
    unsafe { _mm_storeu_si128(blk.b.as_mut_ptr().cast(), v) };
    blk
}

// =============================================================================
// PRIMITIVES
// =============================================================================

#[test]
fn test_key_schedule_consistency() {
    if !is_aesni_supported() {
        println!("Skipping: AES-NI not supported.");
        return;
    }

    for tag in 0..32u64 {
        let k0 = Block::from_u64s(tag * 7, !tag);
        let k1 = Block::from_u64s(tag.rotate_left(17), tag ^ 0xA5A5);
        let soft = portable::expand_key(k0, k1);
        let hard = unsafe { aesni::expand_key(from_block(&k0), from_block(&k1)) }.map(to_block);
        assert_eq!(soft, hard, "Key schedule mismatch for tag {tag}");
    }
}

// =============================================================================
// SCRATCHPAD STAGES
// =============================================================================

#[test]
fn test_explode_implode_consistency() {
    if !is_aesni_supported() {
        println!("Skipping: AES-NI not supported.");
        return;
    }

    let blocks = (1 << 14) / 16;
    for tag in [0, 1, 0xDEAD_BEEF, u64::MAX] {
        let state = sample_state(tag);

        let mut soft = vec![Block::zero(); blocks];
        let mut hard = vec![Block::zero(); blocks];
        portable::explode(&state, &mut soft);
        unsafe { aesni::explode(&state, &mut hard, true) };
        assert_eq!(soft, hard, "Explode mismatch for tag {tag:#x}");

        let mut soft_state = state.clone();
        let mut hard_state = state.clone();
        portable::implode(&soft, &mut soft_state);
        unsafe { aesni::implode(&hard, &mut hard_state, false) };
        assert_eq!(soft_state, hard_state, "Implode mismatch for tag {tag:#x}");
    }
}

#[test]
fn test_mix_consistency() {
    if !is_aesni_supported() {
        println!("Skipping: AES-NI not supported.");
        return;
    }

    let state = sample_state(42);
    let mut soft = vec![Block::zero(); (1 << 15) / 16];
    portable::explode(&state, &mut soft);
    let mut hard = soft.clone();

    portable::mix(&state, &mut soft, 4096);
    unsafe { aesni::mix(&state, &mut hard, 4096, true) };
    assert_eq!(soft, hard);
}

#[test]
fn test_mix_empty_pad_is_noop() {
    if !is_aesni_supported() {
        println!("Skipping: AES-NI not supported.");
        return;
    }

    let state = sample_state(7);
    let mut empty: Vec<Block> = Vec::new();
    let mut pad = vec![Block::zero(); 8];
    unsafe {
        aesni::mix(&state, &mut empty, 64, true);
        aesni::mix_double(&state, &mut pad, &state, &mut empty, 64, false);
    }
    assert!(empty.is_empty());
    assert_eq!(pad, vec![Block::zero(); 8]);
}

// =============================================================================
// END TO END
// =============================================================================

#[test]
fn test_full_hash_consistency() {
    let Ok(hard) = Config::default().with_backend(Backend::AesNi) else {
        println!("Skipping: AES-NI not supported.");
        return;
    };
    let soft = Config::default().with_backend(Backend::Portable).unwrap();

    let scenarios: Vec<(&str, Vec<u8>)> = vec![
        ("Empty", vec![]),
        ("Small", b"CryptoNight".to_vec()),
        ("Rate (136)", vec![0u8; 136]),
        ("Rate + 1 (137)", vec![1u8; 137]),
        ("Block header (76)", vec![0x5Au8; 76]),
        ("Large (4096)", vec![b'c'; 4096]),
    ];

    for params in [Params::new(1 << 14, 1 << 12).unwrap(), Params::LITE] {
        let (hard, soft) = (hard.with_params(params), soft.with_params(params));
        let mut ctx = Context::new(&params);
        for (name, input) in &scenarios {
            let a = hash_with(input, &mut ctx, &hard);
            let b = hash_with(input, &mut ctx, &soft);
            assert_eq!(a, b, "Backend mismatch: {name} ({} bytes memory)", params.memory());
        }
    }
}
