//! Finalizing digests.
//!
//! After implode and one more Keccak-f\[1600\], the low two bits of state
//! byte 0 pick one of four 256-bit hashes, which is applied to all 200
//! state bytes.

use crate::context::HashState;
use crate::kernels::constants::{HASH_SIZE, STATE_SIZE};

/// A 256-bit digest over the final 200-byte state.
pub trait Finalizer: Sync {
    /// Algorithm name.
    fn name(&self) -> &'static str;

    /// Digest of the serialized state.
    fn digest(&self, state: &[u8; STATE_SIZE]) -> [u8; HASH_SIZE];
}

// =============================================================================
// DIGESTS
// =============================================================================

/// BLAKE-256 (index 0).
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake256;

/// Groestl-256 (index 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct Groestl256;

/// JH-256 (index 2).
#[derive(Debug, Clone, Copy, Default)]
pub struct Jh256;

/// Skein-512 with a 256-bit output (index 3).
#[derive(Debug, Clone, Copy, Default)]
pub struct Skein256;

impl Finalizer for Blake256 {
    fn name(&self) -> &'static str {
        "BLAKE-256"
    }

    fn digest(&self, state: &[u8; STATE_SIZE]) -> [u8; HASH_SIZE] {
        let mut out = [0u8; HASH_SIZE];
        out.copy_from_slice(&<blake_hash::Blake256 as blake_hash::digest::Digest>::digest(state));
        out
    }
}

impl Finalizer for Groestl256 {
    fn name(&self) -> &'static str {
        "Groestl-256"
    }

    fn digest(&self, state: &[u8; STATE_SIZE]) -> [u8; HASH_SIZE] {
        let mut out = [0u8; HASH_SIZE];
        out.copy_from_slice(&<groestl::Groestl256 as groestl::Digest>::digest(state));
        out
    }
}

impl Finalizer for Jh256 {
    fn name(&self) -> &'static str {
        "JH-256"
    }

    fn digest(&self, state: &[u8; STATE_SIZE]) -> [u8; HASH_SIZE] {
        let mut out = [0u8; HASH_SIZE];
        out.copy_from_slice(&<jh::Jh256 as jh::Digest>::digest(state));
        out
    }
}

impl Finalizer for Skein256 {
    fn name(&self) -> &'static str {
        "Skein-512-256"
    }

    fn digest(&self, state: &[u8; STATE_SIZE]) -> [u8; HASH_SIZE] {
        type Skein = skein::Skein512<skein::digest::consts::U32>;
        let mut out = [0u8; HASH_SIZE];
        out.copy_from_slice(&<Skein as skein::Digest>::digest(state));
        out
    }
}

// =============================================================================
// SELECTION
// =============================================================================

/// The four finalizers in index order.
pub static FINALIZERS: [&dyn Finalizer; 4] = [&Blake256, &Groestl256, &Jh256, &Skein256];

/// Index of the finalizer for a permuted state: low two bits of byte 0.
#[must_use]
pub const fn select(state: &HashState) -> usize {
    (state.words()[0] & 3) as usize
}

/// Digest of `state` with the finalizer it selects from `table`.
#[must_use]
pub fn finalize_with(table: &[&dyn Finalizer; 4], state: &HashState) -> [u8; HASH_SIZE] {
    table[select(state)].digest(&state.to_bytes())
}

/// Digest of `state` with the standard finalizers.
#[must_use]
pub fn finalize(state: &HashState) -> [u8; HASH_SIZE] {
    finalize_with(&FINALIZERS, state)
}
