//! Hash state and scratchpad.
//!
//! A `Context` owns the 200-byte Keccak state and the scratchpad for one
//! hash in flight. Allocating the scratchpad dominates the cost of a cold
//! call, so batch and mining loops keep one `Context` per worker and reuse
//! it; the contents never need clearing because explode overwrites every
//! cell before it is read.

use crate::config::Params;
use crate::kernels::block::Block;
use crate::kernels::constants::{BLOCK_SIZE, STATE_SIZE, STATE_WORDS};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

// =============================================================================
// HASH STATE
// =============================================================================

/// Keccak-f\[1600\] state as 25 little-endian lanes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HashState {
    words: [u64; STATE_WORDS],
}

impl HashState {
    /// All-zero state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: [0; STATE_WORDS],
        }
    }

    /// State from its 200-byte serialization.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; STATE_SIZE]) -> Self {
        let mut words = [0u64; STATE_WORDS];
        for (w, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut lane = [0u8; 8];
            lane.copy_from_slice(chunk);
            *w = u64::from_le_bytes(lane);
        }
        Self { words }
    }

    /// 200-byte serialization.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; STATE_SIZE] {
        let mut out = [0u8; STATE_SIZE];
        for (chunk, w) in out.chunks_exact_mut(8).zip(self.words) {
            chunk.copy_from_slice(&w.to_le_bytes());
        }
        out
    }

    /// Lanes in permutation order.
    #[must_use]
    pub const fn words(&self) -> &[u64; STATE_WORDS] {
        &self.words
    }

    /// Mutable lanes in permutation order.
    pub fn words_mut(&mut self) -> &mut [u64; STATE_WORDS] {
        &mut self.words
    }

    /// 16-byte block `i` (bytes `16i..16i+16`).
    pub(crate) fn block(&self, i: usize) -> Block {
        Block::from_u64s(self.words[2 * i], self.words[2 * i + 1])
    }

    pub(crate) fn set_block(&mut self, i: usize, blk: Block) {
        self.words[2 * i] = blk.lo();
        self.words[2 * i + 1] = blk.hi();
    }
}

// =============================================================================
// SCRATCHPAD
// =============================================================================

/// Block-aligned scratchpad.
#[derive(Clone, Debug)]
pub struct Scratchpad {
    blocks: Vec<Block>,
}

impl Scratchpad {
    /// Allocate `memory` bytes (a `Params`-validated size).
    #[must_use]
    pub fn new(memory: usize) -> Self {
        Self {
            blocks: vec![Block::zero(); memory / BLOCK_SIZE],
        }
    }

    /// Size in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.blocks.len() * BLOCK_SIZE
    }

    /// Grow or shrink to exactly `memory` bytes.
    pub fn resize(&mut self, memory: usize) {
        self.blocks.resize(memory / BLOCK_SIZE, Block::zero());
    }

    /// Cell `i` as `(lo, hi)` words.
    #[must_use]
    pub fn cell(&self, i: usize) -> Option<(u64, u64)> {
        self.blocks.get(i).map(|b| (b.lo(), b.hi()))
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut [Block] {
        &mut self.blocks
    }
}

// =============================================================================
// CONTEXT
// =============================================================================

/// Reusable working memory for one hash at a time.
#[derive(Clone, Debug)]
pub struct Context {
    state: HashState,
    scratchpad: Scratchpad,
}

impl Context {
    /// Allocate a context sized for `params`.
    #[must_use]
    pub fn new(params: &Params) -> Self {
        Self {
            state: HashState::new(),
            scratchpad: Scratchpad::new(params.memory()),
        }
    }

    /// Resize the scratchpad to match `params` (no-op when it already does).
    pub fn prepare(&mut self, params: &Params) {
        if self.scratchpad.size_bytes() != params.memory() {
            self.scratchpad.resize(params.memory());
        }
    }

    /// Current hash state.
    #[must_use]
    pub const fn state(&self) -> &HashState {
        &self.state
    }

    /// Mutable hash state.
    pub fn state_mut(&mut self) -> &mut HashState {
        &mut self.state
    }

    /// Scratchpad of the last hash computed with this context.
    #[must_use]
    pub const fn scratchpad(&self) -> &Scratchpad {
        &self.scratchpad
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut HashState, &mut Scratchpad) {
        (&mut self.state, &mut self.scratchpad)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(&Params::CRYPTONIGHT)
    }
}
