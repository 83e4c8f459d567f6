//! Streaming Hasher
//!
//! Absorbs input incrementally into the Keccak sponge; the memory-hard core
//! runs once, on `finalize`. The scratchpad is allocated lazily at that point
//! and kept across `reset` so a reused hasher allocates once.

use crate::config::Config;
use crate::context::Context;
use crate::engine::pipeline;
use crate::kernels::constants::HASH_SIZE;
use crate::sponge::{self, Sponge};
use sha3::Digest as _;

#[cfg(feature = "digest-trait")]
use digest::typenum::U32;
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, FixedOutputReset, HashMarker, OutputSizeUser, Reset, Update};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Incremental CryptoNight hasher.
#[derive(Clone)]
pub struct CryptoNightHasher {
    sponge: Sponge,
    config: Config,
    ctx: Option<Context>,
}

impl CryptoNightHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// New hasher with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// New hasher with an explicit configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            sponge: Sponge::new(),
            config,
            ctx: None,
        }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.sponge.update(data);
    }

    /// Finalize and return the digest.
    #[must_use]
    pub fn finalize(mut self) -> [u8; HASH_SIZE] {
        self.finalize_reset()
    }

    /// Finalize, then reset for the next message (keeps the scratchpad).
    pub fn finalize_reset(&mut self) -> [u8; HASH_SIZE] {
        let absorbed = core::mem::take(&mut self.sponge);
        let ctx = self
            .ctx
            .get_or_insert_with(|| Context::new(self.config.params()));
        pipeline::run_absorbed(sponge::squeeze(absorbed), ctx, &self.config)
    }

    /// Reset hasher for reuse.
    pub fn reset(&mut self) {
        self.sponge = Sponge::new();
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for CryptoNightHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for CryptoNightHasher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CryptoNightHasher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for CryptoNightHasher {
    type OutputSize = U32;
}

#[cfg(feature = "digest-trait")]
impl Update for CryptoNightHasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for CryptoNightHasher {
    fn finalize_into(self, out: &mut Output<Self>) {
        let res = self.finalize();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutputReset for CryptoNightHasher {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        let res = self.finalize_reset();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for CryptoNightHasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for CryptoNightHasher {}
