#![cfg_attr(not(feature = "std"), no_std)]

//! # CryptoNight
//!
//! Memory-hard proof-of-work hash. A Keccak sponge seeds a 2 MiB scratchpad
//! through AES-round expansion, a pointer-chasing loop mixes it, and the
//! scratchpad is folded back into the state before one of four finalizing
//! digests is applied.
//!
//! Accelerated by AES-NI, with a bit-identical table-driven fallback.

//! # Usage
//! ```rust
//! use cryptonight::{Config, Context};
//!
//! // 1. One-shot hashing (allocates a scratchpad per call)
//! let digest = cryptonight::hash(b"This is a test");
//!
//! // 2. Reusing a context across calls
//! let config = Config::default();
//! let mut ctx = Context::new(config.params());
//! let again = cryptonight::hash_with(b"This is a test", &mut ctx, &config);
//! assert_eq!(digest, again);
//!
//! // 3. Streaming input
//! let mut hasher = cryptonight::Hasher::new();
//! hasher.update(b"This is ");
//! hasher.update(b"a test");
//! assert_eq!(hasher.finalize(), digest);
//! ```

#[cfg(not(target_pointer_width = "64"))]
compile_error!(
    "CryptoNight requires a 64-bit target: the mixing loop addresses the scratchpad with 64-bit words."
);

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod config;
mod context;
mod engine;
pub mod finalizers;
// Re-export internal kernels for benchmarking/testing if needed, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/bench use only
mod oneshot;
pub mod sponge;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use config::{Config, Params};
pub use context::{Context, HashState, Scratchpad};
#[cfg(feature = "digest-trait")]
pub use digest;
pub use engine::parallel::hash_batch;
pub use oneshot::{double_hash, double_hash_packed, hash, hash_lite, hash_with, verify};
pub use streaming::CryptoNightHasher as Hasher;
pub use types::{Backend, CpuFeatureError, PackedInputError, ParamsError};

/// Returns the name of the hardware backend auto-selection picked for this CPU.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name()
}
