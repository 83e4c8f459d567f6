//! Public API Layer
//!
//! One-shot, double-lane and verification entry points.

use crate::config::Config;
use crate::context::Context;
use crate::engine::pipeline;
use crate::kernels::constants::HASH_SIZE;
use crate::types::PackedInputError;
use subtle::ConstantTimeEq;

// =============================================================================
// SINGLE LANE
// =============================================================================

/// Compute the CryptoNight hash with the default configuration.
///
/// Allocates a 2 MiB scratchpad per call; use [`hash_with`] to reuse one.
///
/// # Example
/// ```rust
/// let digest = cryptonight::hash(b"This is a test");
/// assert_eq!(
///     hex::encode(digest),
///     "a084f01d1437a09c6985401b60d43554ae105802c5f5d8a9b3253649c0be6605"
/// );
/// ```
#[must_use]
pub fn hash(input: &[u8]) -> [u8; HASH_SIZE] {
    let config = Config::default();
    let mut ctx = Context::new(config.params());
    pipeline::run(input, &mut ctx, &config)
}

/// Compute the CryptoNight-Lite hash (1 MiB, 2^18 iterations).
#[must_use]
pub fn hash_lite(input: &[u8]) -> [u8; HASH_SIZE] {
    let config = Config::lite();
    let mut ctx = Context::new(config.params());
    pipeline::run(input, &mut ctx, &config)
}

/// Hash with a caller-owned context and explicit configuration.
///
/// The context is resized to `config.params()` if needed.
#[must_use]
pub fn hash_with(input: &[u8], ctx: &mut Context, config: &Config) -> [u8; HASH_SIZE] {
    pipeline::run(input, ctx, config)
}

// =============================================================================
// DOUBLE LANE
// =============================================================================

/// Hash two inputs with interleaved mixing loops.
///
/// Returns `hash(a) || hash(b)`.
#[must_use]
pub fn double_hash(
    a: &[u8],
    b: &[u8],
    ctx0: &mut Context,
    ctx1: &mut Context,
    config: &Config,
) -> [u8; 2 * HASH_SIZE] {
    pipeline::run_double(a, b, ctx0, ctx1, config)
}

/// Double hash of a buffer holding two equal-length inputs back to back.
///
/// # Errors
/// Returns `PackedInputError` if `input` has odd length.
pub fn double_hash_packed(
    input: &[u8],
    ctx0: &mut Context,
    ctx1: &mut Context,
    config: &Config,
) -> Result<[u8; 2 * HASH_SIZE], PackedInputError> {
    if input.len() % 2 != 0 {
        return Err(PackedInputError::new(input.len()));
    }
    let (a, b) = input.split_at(input.len() / 2);
    Ok(pipeline::run_double(a, b, ctx0, ctx1, config))
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify a digest in constant time.
///
/// # Example
/// ```rust
/// let data = b"block header";
/// let digest = cryptonight::hash(data);
/// assert!(cryptonight::verify(data, &digest));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &[u8; HASH_SIZE]) -> bool {
    let computed = hash(input);
    computed.ct_eq(expected).into()
}
