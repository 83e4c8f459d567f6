//! Pipeline Driver
//!
//! absorb -> explode -> mix -> implode -> permute -> finalize, for one lane
//! or two interleaved lanes.

use crate::config::Config;
use crate::context::{Context, HashState};
use crate::finalizers;
use crate::kernels::constants::HASH_SIZE;
use crate::sponge;

/// Hash `input` using `ctx` as working memory.
pub fn run(input: &[u8], ctx: &mut Context, config: &Config) -> [u8; HASH_SIZE] {
    run_absorbed(sponge::absorb(input), ctx, config)
}

/// Continue from an already absorbed sponge state.
pub fn run_absorbed(state: HashState, ctx: &mut Context, config: &Config) -> [u8; HASH_SIZE] {
    ctx.prepare(config.params());
    *ctx.state_mut() = state;
    (config.core())(ctx, config.params(), config.prefetch());
    finish(ctx.state_mut())
}

/// Two inputs through the double-lane core; `digest(a) || digest(b)`.
pub fn run_double(
    a: &[u8],
    b: &[u8],
    ctx0: &mut Context,
    ctx1: &mut Context,
    config: &Config,
) -> [u8; 2 * HASH_SIZE] {
    ctx0.prepare(config.params());
    ctx1.prepare(config.params());
    *ctx0.state_mut() = sponge::absorb(a);
    *ctx1.state_mut() = sponge::absorb(b);

    (config.double_core())(ctx0, ctx1, config.params(), config.prefetch());

    let mut out = [0u8; 2 * HASH_SIZE];
    out[..HASH_SIZE].copy_from_slice(&finish(ctx0.state_mut()));
    out[HASH_SIZE..].copy_from_slice(&finish(ctx1.state_mut()));
    out
}

fn finish(state: &mut HashState) -> [u8; HASH_SIZE] {
    sponge::permute(state);
    finalizers::finalize(state)
}
