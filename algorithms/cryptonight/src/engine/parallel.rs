//! Batch Execution Engine
//!
//! Hashes many independent inputs. With `multithread` every rayon worker
//! owns one `Context` (allocated once per worker, not per input); without it
//! a single context is reused serially. Results are in input order either way.

use crate::config::Config;
use crate::context::Context;
use crate::engine::pipeline;
use crate::kernels::constants::HASH_SIZE;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Hash every input with `config`, returning digests in input order.
///
/// # Example
/// ```rust
/// use cryptonight::{hash_batch, Config, Params};
///
/// let config = Config::new(Params::new(1 << 14, 1 << 10).unwrap());
/// let digests = hash_batch(&[b"a".as_slice(), b"b".as_slice()], &config);
/// assert_eq!(digests.len(), 2);
/// assert_ne!(digests[0], digests[1]);
/// ```
#[must_use]
pub fn hash_batch<T>(inputs: &[T], config: &Config) -> Vec<[u8; HASH_SIZE]>
where
    T: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "multithread")]
    {
        use rayon::prelude::*;
        inputs
            .par_iter()
            .map_init(
                || Context::new(config.params()),
                |ctx, input| pipeline::run(input.as_ref(), ctx, config),
            )
            .collect()
    }
    #[cfg(not(feature = "multithread"))]
    {
        let mut ctx = Context::new(config.params());
        inputs
            .iter()
            .map(|input| pipeline::run(input.as_ref(), &mut ctx, config))
            .collect()
    }
}
