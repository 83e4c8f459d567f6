//! Algorithm parameters and execution configuration.

use crate::engine::dispatcher;
use crate::kernels::constants::{
    BLOCK_SIZE, CN_ITERATIONS, CN_MEMORY, LITE_ITERATIONS, LITE_MEMORY, WINDOW_SIZE,
};
use crate::types::{Backend, CoreFn, CpuFeatureError, DoubleCoreFn, ParamsError};
use static_assertions::const_assert;

// =============================================================================
// PARAMETERS
// =============================================================================

/// Scratchpad size and mixing-loop length.
///
/// Construction guarantees the scratchpad is a power of two of at least one
/// window, so `memory - 16` is a valid block mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params {
    memory: usize,
    iterations: usize,
}

impl Params {
    /// Standard CryptoNight: 2 MiB scratchpad, 2^19 iterations.
    pub const CRYPTONIGHT: Self = Self {
        memory: CN_MEMORY,
        iterations: CN_ITERATIONS,
    };

    /// CryptoNight-Lite: 1 MiB scratchpad, 2^18 iterations.
    pub const LITE: Self = Self {
        memory: LITE_MEMORY,
        iterations: LITE_ITERATIONS,
    };

    /// Custom parameter set.
    ///
    /// # Errors
    /// Returns `ParamsError` if `memory` is not a power of two, is smaller
    /// than one 128-byte window, or `iterations` is zero.
    pub const fn new(memory: usize, iterations: usize) -> Result<Self, ParamsError> {
        if !memory.is_power_of_two() {
            return Err(ParamsError::MemoryNotPowerOfTwo(memory));
        }
        if memory < WINDOW_SIZE {
            return Err(ParamsError::MemoryTooSmall(memory));
        }
        if iterations == 0 {
            return Err(ParamsError::ZeroIterations);
        }
        Ok(Self { memory, iterations })
    }

    /// Scratchpad size in bytes.
    #[must_use]
    pub const fn memory(&self) -> usize {
        self.memory
    }

    /// Mixing-loop iteration count.
    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Byte-offset mask keeping every access inside `[0, memory - 16]`.
    #[must_use]
    pub const fn mask(&self) -> usize {
        self.memory - BLOCK_SIZE
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::CRYPTONIGHT
    }
}

const_assert!(CN_MEMORY.is_power_of_two());
const_assert!(LITE_MEMORY.is_power_of_two());
const_assert!(CN_MEMORY % WINDOW_SIZE == 0);
const_assert!(LITE_MEMORY % WINDOW_SIZE == 0);

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Parameters, backend and prefetch policy for one family of hash calls.
///
/// A `Config` only ever holds a backend the running CPU supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    params: Params,
    backend: Backend,
    prefetch: bool,
}

impl Config {
    /// Configuration with the fastest backend for this CPU and prefetch on.
    #[must_use]
    pub fn new(params: Params) -> Self {
        Self {
            params,
            backend: dispatcher::detect_backend(),
            prefetch: true,
        }
    }

    /// Standard CryptoNight with the detected backend.
    #[must_use]
    pub fn cryptonight() -> Self {
        Self::new(Params::CRYPTONIGHT)
    }

    /// CryptoNight-Lite with the detected backend.
    #[must_use]
    pub fn lite() -> Self {
        Self::new(Params::LITE)
    }

    /// Force a specific backend.
    ///
    /// # Errors
    /// Returns `CpuFeatureError` if the CPU cannot run `backend`.
    pub fn with_backend(self, backend: Backend) -> Result<Self, CpuFeatureError> {
        dispatcher::ensure_supported(backend)?;
        Ok(Self { backend, ..self })
    }

    /// Enable or disable software prefetch hints (no effect on the digest).
    #[must_use]
    pub const fn with_prefetch(self, prefetch: bool) -> Self {
        Self { prefetch, ..self }
    }

    /// Replace the parameter set, keeping backend and prefetch policy.
    #[must_use]
    pub const fn with_params(self, params: Params) -> Self {
        Self { params, ..self }
    }

    /// Algorithm parameters.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Selected backend.
    #[must_use]
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    /// Whether prefetch hints are issued.
    #[must_use]
    pub const fn prefetch(&self) -> bool {
        self.prefetch
    }

    pub(crate) fn core(&self) -> CoreFn {
        dispatcher::core_for(self.backend)
    }

    pub(crate) fn double_core(&self) -> DoubleCoreFn {
        dispatcher::double_core_for(self.backend)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::cryptonight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_validation() {
        assert_eq!(
            Params::new(3000, 10),
            Err(ParamsError::MemoryNotPowerOfTwo(3000))
        );
        assert_eq!(Params::new(64, 10), Err(ParamsError::MemoryTooSmall(64)));
        assert_eq!(Params::new(1 << 14, 0), Err(ParamsError::ZeroIterations));

        let p = Params::new(1 << 14, 1 << 10).unwrap();
        assert_eq!(p.memory(), 16 * 1024);
        assert_eq!(p.mask(), 0x3FF0);
    }

    #[test]
    fn test_presets() {
        assert_eq!(Params::CRYPTONIGHT.mask(), 0x1F_FFF0);
        assert_eq!(Params::CRYPTONIGHT.iterations(), 0x8_0000);
        assert_eq!(Params::LITE.memory() * 2, Params::CRYPTONIGHT.memory());
        assert_eq!(Params::default(), Params::CRYPTONIGHT);
    }

    #[test]
    fn test_portable_always_accepted() {
        let cfg = Config::default().with_backend(Backend::Portable).unwrap();
        assert_eq!(cfg.backend(), Backend::Portable);
        assert!(!cfg.with_prefetch(false).prefetch());
    }
}
