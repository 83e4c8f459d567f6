//! Shared types used across the CryptoNight library.

use crate::config::Params;
use crate::context::Context;
use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Memory-hard core signature: `(context, params, prefetch)`.
///
/// Runs explode -> mix -> implode over a context whose hash state already
/// holds the absorbed input. Both the AES-NI and the portable backend provide
/// this signature so the dispatcher can swap them at runtime.
pub type CoreFn = fn(&mut Context, &Params, bool);

/// Two-lane core signature: both contexts advance with interleaved steps.
pub type DoubleCoreFn = fn(&mut Context, &mut Context, &Params, bool);

// =============================================================================
// BACKENDS
// =============================================================================

/// Implementation of the AES round used by explode, mix and implode.
///
/// Both backends produce byte-identical digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// `AESENC` / `AESKEYGENASSIST`, eight lanes per round key.
    AesNi,
    /// Table-driven software AES, four lanes per round key.
    Portable,
}

impl Backend {
    /// Human-readable backend name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AesNi => "AES-NI",
            Self::Portable => "Portable",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for a backend the running CPU cannot execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFeatureError {
    missing: &'static str,
}

impl CpuFeatureError {
    /// Create a new `CpuFeatureError` describing the missing CPU feature.
    pub const fn new(missing: &'static str) -> Self {
        Self { missing }
    }

    /// Name of the missing feature.
    #[must_use]
    pub const fn missing(&self) -> &'static str {
        self.missing
    }
}

impl fmt::Display for CpuFeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU feature '{}' required by the AES-NI backend. \
             Use Backend::Portable on this machine",
            self.missing
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for CpuFeatureError {}

/// Error for an invalid scratchpad size or iteration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    /// Scratchpad size is not a power of two.
    MemoryNotPowerOfTwo(usize),
    /// Scratchpad is smaller than one eight-block window (128 bytes).
    MemoryTooSmall(usize),
    /// The mixing loop must run at least once.
    ZeroIterations,
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemoryNotPowerOfTwo(m) => {
                write!(f, "scratchpad size {m} is not a power of two")
            }
            Self::MemoryTooSmall(m) => {
                write!(f, "scratchpad size {m} is below the 128-byte window")
            }
            Self::ZeroIterations => f.write_str("iteration count must be non-zero"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for ParamsError {}

/// Error for a packed double-lane input that cannot be split in two halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedInputError {
    len: usize,
}

impl PackedInputError {
    /// Create a new `PackedInputError` for a buffer of `len` bytes.
    pub const fn new(len: usize) -> Self {
        Self { len }
    }
}

impl fmt::Display for PackedInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "packed input of {} bytes does not split into two equal lanes",
            self.len
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for PackedInputError {}
