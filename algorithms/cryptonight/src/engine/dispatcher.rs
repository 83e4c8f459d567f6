//! Hardware Dispatcher
//!
//! Selects the AES-NI or portable core for the current CPU. Detection runs
//! once and is cached.

use crate::kernels;
use crate::types::{Backend, CoreFn, CpuFeatureError, DoubleCoreFn};

#[cfg(feature = "std")]
use std::sync::OnceLock;

#[cfg(any(target_arch = "x86_64", test))]
use crate::config::Params;
#[cfg(any(target_arch = "x86_64", test))]
use crate::context::Context;

// =============================================================================
// DETECTION
// =============================================================================

#[cfg(feature = "std")]
static DETECTED: OnceLock<Backend> = OnceLock::new();

cfg_if::cfg_if! {
    if #[cfg(all(feature = "std", target_arch = "x86_64"))] {
        /// Whether this CPU can run the AES-NI core (runtime CPUID).
        #[must_use]
        pub fn aesni_available() -> bool {
            is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2")
        }
    } else if #[cfg(all(target_arch = "x86_64", target_feature = "aes", target_feature = "sse2"))] {
        /// Whether this CPU can run the AES-NI core (compile-time, no_std).
        #[must_use]
        pub const fn aesni_available() -> bool {
            true
        }
    } else {
        /// Whether this CPU can run the AES-NI core (portable fallback).
        #[must_use]
        pub const fn aesni_available() -> bool {
            false
        }
    }
}

/// Returns the fastest backend for this CPU.
#[must_use]
pub fn detect_backend() -> Backend {
    #[cfg(feature = "std")]
    {
        *DETECTED.get_or_init(probe)
    }
    #[cfg(not(feature = "std"))]
    {
        probe()
    }
}

fn probe() -> Backend {
    if aesni_available() {
        Backend::AesNi
    } else {
        Backend::Portable
    }
}

/// Reject a backend the CPU cannot execute.
///
/// # Errors
/// Returns `CpuFeatureError` for `Backend::AesNi` without AES-NI.
pub fn ensure_supported(backend: Backend) -> Result<(), CpuFeatureError> {
    match backend {
        Backend::AesNi if !aesni_available() => Err(CpuFeatureError::new("aes")),
        _ => Ok(()),
    }
}

/// Returns the name of the active hardware backend.
#[must_use]
pub fn get_active_backend_name() -> &'static str {
    detect_backend().name()
}

// =============================================================================
// CORE SELECTION
// =============================================================================

/// Single-lane core for a validated backend.
#[must_use]
#[allow(unused_variables)]
pub fn core_for(backend: Backend) -> CoreFn {
    #[cfg(target_arch = "x86_64")]
    {
        if backend == Backend::AesNi {
            return safe_aesni_wrapper;
        }
    }
    kernels::portable::run
}

/// Double-lane core for a validated backend.
#[must_use]
#[allow(unused_variables)]
pub fn double_core_for(backend: Backend) -> DoubleCoreFn {
    #[cfg(target_arch = "x86_64")]
    {
        if backend == Backend::AesNi {
            return safe_aesni_double_wrapper;
        }
    }
    kernels::portable::run_double
}

// =============================================================================
// WRAPPERS
// =============================================================================

#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
fn safe_aesni_wrapper(ctx: &mut Context, params: &Params, prefetch: bool) {
    // SAFETY: Only reachable through a Config whose backend passed
    // `ensure_supported` (CPUID AES/SSE2).
    unsafe { kernels::aesni::run(ctx, params, prefetch) }
}

#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
fn safe_aesni_double_wrapper(
    ctx0: &mut Context,
    ctx1: &mut Context,
    params: &Params,
    prefetch: bool,
) {
    // SAFETY: As `safe_aesni_wrapper`.
    unsafe { kernels::aesni::run_double(ctx0, ctx1, params, prefetch) }
}
