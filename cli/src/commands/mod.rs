//! CLI Commands
//!
//! All cryptonight CLI commands organized as separate modules.

mod check;
mod hash;
mod info;

pub use check::check_mode;
pub use hash::{hash_files, hash_text};
pub use info::show_info;

use anyhow::Result;
use clap::ValueEnum;
use cryptonight::{Backend, Config, Hasher};
use std::io::Read;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Variant {
    /// CryptoNight (2 MiB scratchpad, 524288 iterations)
    Standard,
    /// CryptoNight-Lite (1 MiB scratchpad, 262144 iterations)
    Lite,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum BackendChoice {
    /// Pick AES-NI when the CPU has it
    Auto,
    /// Force the AES-NI kernels (fails on CPUs without AES)
    Aesni,
    /// Force the table-driven software kernels
    Portable,
}

/// Resolve command-line choices into a library configuration.
pub fn build_config(variant: Variant, backend: BackendChoice) -> Result<Config> {
    let config = match variant {
        Variant::Standard => Config::cryptonight(),
        Variant::Lite => Config::lite(),
    };

    let config = match backend {
        BackendChoice::Auto => config,
        BackendChoice::Aesni => config.with_backend(Backend::AesNi)?,
        BackendChoice::Portable => config.with_backend(Backend::Portable)?,
    };
    Ok(config)
}

/// Stream a reader through a hasher and return the hex digest.
fn hash_reader<R: Read>(reader: &mut R, config: Config) -> std::io::Result<String> {
    let mut hasher = Hasher::with_config(config);
    let mut buffer = [0u8; 128 * 1024]; // 128 KB buffer

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
