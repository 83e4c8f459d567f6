//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon. Each file gets
//! its own scratchpad, so memory use grows with the thread count.

use super::hash_reader;
use anyhow::{Context, Result};
use cryptonight::Config;
use rayon::prelude::*;
use std::path::PathBuf;

/// Hash files (Rayon parallelizes automatically when beneficial).
pub fn hash_files(files: &[PathBuf], config: Config) -> Result<()> {
    let outcomes: Vec<(&PathBuf, Result<String>)> = files
        .par_iter()
        .map(|file_path| {
            let result = std::fs::File::open(file_path)
                .with_context(|| format!("Failed to open: {}", file_path.display()))
                .and_then(|mut file| {
                    hash_reader(&mut file, config)
                        .with_context(|| format!("Failed to read: {}", file_path.display()))
                });
            (file_path, result)
        })
        .collect();

    // Results keep the input order
    let mut failed = 0usize;
    for (file_path, result) in outcomes {
        match result {
            Ok(hex_hash) => println!("{}  {}", hex_hash, file_path.display()),
            Err(e) => {
                eprintln!("Error: {}: {:#}", file_path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {} file(s)", failed);
    }

    Ok(())
}

/// Hash a string given on the command line.
pub fn hash_text(text: &str, config: Config) {
    let mut ctx = cryptonight::Context::new(config.params());
    let digest = cryptonight::hash_with(text.as_bytes(), &mut ctx, &config);
    println!("{}  -", hex::encode(digest));
}
