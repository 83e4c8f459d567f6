//! Check Command
//!
//! Verify a checksum list in `sha256sum` format: one `<hex digest>  <path>`
//! per line, `#` comments and blank lines skipped. Every listed file is
//! hashed with the same variant and backend as the `hash` command.

use super::hash_reader;
use anyhow::{Context, Result};
use cryptonight::Config;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One parsed checksum line.
struct Entry<'a> {
    expected: String,
    path: &'a str,
}

impl<'a> Entry<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let (digest, path) = line.split_once("  ")?;
        let digest = digest.trim();
        if digest.len() != 64 || !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self {
            expected: digest.to_ascii_lowercase(),
            path: path.trim(),
        })
    }

    fn verify(&self, config: Config) -> Outcome {
        match File::open(self.path).and_then(|mut file| hash_reader(&mut file, config)) {
            Ok(actual) if actual == self.expected => Outcome::Match,
            Ok(_) => Outcome::Mismatch,
            Err(e) => Outcome::Unreadable(e),
        }
    }
}

enum Outcome {
    Match,
    Mismatch,
    Unreadable(std::io::Error),
}

// =============================================================================
// CHECK
// =============================================================================

/// Verify checksums from a checksum file; exits non-zero on any failure.
pub fn check_mode(checksum_file: &PathBuf, config: Config) -> Result<()> {
    let lines = read_lines(checksum_file)?;

    let mut checked = 0usize;
    let mut mismatched = 0usize;
    for line in lines.iter().map(|l| l.trim()) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(entry) = Entry::parse(line) else {
            eprintln!("Warning: Invalid format: {line}");
            continue;
        };

        checked += 1;
        match entry.verify(config) {
            Outcome::Match => println!("{}: OK", entry.path),
            Outcome::Mismatch => {
                println!("{}: FAILED", entry.path);
                mismatched += 1;
            }
            Outcome::Unreadable(e) => {
                println!("{}: FAILED open or read ({e})", entry.path);
                mismatched += 1;
            }
        }
    }

    println!();
    if mismatched > 0 {
        eprintln!("WARNING: {mismatched} of {checked} checksums did NOT match");
        std::process::exit(1);
    }
    println!("All {checked} checksums verified");

    Ok(())
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("Failed to read: {}", path.display()))
}
