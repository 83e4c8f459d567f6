//! CryptoNight CLI
//!
//! Memory-hard proof-of-work hash command-line tool.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::{check_mode, hash_files, hash_text, show_info, BackendChoice, Variant};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "cryptonight")]
#[command(about = "CryptoNight proof-of-work hash (AES-NI accelerated)", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Hash this string instead of files
    #[arg(short, long, conflicts_with = "files")]
    text: Option<String>,

    #[command(flatten)]
    options: HashOptions,
}

/// Options shared by hashing and checking.
#[derive(Args, Clone, Copy)]
struct HashOptions {
    /// Parameter set to use
    #[arg(short, long, value_enum, default_value_t = Variant::Standard, global = true)]
    variant: Variant,

    /// AES implementation to use
    #[arg(short, long, value_enum, default_value_t = BackendChoice::Auto, global = true)]
    backend: BackendChoice,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
    /// Show the detected backend and parameter sets
    Info,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = commands::build_config(cli.options.variant, cli.options.backend)?;

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file, config)?,
        Some(Commands::Info) => show_info(config),
        None => {
            if let Some(text) = &cli.text {
                hash_text(text, config);
                return Ok(());
            }

            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: cryptonight [FILE]... or cryptonight --help");
                std::process::exit(1);
            }

            hash_files(&cli.files, config)?;
        }
    }

    Ok(())
}
