//! Info Command
//!
//! Prints the backend auto-selection picked and the active parameter set.

use cryptonight::{Config, Params};

pub fn show_info(config: Config) {
    println!("Detected backend: {}", cryptonight::active_backend());
    println!("Selected backend: {}", config.backend());
    println!();

    for (name, params) in [("cryptonight", Params::CRYPTONIGHT), ("cryptonight-lite", Params::LITE)] {
        let marker = if *config.params() == params { "*" } else { " " };
        println!(
            "{} {:<17} {:>5} KiB  {:>7} iterations",
            marker,
            name,
            params.memory() / 1024,
            params.iterations()
        );
    }
}
