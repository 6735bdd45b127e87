//! # snick - text shaping from the command line
//!
//! Reads text from a file or stdin, applies one helper from the `snick` library,
//! and writes the result to stdout.
//!
//! ## Features
//! - dedent / indent / unwrap / strip / strip-ansi
//! - wrap with continuation indent taken from the first line
//! - box drawing and JSON pretty-printing
//! - shell completions

mod cli;
mod config;
mod run;

use clap::Parser;
use dotenv::dotenv;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    // Print user-friendly messages; exit uses Display not Debug
    let config = config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = run::run(&args, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
