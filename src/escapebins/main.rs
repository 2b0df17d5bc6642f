//! # escapebins CLI
//!
//! The binary is thin: it sets up logging, calls `cli::run()` and turns a returned error into
//! exit code 1. Argument errors are reported by clap, which exits with 2 on its own.
//!
//! Logging goes to stderr through `env_logger` and is quiet by default. Set
//! `ESCAPEBINS_LOG=debug` to see where the data and config came from.

use env_logger::Env;

mod cli;

const LOG_ENV: &str = "ESCAPEBINS_LOG";

fn main() {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, "warn")).init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
