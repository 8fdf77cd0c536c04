//! `hospital` binary: terminal front-end for the records desk.
//!
//! # Responsibility
//! - Resolve configuration, start file logging, open the storage gateway.
//! - Hand the gateway to the interaction controller and run the terminal UI,
//!   or print one table as JSON for `hospital export`.

mod cli;
mod export;
mod tui;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = cli::run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
