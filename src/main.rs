//! fzp-validator CLI entry point
//!
//! Parses arguments and dispatches via `cli::run`. Any error is printed to
//! stderr and the process exits with status 1.

use fzp_validator::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
