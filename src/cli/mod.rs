//! CLI module for fzp-validator
//!
//! Provides command-line interface for:
//! - validate --file: check one part file
//! - validate --dir: check every part file in a directory

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, ValidateArgs};
pub use commands::{execute, help, run, run_command, validate, validate_dir, validate_file};
pub use config::{Config, Settings};
pub use errors::{CliError, CliErrorCode, CliResult};
