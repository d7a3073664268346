//! CLI command implementations
//!
//! Validation failures are printed as they happen and then turned into a
//! single `CliError`, which `main` maps to exit status 1.

use std::io::Write;
use std::path::Path;

use clap::CommandFactory;

use crate::checks::CheckConfig;
use crate::observability::Logger;
use crate::validate::{DirectoryWalker, FileValidator};

use super::args::{Cli, Command, ValidateArgs};
use super::config::Settings;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Option<Command>) -> CliResult<()> {
    match cmd {
        None => {
            help(&mut Logger::stdout(false));
            Ok(())
        }
        Some(Command::Validate(args)) => validate(&args),
    }
}

/// Top-level help, shown when no subcommand is given
pub fn help<W: Write>(log: &mut Logger<W>) {
    log.report(Cli::command().render_help());
}

/// `validate`: resolve settings, then check the file or directory.
pub fn validate(args: &ValidateArgs) -> CliResult<()> {
    let settings = Settings::resolve(args)?;
    let mut log = Logger::stdout(settings.verbose);
    execute(args, &settings.checks, &mut log)
}

/// Runs `validate` against an explicit configuration and output sink.
///
/// `--file` takes precedence over `--dir`. With neither, usage help is
/// written and the call succeeds.
pub fn execute<W: Write>(
    args: &ValidateArgs,
    config: &CheckConfig,
    log: &mut Logger<W>,
) -> CliResult<()> {
    if let Some(file) = &args.file {
        validate_file(file, config, log)
    } else if let Some(dir) = &args.dir {
        validate_dir(dir, config, log)
    } else {
        usage(log);
        Ok(())
    }
}

/// Validate a single file
pub fn validate_file<W: Write>(
    path: &Path,
    config: &CheckConfig,
    log: &mut Logger<W>,
) -> CliResult<()> {
    let validator = FileValidator::new(config);

    match validator.validate(path, log) {
        Ok(_) => Ok(()),
        Err(e) => {
            log.report(&e);
            Err(CliError::validation_failed(format!(
                "'{}' is invalid",
                path.display()
            )))
        }
    }
}

/// Validate every `.fzp` file in a directory
pub fn validate_dir<W: Write>(
    dir: &Path,
    config: &CheckConfig,
    log: &mut Logger<W>,
) -> CliResult<()> {
    let validator = FileValidator::new(config);
    let failures = DirectoryWalker::new(dir).validate_all(&validator, log);

    if failures.is_empty() {
        return Ok(());
    }

    Err(CliError::validation_failed(format!(
        "{} error(s) in '{}'",
        failures.len(),
        dir.display()
    )))
}

/// Subcommand help followed by usage samples
fn usage<W: Write>(log: &mut Logger<W>) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    if let Some(sub) = cmd.find_subcommand_mut("validate") {
        log.report(sub.render_help());
    }

    log.report("USAGE-SAMPLES");
    log.blank();
    log.report(format_args!("   $ {} validate --file file/path.fzp", name));
    log.report("   # or");
    log.report(format_args!("   $ {} validate -f file/path.fzp", name));
    log.blank();
    log.report(format_args!("   $ {} validate --dir file/dir", name));
    log.report("   # or");
    log.report(format_args!("   $ {} validate -d file/dir", name));
    log.blank();
    log.report("also you can combine the other flags (no-check, verbose)");
}
