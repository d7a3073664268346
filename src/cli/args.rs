//! CLI argument definitions using clap
//!
//! Commands:
//! - fzp-validator validate --file <path>
//! - fzp-validator validate --dir <path>

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::checks::CheckKind;

/// fzp-validator - validate Fritzing part description files
#[derive(Parser, Debug)]
#[command(name = "fzp-validator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate fzp file/files
    Validate(ValidateArgs),
}

/// Input selection and check toggles for `validate`
#[derive(Args, Debug, Clone, Default)]
pub struct ValidateArgs {
    /// The fzp filepath
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// The fzp files directory
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Disable fritzingVersion check
    #[arg(long = "no-check-fritzingversion", visible_alias = "nf")]
    pub no_check_fritzing_version: bool,

    /// Disable moduleId check
    #[arg(long = "no-check-moduleid", visible_alias = "nm")]
    pub no_check_module_id: bool,

    /// Disable referenceFile check
    #[arg(long = "no-check-referencefile", visible_alias = "nr")]
    pub no_check_reference_file: bool,

    /// Disable <version> check
    #[arg(long = "no-check-version", visible_alias = "nv")]
    pub no_check_version: bool,

    /// Disable <title> check
    #[arg(long = "no-check-title", visible_alias = "nt")]
    pub no_check_title: bool,

    /// Disable <description> check
    #[arg(long = "no-check-description", visible_alias = "nd")]
    pub no_check_description: bool,

    /// Disable <family> check
    #[arg(long = "no-check-family", visible_alias = "nD")]
    pub no_check_family: bool,

    /// Disable <tags> check
    #[arg(long = "no-check-tags", visible_alias = "nT")]
    pub no_check_tags: bool,

    /// Disable <properties> check
    #[arg(long = "no-check-properties", visible_alias = "np")]
    pub no_check_properties: bool,

    /// Disable <views> check
    #[arg(long = "no-check-views", visible_alias = "nV")]
    pub no_check_views: bool,

    /// Disable <connectors> check
    #[arg(long = "no-check-connectors", visible_alias = "nc")]
    pub no_check_connectors: bool,

    /// Disable <buses> check
    #[arg(long = "no-check-buses", visible_alias = "nb")]
    pub no_check_buses: bool,

    /// Require a name and a value on every property
    #[arg(long)]
    pub strict_properties: bool,

    /// JSON file with check settings, merged with the flags
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose mode
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl ValidateArgs {
    /// Checks disabled by `no-check-*` flags, in option order
    pub fn disabled_checks(&self) -> Vec<CheckKind> {
        let flags = [
            (CheckKind::FritzingVersion, self.no_check_fritzing_version),
            (CheckKind::ModuleId, self.no_check_module_id),
            (CheckKind::ReferenceFile, self.no_check_reference_file),
            (CheckKind::Version, self.no_check_version),
            (CheckKind::Title, self.no_check_title),
            (CheckKind::Description, self.no_check_description),
            (CheckKind::Family, self.no_check_family),
            (CheckKind::Tags, self.no_check_tags),
            (CheckKind::Properties, self.no_check_properties),
            (CheckKind::Views, self.no_check_views),
            (CheckKind::Connectors, self.no_check_connectors),
            (CheckKind::Buses, self.no_check_buses),
        ];

        flags
            .into_iter()
            .filter(|(_, set)| *set)
            .map(|(kind, _)| kind)
            .collect()
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
