//! Run settings: check configuration file plus command-line flags
//!
//! Optional JSON file:
//!
//! ```json
//! { "disabled_checks": ["title"], "property_policy": "strict", "verbose": true }
//! ```
//!
//! Flags are merged on top of the file. Anything either source disables
//! stays disabled; strict policy and verbose mode are on if either source
//! turns them on.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::checks::{CheckConfig, CheckKind, PropertyPolicy};

use super::args::ValidateArgs;
use super::errors::{CliError, CliResult};

/// Check settings file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Checks to disable (same names as the `no-check-*` flags)
    #[serde(default)]
    pub disabled_checks: Vec<CheckKind>,

    /// Property policy (default: lenient)
    #[serde(default)]
    pub property_policy: PropertyPolicy,

    /// Verbose diagnostics (default: false)
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config '{}': {}", path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            CliError::config_error(format!("Invalid config JSON '{}': {}", path.display(), e))
        })
    }
}

/// Resolved settings for one `validate` run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub checks: CheckConfig,
    pub verbose: bool,
}

impl Settings {
    /// Builds settings from the optional config file and the flags.
    pub fn resolve(args: &ValidateArgs) -> CliResult<Self> {
        let file = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        Ok(Self::merge(file, args))
    }

    fn merge(file: Config, args: &ValidateArgs) -> Self {
        let mut checks = CheckConfig::new();

        for kind in file.disabled_checks.into_iter().chain(args.disabled_checks()) {
            checks.disable(kind);
        }

        if args.strict_properties || file.property_policy == PropertyPolicy::Strict {
            checks.set_property_policy(PropertyPolicy::Strict);
        }

        Self {
            checks,
            verbose: args.verbose || file.verbose,
        }
    }
}
