//! Output for the validator
//!
//! There is no global logger: a [`Logger`] value is created at startup and
//! passed by `&mut` to everything that writes.
//!
//! # Usage
//!
//! ```
//! use fzp_validator::observability::Logger;
//!
//! let mut log = Logger::capture(true);
//! log.report("=> title undefined");
//! log.trace("FZP_READ", &[("path", "parts/led.fzp")]);
//! assert!(log.output().starts_with("=> title undefined\n"));
//! ```

mod logger;

pub use logger::{Logger, Severity};
