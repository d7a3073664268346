//! File and directory validation
//!
//! Control flow: [`DirectoryWalker`] → [`FileValidator`] →
//! [`CheckPipeline`](crate::checks::CheckPipeline) → field checks.
//!
//! # Invariants
//!
//! - Checks only run on a successfully loaded record
//! - A load failure is one error for that file, with zero checks run
//! - A directory listing failure is one error for the whole run
//! - Files are processed sequentially in file-name order

mod dir;
mod errors;
mod file;

pub use dir::{is_fzp_file, DirectoryWalker};
pub use errors::{FailureList, ValidationError, ValidationResult};
pub use file::FileValidator;
