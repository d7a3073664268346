//! Fritzing part description records
//!
//! The loader is the only place that knows the FZP markup. Everything
//! downstream works on the [`Fzp`] record.

mod errors;
mod loader;
mod types;

pub use errors::{FzpError, FzpResult};
pub use loader::{FzpLoader, RecordLoader};
pub use types::{Fzp, Property};

/// File extension identifying part description files
pub const FZP_EXTENSION: &str = "fzp";
