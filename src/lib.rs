//! fzp-validator - presence and shape checks for Fritzing part files
//!
//! A part file is loaded into an [`fzp::Fzp`] record, then run through the
//! configurable [`checks::CheckPipeline`]. Single files are handled by
//! [`validate::FileValidator`], directories by [`validate::DirectoryWalker`].

pub mod checks;
pub mod cli;
pub mod fzp;
pub mod observability;
pub mod validate;
