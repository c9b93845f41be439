//! Core utilities and types for the crudgen scaffold generator.
//!
//! This crate owns everything that touches the filesystem: the
//! [`GeneratedFile`] trait, the fixed [`OutputLayout`] and the error type
//! for directory and file failures.

mod error;
mod file;
mod layout;
mod utils;

pub use error::{Error, Result};
// File operations
pub use file::{GeneratedFile, write_file};
pub use layout::{DEFAULT_OUTPUT_DIR, LAYOUT_DIRS, OutputLayout};
// String utilities
pub use utils::to_lower;
