//! Inno Setup installer generation library
//!
//! Loads a multi-component product description from JSON, derives a stable
//! application id, renders an Inno Setup script, and optionally drives the
//! `iscc` compiler and an Authenticode signing tool.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
