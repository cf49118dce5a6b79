//! Error types for the command-line layer.
//!
//! Pipeline failures come from [`crate::bundler::Error`]; this module wraps
//! them together with argument and environment errors for `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type returned to `main`
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Bundler errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Generic errors from anyhow
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// The config file given on the command line does not exist
    #[error("Config file not found: {}", path.display())]
    ConfigNotFound {
        /// Path as given
        path: PathBuf,
    },
}
