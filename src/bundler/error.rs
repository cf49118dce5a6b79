//! Error types for the bundling pipeline.
//!
//! Provides the [`Error`] enum returned by every pipeline stage, plus the
//! [`Context`] and [`ErrorExt`] extension traits used to attach messages and
//! file paths to failures as they propagate.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for bundling operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while loading, rendering, compiling or signing.
#[derive(Debug, Error)]
pub enum Error {
    /// The config file is not valid JSON or does not match the schema.
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem failure with the operation and path that caused it.
    #[error("{context} ({}): {source}", path.display())]
    Fs {
        context: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The installer template failed to parse.
    #[error("template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// The installer template parsed but failed to render.
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// An external tool could not be started.
    #[error("failed to run {command}: {error}")]
    CommandFailed { command: String, error: io::Error },

    /// An external tool could not be located.
    #[error("{tool} not found: {hint}")]
    ToolNotFound { tool: String, hint: String },

    #[error("{0}")]
    GenericError(String),
}

/// Attach a message to an error or a missing value.
pub trait Context<T> {
    /// Wraps the failure in [`Error::GenericError`] prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Attach filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Converts an I/O failure into [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context: context.to_string(),
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_context_reports_message() {
        let missing: Option<u8> = None;
        let err = missing.context("config is required").unwrap_err();
        assert_eq!(err.to_string(), "config is required");
    }

    #[test]
    fn result_context_prefixes_message() {
        let failed: Result<u8> = Err(Error::GenericError("no such tool".into()));
        let err = failed.context("locating iscc").unwrap_err();
        assert_eq!(err.to_string(), "locating iscc: no such tool");
    }

    #[test]
    fn fs_context_keeps_path() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = result.fs_context("reading config", "app.json").unwrap_err();
        match err {
            Error::Fs { context, path, .. } => {
                assert_eq!(context, "reading config");
                assert_eq!(path, PathBuf::from("app.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
