//! Builder for constructing Settings.

use super::{Config, Settings};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use inno_bundler::bundler::{Config, SettingsBuilder};
///
/// # fn example(config: Config) -> inno_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .config(config)
///     .script_dir("build")
///     .signtool_path(Some("C:\\Tools\\signtool.exe".into()))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    config: Option<Config>,
    script_dir: Option<PathBuf>,
    run_iscc: bool,
    iscc_path: Option<PathBuf>,
    signtool_path: Option<PathBuf>,
    template: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the product configuration.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the directory the script is written to.
    ///
    /// Default: `.`
    pub fn script_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.script_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Runs the installer compiler after rendering.
    ///
    /// Default: false
    pub fn run_iscc(mut self, run: bool) -> Self {
        self.run_iscc = run;
        self
    }

    /// Sets the installer compiler executable.
    ///
    /// Default: None (located on `PATH`)
    pub fn iscc_path(mut self, path: Option<PathBuf>) -> Self {
        self.iscc_path = path;
        self
    }

    /// Sets the signing tool executable, overriding the config file.
    ///
    /// Default: None
    pub fn signtool_path(mut self, path: Option<PathBuf>) -> Self {
        self.signtool_path = path;
        self
    }

    /// Replaces the built-in installer template.
    ///
    /// Default: None (built-in template)
    pub fn template(mut self, path: Option<PathBuf>) -> Self {
        self.template = path;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` was never set.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        Ok(Settings::new(
            self.config.context("config is required")?,
            self.script_dir.unwrap_or_else(|| PathBuf::from(".")),
            self.run_iscc,
            self.iscc_path,
            self.signtool_path,
            self.template,
        ))
    }
}
