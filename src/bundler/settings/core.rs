//! Core Settings struct and implementations.

use super::Config;
use std::path::{Path, PathBuf};

/// Everything one bundling run needs.
///
/// Combines the loaded [`Config`] with run options from the command line.
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder).
///
/// # Examples
///
/// ```no_run
/// use inno_bundler::bundler::{Config, SettingsBuilder};
///
/// # fn example() -> inno_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .config(Config::load("product.json")?)
///     .script_dir(".")
///     .run_iscc(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Product configuration.
    config: Config,

    /// Directory the `.iss` script is written to.
    script_dir: PathBuf,

    /// Whether to run the installer compiler after rendering.
    run_iscc: bool,

    /// Explicit installer compiler executable.
    iscc_path: Option<PathBuf>,

    /// Explicit signing tool executable. Takes precedence over the config.
    signtool_path: Option<PathBuf>,

    /// Custom template replacing the built-in one.
    template: Option<PathBuf>,
}

impl Settings {
    /// Returns the product configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.config.name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.config.version_string
    }

    /// Returns the directory the script is written to.
    pub fn script_dir(&self) -> &Path {
        &self.script_dir
    }

    /// Full path of the generated `<name>.iss` script.
    pub fn script_path(&self) -> PathBuf {
        self.script_dir.join(self.config.script_file_name())
    }

    /// Expected path of the compiled installer executable.
    ///
    /// Relative `output_dir` values resolve against the script directory,
    /// which is where the compiler is run from.
    pub fn installer_path(&self) -> PathBuf {
        self.script_dir.join(self.config.installer_path())
    }

    /// Returns whether the installer compiler should run.
    pub fn run_iscc(&self) -> bool {
        self.run_iscc
    }

    /// Returns the explicit installer compiler path, if any.
    pub fn iscc_path(&self) -> Option<&Path> {
        self.iscc_path.as_deref()
    }

    /// Returns the signing tool to use, if one was configured.
    ///
    /// The command-line/environment value wins over the config file.
    pub fn signtool_path(&self) -> Option<&Path> {
        self.signtool_path
            .as_deref()
            .or(self.config.signtool.as_deref())
    }

    /// Returns the signing certificate, if signing is configured.
    pub fn signing_cert(&self) -> Option<&Path> {
        self.config.signing_cert.as_deref()
    }

    /// Returns the timestamp server URL, if any.
    pub fn timestamp_url(&self) -> Option<&str> {
        self.config.timestamp_url.as_deref()
    }

    /// Returns the custom template path, if any.
    pub fn template(&self) -> Option<&Path> {
        self.template.as_deref()
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        config: Config,
        script_dir: PathBuf,
        run_iscc: bool,
        iscc_path: Option<PathBuf>,
        signtool_path: Option<PathBuf>,
        template: Option<PathBuf>,
    ) -> Self {
        Self {
            config,
            script_dir,
            run_iscc,
            iscc_path,
            signtool_path,
            template,
        }
    }
}
