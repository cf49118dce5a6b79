//! Product configuration loaded from JSON.

use super::{Component, identity};
use crate::bundler::error::{Error, ErrorExt, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Product description driving installer generation.
///
/// Loaded once from a JSON document and never mutated afterwards.
///
/// # Example
///
/// ```json
/// {
///   "name": "App",
///   "version_string": "1.0",
///   "publisher": "Acme",
///   "url": "https://acme.example",
///   "output_dir": "dist",
///   "components": [],
///   "languages": ["en", "de"],
///   "signing_cert": "certs\\acme.pfx"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Product name. Also names the generated `<name>.iss` script.
    pub name: String,

    /// Version string, used verbatim.
    pub version_string: String,

    /// Publisher shown in the installer and Add/Remove Programs.
    pub publisher: String,

    /// Product homepage.
    pub url: String,

    /// Directory the compiler writes the installer executable to.
    pub output_dir: String,

    /// Installable components, in display order.
    pub components: Vec<Component>,

    /// Installer language identifiers (`en`, `de`, or Inno language names).
    pub languages: Vec<String>,

    /// Certificate used to sign the compiled installer.
    ///
    /// Default: None (unsigned)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_cert: Option<PathBuf>,

    /// Signing tool executable.
    ///
    /// Default: None (`signtool` from `PATH`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signtool: Option<PathBuf>,

    /// RFC 3161 timestamp server passed to the signing tool.
    ///
    /// Default: None (no timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_url: Option<String>,
}

impl Config {
    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// [`Error::Fs`] if the file cannot be read, [`Error::Config`] if it is not
    /// valid JSON or misses a required field.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).fs_context("reading config", path)?;

        serde_json::from_str(&contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses a config from an in-memory JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the config back to pretty JSON. Derived fields are not included.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Stable identifier of this publisher/product/version.
    pub fn app_id(&self) -> Uuid {
        identity::app_id(&self.publisher, &self.name, &self.version_string)
    }

    /// Base filename of the compiled installer, without extension.
    pub fn output_base_filename(&self) -> String {
        identity::output_base_filename(&self.publisher, &self.name, &self.version_string)
    }

    /// File name of the generated installer script.
    pub fn script_file_name(&self) -> String {
        format!("{}.iss", self.name)
    }

    /// Expected path of the compiled installer executable.
    pub fn installer_path(&self) -> PathBuf {
        Path::new(&self.output_dir).join(format!("{}.exe", self.output_base_filename()))
    }
}
