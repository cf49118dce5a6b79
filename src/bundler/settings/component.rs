//! Installable components and their extra files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One independently selectable unit of the product.
///
/// Each component becomes an entry in the installer's component list and
/// contributes its own `[Files]` lines.
///
/// # Example
///
/// ```json
/// {
///   "name": "Editor",
///   "source": "build\\editor\\*",
///   "default_install_dir": "{app}\\editor",
///   "description": "The main editor application",
///   "extra_files": [
///     { "source": "redist\\vc_redist.x64.exe", "install_dir": "{tmp}" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Component name shown in the installer's component page.
    pub name: String,

    /// Source path (file or wildcard) on the build machine.
    pub source: String,

    /// Inno Setup destination directory for `source`.
    pub default_install_dir: PathBuf,

    /// Human-readable description shown next to the component.
    pub description: String,

    /// Additional files installed with this component.
    ///
    /// Default: None
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_files: Option<Vec<InstallFile>>,
}

impl Component {
    /// Returns the extra files, or an empty slice when none are configured.
    pub fn extra_files(&self) -> &[InstallFile] {
        self.extra_files.as_deref().unwrap_or_default()
    }
}

/// A single file installed to an explicit destination directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallFile {
    /// Source path on the build machine.
    pub source: String,

    /// Inno Setup destination directory, e.g. `{app}\plugins`.
    pub install_dir: String,
}
