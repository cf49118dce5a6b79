//! Inno Setup compiler location.

use crate::bundler::{
    builder::tool_detection::find_tool,
    error::{Error, Result},
};
use std::path::{Path, PathBuf};

const INSTALL_HINT: &str =
    "install Inno Setup 6 (https://jrsoftware.org/isinfo.php) or pass --iscc / set ISCC";

/// Get the Inno Setup command-line compiler.
///
/// An explicit path (from `--iscc` or `ISCC`) is used as given. Otherwise
/// `iscc` is looked up on `PATH`, then in the default Inno Setup 6 install
/// directories on Windows.
pub fn get_iscc(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return find_tool(path, INSTALL_HINT);
    }

    if let Ok(path) = find_tool(Path::new("iscc"), INSTALL_HINT) {
        return Ok(path);
    }

    default_install_locations()
        .into_iter()
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| Error::ToolNotFound {
            tool: "iscc".to_string(),
            hint: INSTALL_HINT.to_string(),
        })
}

/// Default per-machine install locations of `ISCC.exe`.
fn default_install_locations() -> Vec<PathBuf> {
    if !cfg!(windows) {
        return Vec::new();
    }

    ["ProgramFiles(x86)", "ProgramFiles"]
        .iter()
        .filter_map(|var| std::env::var_os(var))
        .map(|root| PathBuf::from(root).join("Inno Setup 6").join("ISCC.exe"))
        .collect()
}
