//! External tool detection.
//!
//! Resolves the installer compiler and signing tool to concrete executables
//! before they are spawned, so a missing tool is reported by name with an
//! install hint instead of a bare spawn error.

use crate::bundler::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolve `program` to an executable path.
///
/// Bare names are searched on `PATH`; anything containing a path separator is
/// checked as given (relative to the working directory).
pub fn find_tool(program: &Path, hint: &str) -> Result<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            log::debug!("Found {} at: {}", program.display(), path.display());
            Ok(path)
        }
        Err(e) => {
            log::debug!("{} not found: {}", program.display(), e);
            Err(Error::ToolNotFound {
                tool: program.display().to_string(),
                hint: hint.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_names_the_program() {
        let err = find_tool(Path::new("definitely-not-an-installed-tool"), "install it")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "definitely-not-an-installed-tool not found: install it"
        );
    }

    #[cfg(unix)]
    #[test]
    fn finds_program_on_path() {
        assert!(find_tool(Path::new("sh"), "").unwrap().is_absolute());
    }
}
