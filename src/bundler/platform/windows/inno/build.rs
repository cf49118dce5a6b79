//! Inno Setup compilation.
//!
//! Compiles the generated script into the installer executable using `iscc`.

use crate::bundler::error::{Error, Result};
use std::path::Path;

/// Result of the optional compile step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileOutcome {
    /// `--run_iscc` was not given.
    Skipped,
    /// The compiler exited successfully.
    Compiled,
    /// The compiler ran and exited non-zero. `None` when killed by a signal.
    Failed { code: Option<i32> },
}

/// Run iscc on the generated script and wait for it to finish.
///
/// The script path is the only argument; compiler output goes straight to the
/// terminal.
///
/// # Errors
/// [`Error::CommandFailed`] if the compiler cannot be started. A non-zero exit
/// is reported through [`CompileOutcome::Failed`], not as an error.
pub async fn run_iscc(iscc: &Path, iss_path: &Path) -> Result<CompileOutcome> {
    log::info!("Running {} {}", iscc.display(), iss_path.display());

    let status = tokio::process::Command::new(iscc)
        .arg(iss_path)
        .status()
        .await
        .map_err(|e| Error::CommandFailed {
            command: iscc.display().to_string(),
            error: e,
        })?;

    if !status.success() {
        log::warn!(
            "iscc exited with {:?}; continuing without a verified installer",
            status.code()
        );
        return Ok(CompileOutcome::Failed {
            code: status.code(),
        });
    }

    Ok(CompileOutcome::Compiled)
}
