//! Authenticode signing of the compiled installer.
//!
//! Signing runs when the config names a `signing_cert`. The tool location is
//! never hard-coded: `--signtool` / `SIGNTOOL` win over the config's
//! `signtool` field, which wins over `signtool` on `PATH`.

use crate::bundler::{
    builder::tool_detection::find_tool,
    error::{Error, Result},
    settings::Settings,
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

const DEFAULT_SIGNTOOL: &str = "signtool";
const INSTALL_HINT: &str = "install the Windows SDK signing tools, set `signtool` in the config, \
     or pass --signtool / set SIGNTOOL";

/// Result of the optional signing step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignOutcome {
    /// No `signing_cert` configured.
    Skipped,
    /// The signing tool exited successfully.
    Signed { path: PathBuf },
    /// The signing tool ran and exited non-zero. `None` when killed by a signal.
    Failed { path: PathBuf, code: Option<i32> },
}

/// Returns true when the config asks for a signed installer.
pub fn should_sign(settings: &Settings) -> bool {
    settings.signing_cert().is_some()
}

/// Builds the signing tool arguments: SHA-256 file digest, certificate file,
/// optional RFC 3161 timestamp, then the target.
pub fn sign_args(cert: &Path, timestamp_url: Option<&str>, target: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["sign".into(), "/fd".into(), "SHA256".into()];
    args.push("/f".into());
    args.push(cert.into());

    if let Some(url) = timestamp_url {
        args.extend([OsString::from("/tr"), url.into(), "/td".into(), "SHA256".into()]);
    }

    args.push(target.into());
    args
}

/// Sign `path` with the configured certificate and wait for the tool.
///
/// # Errors
/// [`Error::ToolNotFound`] / [`Error::CommandFailed`] if the tool cannot be
/// located or started. A non-zero exit is reported through
/// [`SignOutcome::Failed`], not as an error.
pub async fn sign_file(path: &Path, settings: &Settings) -> Result<SignOutcome> {
    let Some(cert) = settings.signing_cert() else {
        return Ok(SignOutcome::Skipped);
    };

    let tool = settings
        .signtool_path()
        .unwrap_or_else(|| Path::new(DEFAULT_SIGNTOOL));
    let tool = find_tool(tool, INSTALL_HINT)?;

    log::info!("Signing {} with {}", path.display(), cert.display());

    let status = tokio::process::Command::new(&tool)
        .args(sign_args(cert, settings.timestamp_url(), path))
        .status()
        .await
        .map_err(|e| Error::CommandFailed {
            command: tool.display().to_string(),
            error: e,
        })?;

    if !status.success() {
        log::error!(
            "{} exited with {:?} while signing {}",
            tool.display(),
            status.code(),
            path.display()
        );
        return Ok(SignOutcome::Failed {
            path: path.to_path_buf(),
            code: status.code(),
        });
    }

    log::info!("Signed {}", path.display());
    Ok(SignOutcome::Signed {
        path: path.to_path_buf(),
    })
}
