//! Windows Inno Setup installer creation.
//!
//! Renders an Inno Setup script for a multi-component product, optionally
//! compiles it with `iscc`, and optionally signs the resulting executable.
//!
//! # Module Organization
//!
//! - `template` - Built-in script template and custom template loading
//! - `script` - Script rendering from the template with Handlebars
//! - `toolset` - Locating the `iscc` compiler
//! - `build` - `iscc` execution
//! - `utils` - Inno-specific template helpers and the script writer

mod build;
mod script;
mod template;
mod toolset;
mod utils;

pub use build::CompileOutcome;
pub use script::render_script;
pub use template::ISS_TEMPLATE;

use super::sign::{self, SignOutcome};
use crate::bundler::{error::Result, settings::Settings};
use std::path::PathBuf;

/// What one pipeline run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReport {
    /// The generated `<name>.iss` script.
    pub script_path: PathBuf,
    /// Expected location of the compiled installer.
    pub installer_path: PathBuf,
    pub compile: CompileOutcome,
    pub sign: SignOutcome,
}

/// Bundle project as an Inno Setup installer.
///
/// # Process
///
/// 1. Render the script template with the config and write `<name>.iss`
/// 2. Run `iscc` on the script if requested
/// 3. Sign `<output_dir>/<output_base_filename>.exe` if a certificate is configured
///
/// Steps run strictly in order; the script stays on disk whatever happens later.
pub async fn bundle_project(settings: &Settings) -> Result<BundleReport> {
    log::info!(
        "Building Inno Setup script for {} {}",
        settings.product_name(),
        settings.version_string()
    );

    let script_path = script::generate_iss_script(settings).await?;

    let compile = if settings.run_iscc() {
        let iscc = toolset::get_iscc(settings.iscc_path())?;
        build::run_iscc(&iscc, &script_path).await?
    } else {
        CompileOutcome::Skipped
    };

    let installer_path = settings.installer_path();
    let sign = if sign::should_sign(settings) {
        sign::sign_file(&installer_path, settings).await?
    } else {
        SignOutcome::Skipped
    };

    Ok(BundleReport {
        script_path,
        installer_path,
        compile,
        sign,
    })
}
