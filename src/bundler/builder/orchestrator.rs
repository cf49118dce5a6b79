//! Main bundler orchestration.
//!
//! This module provides the [`Bundler`] that runs the installer pipeline
//! for one product configuration.

use crate::bundler::{
    BundleReport, CompileOutcome, Result, Settings, error::ErrorExt, platform::windows::inno,
};

/// Main bundler orchestrator.
///
/// Runs Load → Render → Compile → Sign for the settings it was built with.
/// Each run is independent; nothing is cached between calls.
///
/// # Examples
///
/// ```no_run
/// use inno_bundler::bundler::{Bundler, Config, SettingsBuilder};
///
/// # async fn example() -> inno_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .config(Config::load("product.json")?)
///     .run_iscc(true)
///     .build()?;
///
/// let report = Bundler::new(settings).bundle().await?;
/// println!("Script: {}", report.script_path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Renders the script and runs the optional compile and sign steps.
    ///
    /// # Errors
    ///
    /// Template, filesystem and tool start-up failures. Non-zero exits of the
    /// compiler or signing tool are reported in the returned [`BundleReport`].
    pub async fn bundle(&self) -> Result<BundleReport> {
        let report = inno::bundle_project(&self.settings).await?;

        if report.compile == CompileOutcome::Compiled {
            match tokio::fs::metadata(&report.installer_path)
                .await
                .fs_context("reading installer metadata", &report.installer_path)
            {
                Ok(metadata) => log::info!(
                    "✓ Created installer: {} ({} bytes)",
                    report.installer_path.display(),
                    metadata.len()
                ),
                Err(e) => log::warn!("{e}"),
            }
        }

        Ok(report)
    }
}
