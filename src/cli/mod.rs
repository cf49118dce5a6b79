//! Command line interface for the installer bundler.

mod args;

pub use args::Args;

use crate::bundler::{Bundler, Config, SettingsBuilder, SignOutcome};
use crate::error::Result;
use anyhow::Context as _;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(args).await
}

/// Run the pipeline for already-parsed arguments.
///
/// The script is written to the current working directory.
pub async fn execute(args: Args) -> Result<i32> {
    args.validate()?;

    let config = Config::load(&args.config)?;
    let script_dir = std::env::current_dir().context("resolving the working directory")?;

    let settings = SettingsBuilder::new()
        .config(config)
        .script_dir(script_dir)
        .run_iscc(args.run_iscc)
        .iscc_path(args.iscc)
        .signtool_path(args.signtool)
        .template(args.template)
        .build()?;

    let report = Bundler::new(settings).bundle().await?;

    println!("Generated {}", report.script_path.display());

    match &report.sign {
        SignOutcome::Signed { path } => println!("Signed {}", path.display()),
        SignOutcome::Failed { path, code } => eprintln!(
            "Signing failed for {} (exit code {}); the installer is unsigned",
            path.display(),
            describe_code(*code)
        ),
        SignOutcome::Skipped => {}
    }

    Ok(0)
}

fn describe_code(code: Option<i32>) -> String {
    code.map_or_else(|| "none, terminated by signal".to_string(), |c| c.to_string())
}
