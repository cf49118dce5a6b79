//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Inno Setup installer script generator
#[derive(Parser, Debug)]
#[command(
    name = "inno_bundler",
    version,
    about = "Generate multi-component Inno Setup install scripts",
    long_about = "Renders <name>.iss in the current directory from a JSON product config.

Optionally compiles it with the Inno Setup compiler (-r) and signs the
resulting installer when the config names a signing_cert.

Usage:
  inno_bundler product.json
  inno_bundler product.json --run_iscc
  SIGNTOOL=C:\\Tools\\signtool.exe inno_bundler product.json -r

A failed signing run is reported but does not change the exit code."
)]
pub struct Args {
    /// Path to a config file to open
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Run the Inno Setup compiler on the generated script
    #[arg(short = 'r', long = "run_iscc")]
    pub run_iscc: bool,

    /// Inno Setup compiler executable (default: iscc on PATH)
    #[arg(long, env = "ISCC", value_name = "PATH")]
    pub iscc: Option<PathBuf>,

    /// Signing tool executable, overrides `signtool` in the config
    #[arg(long, env = "SIGNTOOL", value_name = "PATH")]
    pub signtool: Option<PathBuf>,

    /// Custom Handlebars template replacing the built-in script template
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), crate::error::CliError> {
        use crate::error::CliError;

        if !self.config.is_file() {
            return Err(CliError::ConfigNotFound {
                path: self.config.clone(),
            });
        }

        if let Some(template) = &self.template {
            if !template.is_file() {
                return Err(CliError::InvalidArguments {
                    reason: format!("template {} does not exist", template.display()),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_config_and_short_flag() {
        let args = Args::try_parse_from(["inno_bundler", "product.json", "-r"]).unwrap();
        assert_eq!(args.config, PathBuf::from("product.json"));
        assert!(args.run_iscc);
        assert!(args.template.is_none());
    }

    #[test]
    fn long_flag_keeps_underscore_spelling() {
        let args = Args::try_parse_from(["inno_bundler", "product.json", "--run_iscc"]).unwrap();
        assert!(args.run_iscc);
    }

    #[test]
    fn config_is_required() {
        assert!(Args::try_parse_from(["inno_bundler"]).is_err());
    }

    #[test]
    fn validate_rejects_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::try_parse_from([
            "inno_bundler".into(),
            dir.path().join("missing.json").into_os_string(),
        ])
        .unwrap();
        assert!(matches!(
            args.validate(),
            Err(crate::error::CliError::ConfigNotFound { .. })
        ));
    }
}
