//! Installer script template source.

use crate::bundler::error::{ErrorExt, Result};
use std::{borrow::Cow, path::Path};

/// Built-in Inno Setup script template.
pub const ISS_TEMPLATE: &str = include_str!("../../../../../templates/installer.iss.hbs");

/// Returns the custom template at `path`, or the built-in one.
pub async fn load_template(path: Option<&Path>) -> Result<Cow<'static, str>> {
    match path {
        Some(path) => {
            let source = tokio::fs::read_to_string(path)
                .await
                .fs_context("reading installer template", path)?;
            Ok(Cow::Owned(source))
        }
        None => Ok(Cow::Borrowed(ISS_TEMPLATE)),
    }
}
