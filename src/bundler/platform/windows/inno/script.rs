//! Inno Setup script generation.
//!
//! Renders the installer template with Handlebars. The template sees a single
//! `config` value holding every config field plus the derived `app_id` and
//! `output_base_filename`.

use super::{template, utils};
use crate::bundler::{
    error::{Error, Result},
    settings::{Config, Settings},
};
use handlebars::Handlebars;
use serde::Serialize;
use std::{collections::HashMap, path::PathBuf};

const TEMPLATE_NAME: &str = "installer.iss";

#[derive(Serialize)]
struct ScriptContext<'a> {
    config: ConfigView<'a>,
}

#[derive(Serialize)]
struct ConfigView<'a> {
    #[serde(flatten)]
    config: &'a Config,
    app_id: String,
    output_base_filename: String,
}

impl<'a> From<&'a Config> for ScriptContext<'a> {
    fn from(config: &'a Config) -> Self {
        Self {
            config: ConfigView {
                config,
                app_id: config.app_id().to_string(),
                output_base_filename: config.output_base_filename(),
            },
        }
    }
}

/// Rejects components whose names map to the same Inno identifier.
///
/// `Name:` entries must be unique, and every `[Files]` line points at its
/// component through that identifier.
fn check_component_identifiers(config: &Config) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for component in &config.components {
        let ident = utils::to_identifier(&component.name);
        if let Some(first) = seen.insert(ident.clone(), &component.name) {
            return Err(Error::GenericError(format!(
                "components \"{first}\" and \"{}\" both map to the installer name \"{ident}\"; rename one of them",
                component.name
            )));
        }
    }

    Ok(())
}

/// Renders `template_source` with `config`.
///
/// # Errors
/// [`Error::GenericError`] when two component names collide as Inno
/// identifiers, [`Error::Template`] / [`Error::Render`] for template failures.
pub fn render_script(template_source: &str, config: &Config) -> Result<String> {
    check_component_identifiers(config)?;

    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    utils::register_helpers(&mut handlebars);

    handlebars
        .register_template_string(TEMPLATE_NAME, template_source)
        .map_err(|e| Error::Template(Box::new(e)))?;

    Ok(handlebars.render(TEMPLATE_NAME, &ScriptContext::from(config))?)
}

/// Generate the installer script from the configured template.
///
/// Writes `<name>.iss` into the settings' script directory.
///
/// # Returns
/// Path to the generated script
pub async fn generate_iss_script(settings: &Settings) -> Result<PathBuf> {
    let source = template::load_template(settings.template()).await?;
    let content = render_script(&source, settings.config())?;

    let iss_path = settings.script_path();
    utils::write_utf8_bom(&iss_path, &content).await?;

    log::info!("Wrote installer script {}", iss_path.display());
    Ok(iss_path)
}
