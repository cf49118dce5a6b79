//! Inno Setup utility functions.
//!
//! Template helpers for Inno-specific syntax (escaped AppId braces,
//! identifiers, quoted parameters, directory constants, language message
//! files) and the script file writer.

use crate::bundler::error::{ErrorExt, Result};
use handlebars::{
    Context, Handlebars, Helper, HelperResult, JsonRender, Output, RenderContext,
    handlebars_helper,
};
use std::path::Path;
use tokio::io::AsyncWriteExt;

handlebars_helper!(inno_guid: |id: str| format_app_id(id));
handlebars_helper!(inno_ident: |text: str| to_identifier(text));
handlebars_helper!(inno_messages: |language: str| messages_file(language));
handlebars_helper!(inno_quote: |text: str| quote(text));

/// Registers every Inno helper on `handlebars`.
pub fn register_helpers(handlebars: &mut Handlebars<'_>) {
    handlebars.register_helper("inno_guid", Box::new(inno_guid));
    handlebars.register_helper("inno_ident", Box::new(inno_ident));
    handlebars.register_helper("inno_messages", Box::new(inno_messages));
    handlebars.register_helper("inno_quote", Box::new(inno_quote));
    handlebars.register_helper("inno_dir", Box::new(inno_dir));
}

/// `{{inno_dir "app" "plugins" name}}` renders `{app}\plugins\<name>`.
fn inno_dir(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let mut params = h.params().iter().map(|p| p.value().render());

    if let Some(constant) = params.next() {
        let mut path = format!("{{{constant}}}");
        for segment in params {
            path.push('\\');
            path.push_str(&segment);
        }
        out.write(&path)?;
    }

    Ok(())
}

/// Formats an application id the way Inno expects in `AppId=`.
///
/// A leading `{{` is Inno's escape for a literal `{`, so `abc` becomes `{{abc}`.
pub fn format_app_id(id: &str) -> String {
    format!("{{{{{id}}}")
}

/// Converts free text into an Inno `Name:` identifier.
///
/// - "Core Files" -> "core_files"
/// - "Plug-ins (x64)" -> "plug_ins__x64_"
pub fn to_identifier(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Escapes text for use inside a `"..."` section parameter.
///
/// Inno writes an embedded double quote as `""`.
pub fn quote(text: &str) -> String {
    text.replace('"', "\"\"")
}

/// Maps a language identifier to its Inno Setup messages file.
///
/// English uses the compiler's `Default.isl`. ISO 639-1 codes (optionally with
/// a region, `pt-BR`) of languages shipped with Inno Setup map to their file in
/// `Languages\`. Anything else is taken to be an Inno language name already.
pub fn messages_file(language: &str) -> String {
    let code = language.to_ascii_lowercase().replace('_', "-");
    let primary = code.split('-').next().unwrap_or_default();

    if matches!(primary, "en" | "english" | "default") {
        return "Default.isl".to_string();
    }

    let name = shipped_language(&code)
        .or_else(|| shipped_language(primary))
        .unwrap_or(language);

    format!("Languages\\{name}.isl")
}

/// Inno language name for the translations bundled with the compiler.
fn shipped_language(code: &str) -> Option<&'static str> {
    let name = match code {
        "pt-br" => "BrazilianPortuguese",
        "ca" => "Catalan",
        "co" => "Corsican",
        "cs" => "Czech",
        "da" => "Danish",
        "nl" => "Dutch",
        "fi" => "Finnish",
        "fr" => "French",
        "de" => "German",
        "he" => "Hebrew",
        "hu" => "Hungarian",
        "is" => "Icelandic",
        "it" => "Italian",
        "ja" => "Japanese",
        "ko" => "Korean",
        "nb" | "no" => "Norwegian",
        "pl" => "Polish",
        "pt" | "pt-pt" => "Portuguese",
        "ru" => "Russian",
        "sk" => "Slovak",
        "sl" => "Slovenian",
        "es" => "Spanish",
        "sv" => "Swedish",
        "tr" => "Turkish",
        "uk" => "Ukrainian",
        _ => return None,
    };
    Some(name)
}

/// Writes the rendered script with a UTF-8 BOM.
///
/// Without the BOM, iscc before 6.0 reads the script as ANSI and garbles
/// non-ASCII names and descriptions.
pub async fn write_utf8_bom(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .fs_context("creating script directory", parent)?;
    }

    let mut file = tokio::fs::File::create(path)
        .await
        .fs_context("creating installer script", path)?;

    // Write UTF-8 BOM: EF BB BF
    file.write_all(&[0xEF, 0xBB, 0xBF])
        .await
        .fs_context("writing UTF-8 BOM", path)?;
    file.write_all(content.as_bytes())
        .await
        .fs_context("writing installer script", path)?;
    file.flush()
        .await
        .fs_context("flushing installer script", path)?;

    Ok(())
}
