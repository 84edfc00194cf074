//! The options record and its resolution.
//! Options are assembled once from command-line arguments, interactive
//! answers and built-in defaults, then threaded through the pipeline as
//! an immutable value.

use serde::Serialize;

use crate::cli::Args;
use crate::error::Result;
use crate::locator::{ALLOWED_TEMPLATE_TYPES, DEFAULT_TEMPLATE_TYPE};
use crate::prompt::{ask_until_answered, Prompter};

/// Default author when the user leaves the prompt empty.
pub const DEFAULT_AUTHOR: &str = "";

/// Fully resolved scaffolding options.
///
/// The record is read-only input to rendering: the serialized form is
/// the flat data context template placeholders are looked up in.
#[derive(Debug, Clone, Serialize)]
pub struct Options {
    pub slug: String,
    pub title: String,
    pub author: String,
    #[serde(rename = "templateType")]
    pub template_type: String,
}

impl Options {
    /// Returns the flat key-value rendering context
    /// (`slug`, `title`, `author`, `templateType`).
    pub fn context(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Returns `s` with its first character uppercased ("my-theme" -> "My-theme").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Resolves the complete options record.
///
/// Sources in priority order: values set on the command line, interactive
/// answers, built-in defaults. The slug is mandatory and re-asked until a
/// non-empty answer arrives. A template type passed via `--template`
/// bypasses the choice prompt entirely; it is not validated here (the
/// locator falls back to the default type with a warning).
pub fn resolve_options(args: &Args, prompt: &dyn Prompter) -> Result<Options> {
    let slug = match &args.slug {
        Some(slug) if !slug.trim().is_empty() => slug.clone(),
        _ => ask_until_answered(prompt, "Theme slug", |answer| !answer.trim().is_empty())?,
    };

    let title = match &args.title {
        Some(title) => title.clone(),
        None => prompt.text("Theme title", Some(&capitalize(&slug)))?,
    };

    let author = match &args.author {
        Some(author) => author.clone(),
        None => prompt.text("Author", Some(DEFAULT_AUTHOR))?,
    };

    let template_type = match &args.template {
        Some(template) => template.clone(),
        None => {
            let default = ALLOWED_TEMPLATE_TYPES
                .iter()
                .position(|t| *t == DEFAULT_TEMPLATE_TYPE)
                .unwrap_or(0);
            prompt.select("Template type", &ALLOWED_TEMPLATE_TYPES, default)?
        }
    };

    Ok(Options { slug, title, author, template_type })
}
