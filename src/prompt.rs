//! User input and interaction handling.
//! Wraps dialoguer behind a small trait so the option resolver can be
//! tested with a scripted prompter.

use dialoguer::{Input, Select};

use crate::error::{Error, Result};

/// Trait for interactive prompting backends.
pub trait Prompter {
    /// Asks a free-text question. An empty answer yields `default` when
    /// one is given, otherwise the empty string.
    fn text(&self, message: &str, default: Option<&str>) -> Result<String>;

    /// Asks a single-choice question and returns the chosen item.
    fn select(&self, message: &str, choices: &[&str], default: usize) -> Result<String>;
}

/// Dialoguer-based implementation of [`Prompter`].
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, message: &str, default: Option<&str>) -> Result<String> {
        let input = Input::<String>::new().with_prompt(message);
        let input = match default {
            Some(default) => input.default(default.to_string()),
            None => input.allow_empty(true),
        };
        input.interact_text().map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, message: &str, choices: &[&str], default: usize) -> Result<String> {
        let selection = Select::new()
            .with_prompt(message)
            .items(choices)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))?;

        Ok(choices[selection].to_string())
    }
}

/// Keeps asking the same free-text question until the answer satisfies
/// `is_answered`. This is the only retry loop in the pipeline and it has
/// no attempt bound.
pub fn ask_until_answered(
    prompt: &dyn Prompter,
    message: &str,
    is_answered: impl Fn(&str) -> bool,
) -> Result<String> {
    loop {
        let answer = prompt.text(message, None)?;
        if is_answered(&answer) {
            return Ok(answer);
        }
    }
}
