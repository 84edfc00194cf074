//! Error handling for the Themesmith application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

use crate::inform;

/// Custom error types for Themesmith operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),

    /// Represents errors that occur during interactive prompting
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents failures of the external post-scaffold commands
    #[error("Command '{command}' failed: {detail}.")]
    CommandError { command: String, detail: String },

    /// Returned when the target directory already exists and --force
    /// was not given
    #[error("'{target_dir}' already exists. Pass --force to scaffold into it anyway.")]
    TargetDirectoryExistsError { target_dir: String },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler: prints a generic error line, then the
/// underlying detail, and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    inform::error("There was an error while setting up the theme.");
    eprintln!("{err}");
    log::debug!("{err:?}");
    std::process::exit(1);
}
