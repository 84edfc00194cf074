//! Themesmith scaffolds WordPress block themes from bundled templates.
//! It resolves theme options from command-line arguments and interactive
//! prompts, copies a template tree while rendering `.mustache` files,
//! then initializes git and installs the theme's npm dependencies.

/// Command-line interface module for the Themesmith application
pub mod cli;

/// Error types and handling for the Themesmith application
pub mod error;

/// Colored console messages (info, warning, error, success)
pub mod inform;

/// Resolution of template-type identifiers to bundled template directories
pub mod locator;

/// The immutable options record and its resolution from arguments,
/// prompts and defaults
pub mod options;

/// Template tree copying, rendering and marker-extension normalization
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// Post-scaffold external commands (git init, npm install)
pub mod runner;
