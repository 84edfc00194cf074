//! Colored console messages for user-facing output.
//! Purely presentational; none of these carry control-flow significance.

use owo_colors::{OwoColorize, Stream};

/// Display an info message.
pub fn info(msg: &str) {
    println!("{}", msg.if_supports_color(Stream::Stdout, |m| m.blue()));
}

/// Display a warning message.
pub fn warning(msg: &str) {
    println!(
        "{} {}",
        "WARNING!".if_supports_color(Stream::Stdout, |m| m.yellow()),
        msg
    );
}

/// Display an error message.
pub fn error(msg: &str) {
    eprintln!(
        "{} {}",
        "ERROR!".if_supports_color(Stream::Stderr, |m| m.on_red()),
        msg
    );
}

/// Display a success message.
pub fn success(msg: &str) {
    println!(
        "{} {}",
        "SUCCESS!".if_supports_color(Stream::Stdout, |m| m.on_green()),
        msg
    );
}
