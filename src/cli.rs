//! Command-line interface implementation for Themesmith.
//! Provides argument parsing using clap; every argument is optional and
//! anything missing is collected interactively by the option resolver.

use clap::Parser;

/// Command-line arguments structure for Themesmith.
#[derive(Parser, Debug)]
#[command(author, version, about = "Themesmith: WordPress block theme scaffolding tool", long_about = None)]
pub struct Args {
    /// Theme slug, used as the target directory name
    #[arg(value_name = "SLUG")]
    pub slug: Option<String>,

    /// Template type to scaffold from (prompted for when omitted)
    #[arg(short, long, value_name = "TYPE")]
    pub template: Option<String>,

    /// Theme title (defaults to a capitalized form of the slug)
    #[arg(long)]
    pub title: Option<String>,

    /// Theme author
    #[arg(long)]
    pub author: Option<String>,

    /// Scaffold into the target directory even if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
