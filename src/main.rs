//! Themesmith's main application entry point and orchestration logic.
//! Handles command-line argument parsing and runs the scaffolding
//! pipeline stage by stage.

use std::env;

use themesmith::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    inform,
    locator::{template_dir, templates_root},
    options::resolve_options,
    processor::{copy_template_tree, ensure_target_dir, normalize_extensions},
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    runner::{init_git_repo, install_dependencies},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the options record from arguments, prompts and defaults
/// 2. Resolves the bundled template directory for the chosen type
/// 3. Copies the template tree, rendering `.mustache` files
/// 4. Strips the marker suffix from the copied names
/// 5. Initializes git and installs dependencies in the target directory
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();

    let options = resolve_options(&args, &prompt)?;
    let target_dir = ensure_target_dir(env::current_dir()?.join(&options.slug), args.force)?;
    let template_dir = template_dir(&templates_root(), &options.template_type);
    let context = options.context();

    inform::info("Copying template files");
    copy_template_tree(&template_dir, &target_dir, &context, &engine)?;
    normalize_extensions(&target_dir)?;

    inform::info("Initializing git repo");
    init_git_repo(&target_dir)?;

    inform::info("Installing dependencies");
    install_dependencies(&target_dir)?;

    inform::success("Theme set-up done. Happy coding!");
    Ok(())
}
