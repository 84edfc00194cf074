//! Post-scaffold external commands.
//! Runs `git init` and `npm install` inside the freshly scaffolded theme
//! directory, surfacing non-zero exits as errors.

use log::debug;
use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Runs an external command in `cwd`, capturing its output.
///
/// # Errors
/// * `Error::IoError` if the command cannot be spawned
/// * `Error::CommandError` carrying captured stderr on a non-zero exit
pub fn run_command(program: &str, args: &[&str], cwd: &Path) -> Result<()> {
    let command = format!("{} {}", program, args.join(" "));
    debug!("Running '{}' in {}", command, cwd.display());

    let output = Command::new(program).args(args).current_dir(cwd).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = match stderr.trim() {
            "" => output.status.to_string(),
            stderr => stderr.to_string(),
        };
        return Err(Error::CommandError { command, detail });
    }

    Ok(())
}

/// Initializes an empty git repository in the target directory.
pub fn init_git_repo(target_dir: &Path) -> Result<()> {
    run_command("git", &["init"], target_dir)
}

/// Installs the dependencies declared by the theme's package.json.
pub fn install_dependencies(target_dir: &Path) -> Result<()> {
    run_command("npm", &["install"], target_dir)
}
