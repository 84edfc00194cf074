//! Template tree copying and marker-extension normalization.
//! The copier mirrors the template directory into the target, rendering
//! `.mustache` files through the engine and copying everything else
//! byte-for-byte. A second pass then strips the marker suffix from the
//! copied names.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

/// Reserved file-name suffix identifying template source files.
pub const TEMPLATE_MARKER: &str = ".mustache";

/// Returns true when the file name carries the template marker suffix.
pub fn is_template_file(filename: &str) -> bool {
    filename.ends_with(TEMPLATE_MARKER)
}

/// Ensures the target directory is safe to scaffold into.
///
/// # Errors
/// * `Error::TargetDirectoryExistsError` if the directory exists and
///   `force` is false
pub fn ensure_target_dir<P: AsRef<Path>>(target_dir: P, force: bool) -> Result<PathBuf> {
    let target_dir = target_dir.as_ref();
    if target_dir.exists() && !force {
        return Err(Error::TargetDirectoryExistsError {
            target_dir: target_dir.display().to_string(),
        });
    }
    Ok(target_dir.to_path_buf())
}

/// Recursively reproduces `template_dir` under `target_dir`.
///
/// Directories are created before their contents (walkdir yields parents
/// first). Files named with the marker suffix are rendered with `engine`
/// against `context` and written still bearing the marker; all other
/// files are copied verbatim. Any error aborts the remaining copy and
/// partial output is left in place.
pub fn copy_template_tree(
    template_dir: &Path,
    target_dir: &Path,
    context: &serde_json::Value,
    engine: &dyn TemplateRenderer,
) -> Result<()> {
    for entry in WalkDir::new(template_dir) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let path = entry.path();

        let relative_path = path
            .strip_prefix(template_dir)
            .map_err(|e| Error::IoError(io::Error::other(e)))?;
        if relative_path.as_os_str().is_empty() {
            fs::create_dir_all(target_dir)?;
            continue;
        }

        let target_path = target_dir.join(relative_path);

        if entry.file_type().is_dir() {
            debug!("Creating directory: {}", target_path.display());
            fs::create_dir_all(&target_path)?;
        } else if entry.file_type().is_file() {
            let filename = entry.file_name().to_string_lossy();
            if is_template_file(&filename) {
                debug!("Rendering file: {}", target_path.display());
                let content = fs::read_to_string(path)?;
                let rendered = engine.render(&content, context)?;
                fs::write(&target_path, rendered)?;
            } else {
                debug!("Copying file: {}", target_path.display());
                fs::copy(path, &target_path)?;
            }
        }
    }

    Ok(())
}

/// Strips the marker suffix from every entry name in the target tree.
///
/// Contents are never altered, only names. The walk is contents-first so
/// a marked directory is renamed after its children have been visited.
pub fn normalize_extensions(target_dir: &Path) -> Result<()> {
    for entry in WalkDir::new(target_dir).contents_first(true) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let filename = entry.file_name().to_string_lossy();

        if let Some(stripped) = filename.strip_suffix(TEMPLATE_MARKER) {
            let new_path = entry.path().with_file_name(stripped);
            debug!(
                "Renaming: {} -> {}",
                entry.path().display(),
                new_path.display()
            );
            fs::rename(entry.path(), new_path)?;
        }
    }

    Ok(())
}
