//! Resolution of template-type identifiers to bundled template directories.
//! Templates ship next to the installed binary under `templates/<type>`;
//! an environment variable overrides the root for tests and packaging.

use std::env;
use std::path::{Path, PathBuf};

use crate::inform;

/// Template types recognized by the locator.
pub const ALLOWED_TEMPLATE_TYPES: [&str; 2] = ["plain", "tailwind"];

/// Fallback type used when an unrecognized identifier is given.
pub const DEFAULT_TEMPLATE_TYPE: &str = "plain";

/// Environment variable overriding the bundled templates root.
pub const TEMPLATES_DIR_ENV: &str = "THEMESMITH_TEMPLATES_DIR";

/// Returns the root directory containing the bundled template types.
///
/// Checked in order: the `THEMESMITH_TEMPLATES_DIR` override, a
/// `templates` directory next to the executable, and finally the crate
/// root (the development layout).
pub fn templates_root() -> PathBuf {
    if let Ok(dir) = env::var(TEMPLATES_DIR_ENV) {
        return PathBuf::from(dir);
    }

    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("templates"))
}

/// Returns the template directory for the given template type.
///
/// An identifier outside the allow-list emits one warning and resolves
/// to the default type instead; this function never fails.
pub fn template_dir(templates_root: &Path, template_type: &str) -> PathBuf {
    let template_type = if ALLOWED_TEMPLATE_TYPES.contains(&template_type) {
        template_type
    } else {
        inform::warning(&format!(
            "{template_type} is not a valid template type. Defaulting to {DEFAULT_TEMPLATE_TYPE}."
        ));
        DEFAULT_TEMPLATE_TYPE
    };

    templates_root.join(template_type)
}
