use std::fs;
use std::path::Path;

use tempfile::TempDir;
use walkdir::WalkDir;

use themesmith::processor::{
    copy_template_tree, ensure_target_dir, is_template_file, normalize_extensions,
    TEMPLATE_MARKER,
};
use themesmith::renderer::MiniJinjaRenderer;

/// Lays out a small template tree with a verbatim file, two template
/// files and a nested part.
fn make_template_dir() -> TempDir {
    let template_dir = TempDir::new().unwrap();
    let root = template_dir.path();

    fs::write(root.join("theme.json"), "{\n\t\"version\": 2\n}\n").unwrap();
    fs::write(
        root.join("style.css.mustache"),
        "color: {{accentColor}};\nname: {{slug}};\n",
    )
    .unwrap();
    fs::create_dir(root.join("parts")).unwrap();
    fs::write(
        root.join("parts").join("header.html.mustache"),
        "<h1>{{title}}</h1>\n",
    )
    .unwrap();

    template_dir
}

fn context() -> serde_json::Value {
    serde_json::json!({
        "slug": "my-theme",
        "title": "My-theme",
        "author": "",
        "templateType": "plain",
    })
}

fn scaffold(template_dir: &Path, target_dir: &Path) {
    let engine = MiniJinjaRenderer::new();
    copy_template_tree(template_dir, target_dir, &context(), &engine).unwrap();
    normalize_extensions(target_dir).unwrap();
}

#[test]
fn test_is_template_file() {
    assert!(is_template_file("style.css.mustache"));
    assert!(is_template_file("package.json.mustache"));
    assert!(!is_template_file("style.css"));
    assert!(!is_template_file("style.mustache.css"));
}

#[test]
fn test_ensure_target_dir() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    // Non-existent directory is fine
    let new_dir = path.join("my-theme");
    assert!(ensure_target_dir(&new_dir, false).is_ok());

    // Existing directory without force is refused
    assert!(ensure_target_dir(path, false).is_err());

    // Existing directory with force is accepted
    assert!(ensure_target_dir(path, true).is_ok());
}

#[test]
fn test_pipeline_renders_and_strips_markers() {
    let template_dir = make_template_dir();
    let out = TempDir::new().unwrap();
    let target = out.path().join("my-theme");

    scaffold(template_dir.path(), &target);

    // Verbatim copy is byte-identical
    assert_eq!(
        fs::read(target.join("theme.json")).unwrap(),
        fs::read(template_dir.path().join("theme.json")).unwrap()
    );

    // Rendered files lost the marker and got their placeholders
    // substituted; missing keys became empty
    assert_eq!(
        fs::read_to_string(target.join("style.css")).unwrap(),
        "color: ;\nname: my-theme;\n"
    );
    assert_eq!(
        fs::read_to_string(target.join("parts").join("header.html")).unwrap(),
        "<h1>My-theme</h1>\n"
    );
}

#[test]
fn test_no_marker_suffix_survives_the_pipeline() {
    let template_dir = make_template_dir();
    let out = TempDir::new().unwrap();
    let target = out.path().join("my-theme");

    scaffold(template_dir.path(), &target);

    for entry in WalkDir::new(&target) {
        let entry = entry.unwrap();
        let name = entry.file_name().to_string_lossy().into_owned();
        assert!(
            !name.ends_with(TEMPLATE_MARKER),
            "{name} still carries the marker suffix"
        );
    }
}

#[test]
fn test_parent_directories_are_created_before_their_files() {
    let template_dir = TempDir::new().unwrap();
    let nested = template_dir.path().join("parts").join("sections");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("hero.html.mustache"), "{{title}}\n").unwrap();

    let out = TempDir::new().unwrap();
    let target = out.path().join("my-theme");
    scaffold(template_dir.path(), &target);

    assert!(target.join("parts").join("sections").is_dir());
    assert_eq!(
        fs::read_to_string(target.join("parts/sections/hero.html")).unwrap(),
        "My-theme\n"
    );
}

#[test]
fn test_copy_is_idempotent_in_content() {
    let template_dir = make_template_dir();
    let out = TempDir::new().unwrap();
    let first = out.path().join("first");
    let second = out.path().join("second");

    scaffold(template_dir.path(), &first);
    scaffold(template_dir.path(), &second);

    assert!(!dir_diff::is_different(&first, &second).unwrap());
}

#[test]
fn test_normalize_leaves_other_names_alone() {
    let out = TempDir::new().unwrap();
    let target = out.path().join("my-theme");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("kept.css"), "a\n").unwrap();
    fs::write(target.join("renamed.css.mustache"), "b\n").unwrap();

    normalize_extensions(&target).unwrap();

    assert!(target.join("kept.css").exists());
    assert!(target.join("renamed.css").exists());
    assert!(!target.join("renamed.css.mustache").exists());
    // Contents are untouched by the rename pass
    assert_eq!(fs::read_to_string(target.join("renamed.css")).unwrap(), "b\n");
}
