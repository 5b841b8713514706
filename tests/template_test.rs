use std::path::PathBuf;

use kiln::renderer::{MiniJinjaRenderer, TemplateRenderer};
use kiln::template::{TemplateRole, TemplateSet};

fn full_context() -> serde_json::Value {
    serde_json::json!({
        "project_name": "cool-tool",
        "import_name": "cool_tool",
        "author": "Jane Doe",
        "description": "A very cool tool",
        "version": "0.1.0",
        "python_version": "3.10",
        "year": 2024
    })
}

#[test]
fn test_builtin_set_has_all_roles() {
    let set = TemplateSet::builtin();
    assert_eq!(set.len(), TemplateRole::ALL.len());
    for role in TemplateRole::ALL {
        assert!(!set.body(role).is_empty());
    }
}

#[test]
fn test_target_paths() {
    assert_eq!(TemplateRole::License.target_path("cool_tool"), PathBuf::from("LICENSE"));
    assert_eq!(TemplateRole::Readme.target_path("cool_tool"), PathBuf::from("README.md"));
    assert_eq!(
        TemplateRole::Manifest.target_path("cool_tool"),
        PathBuf::from("pyproject.toml")
    );
    assert_eq!(TemplateRole::Ignore.target_path("cool_tool"), PathBuf::from(".gitignore"));
    assert_eq!(
        TemplateRole::PackageInit.target_path("cool_tool"),
        PathBuf::from("src/cool_tool/__init__.py")
    );
}

#[test]
fn test_every_role_renders_with_full_context() {
    // Guards against a bundled template referencing a field that
    // ProjectSpec does not provide
    let set = TemplateSet::builtin();
    let engine = MiniJinjaRenderer::new();
    let context = full_context();

    for (role, body) in set.iter() {
        let rendered = engine.render(body, &context);
        assert!(rendered.is_ok(), "role {:?} failed to render: {:?}", role, rendered.err());
    }
}

#[test]
fn test_license_renders_author_and_year() {
    let set = TemplateSet::builtin();
    let engine = MiniJinjaRenderer::new();

    let license = engine.render(set.body(TemplateRole::License), &full_context()).unwrap();
    assert!(license.contains("Copyright (c) 2024 Jane Doe"));
}

#[test]
fn test_manifest_declares_console_entry_point() {
    let set = TemplateSet::builtin();
    let engine = MiniJinjaRenderer::new();

    let manifest = engine.render(set.body(TemplateRole::Manifest), &full_context()).unwrap();
    assert!(manifest.contains(r#"name = "cool-tool""#));
    assert!(manifest.contains(r#"version = "0.1.0""#));
    assert!(manifest.contains(r#"description = "A very cool tool""#));
    assert!(manifest.contains(r#"requires-python = ">=3.10""#));
    assert!(manifest.contains("Jane Doe"));
    assert!(manifest.contains(r#"cool-tool = "cool_tool.cli:main""#));
}

#[test]
fn test_readme_documents_layout() {
    let set = TemplateSet::builtin();
    let engine = MiniJinjaRenderer::new();

    let readme = engine.render(set.body(TemplateRole::Readme), &full_context()).unwrap();
    assert!(readme.contains("# cool-tool"));
    assert!(readme.contains("import cool_tool"));
    assert!(readme.contains("Jane Doe"));
    assert!(readme.contains("2024"));
}

#[test]
fn test_static_roles_have_no_placeholders() {
    let set = TemplateSet::builtin();
    let engine = MiniJinjaRenderer::new();
    let empty = serde_json::json!({});

    // Static bodies render unchanged even against an empty context
    for role in [TemplateRole::Ignore, TemplateRole::PackageInit] {
        let body = set.body(role);
        assert_eq!(engine.render(body, &empty).unwrap(), body);
    }
}

#[test]
fn test_package_init_body() {
    let set = TemplateSet::builtin();
    assert_eq!(set.body(TemplateRole::PackageInit), "__all__ = []\n");
}
