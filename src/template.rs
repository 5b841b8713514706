//! Built-in template set and target layout for generated projects.
//! The template bodies are bundled into the binary at compile time and
//! never change during a run.

use std::path::PathBuf;

use indexmap::IndexMap;

/// Logical role of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateRole {
    License,
    Readme,
    Manifest,
    Ignore,
    PackageInit,
}

impl TemplateRole {
    /// All roles, in the order their files are written.
    pub const ALL: [TemplateRole; 5] = [
        TemplateRole::Manifest,
        TemplateRole::Readme,
        TemplateRole::License,
        TemplateRole::Ignore,
        TemplateRole::PackageInit,
    ];

    /// Path of the generated file relative to the project root.
    /// The package marker lands inside the importable package folder.
    pub fn target_path(&self, import_name: &str) -> PathBuf {
        match self {
            TemplateRole::License => PathBuf::from("LICENSE"),
            TemplateRole::Readme => PathBuf::from("README.md"),
            TemplateRole::Manifest => PathBuf::from("pyproject.toml"),
            TemplateRole::Ignore => PathBuf::from(".gitignore"),
            TemplateRole::PackageInit => {
                PathBuf::from("src").join(import_name).join("__init__.py")
            }
        }
    }
}

/// Immutable mapping from template role to template body.
///
/// Backed by an IndexMap so iteration order (and therefore the order in
/// which files are written) is fixed.
pub struct TemplateSet {
    entries: IndexMap<TemplateRole, &'static str>,
}

impl TemplateSet {
    /// The template set bundled with the binary.
    pub fn builtin() -> Self {
        let mut entries = IndexMap::new();
        entries.insert(TemplateRole::Manifest, include_str!("../templates/pyproject.toml.j2"));
        entries.insert(TemplateRole::Readme, include_str!("../templates/README.md.j2"));
        entries.insert(TemplateRole::License, include_str!("../templates/LICENSE.j2"));
        entries.insert(TemplateRole::Ignore, include_str!("../templates/gitignore.j2"));
        entries.insert(TemplateRole::PackageInit, include_str!("../templates/__init__.py.j2"));
        Self { entries }
    }

    /// The template body for a role.
    pub fn body(&self, role: TemplateRole) -> &'static str {
        // Every role is inserted in builtin(); the IndexMap is total.
        self.entries[&role]
    }

    /// Iterates roles and bodies in write order.
    pub fn iter(&self) -> impl Iterator<Item = (TemplateRole, &'static str)> + '_ {
        self.entries.iter().map(|(role, body)| (*role, *body))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        TemplateSet::builtin()
    }
}
