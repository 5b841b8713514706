//! Core scaffolding orchestration for Kiln.
//! Validates the invocation, creates the directory tree, renders every
//! template role, writes the results and optionally invokes the
//! repository bootstrap command.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::bootstrap::{BootstrapRequest, Bootstrapper};
use crate::config::{is_valid_import_name, ProjectSpec};
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::template::TemplateSet;

/// Outcome of the optional repository bootstrap step.
#[derive(Debug)]
pub enum BootstrapOutcome {
    /// Bootstrap was disabled for this invocation
    Skipped,
    Completed,
    /// Bootstrap failed after the scaffold was written; the files are
    /// intact and the error carries the manual remedy
    Failed(Error),
}

/// Success summary of one materialize call.
#[derive(Debug)]
pub struct MaterializeReport {
    /// Root directory of the created scaffold
    pub project_dir: PathBuf,
    pub bootstrap: BootstrapOutcome,
}

/// Orchestrates the scaffold generation pipeline.
pub struct Materializer<'a> {
    engine: &'a dyn TemplateRenderer,
    bootstrapper: &'a dyn Bootstrapper,
    templates: TemplateSet,
}

impl<'a> Materializer<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, bootstrapper: &'a dyn Bootstrapper) -> Self {
        Self { engine, bootstrapper, templates: TemplateSet::builtin() }
    }

    /// Materializes the project described by `spec` inside `base_dir`.
    ///
    /// # Flow
    /// 1. Preflight validation, before any filesystem mutation
    /// 2. Directory creation (root and package folder)
    /// 3. Render each template role and write it create-exclusively
    /// 4. Optional repository bootstrap
    ///
    /// Steps 1-3 propagate the first fatal error. A bootstrap failure is
    /// recorded in the report instead; the written files stay as they
    /// are.
    pub fn materialize(&self, spec: &ProjectSpec, base_dir: &Path) -> Result<MaterializeReport> {
        let project_dir = self.preflight(spec, base_dir)?;

        self.create_directories(spec, &project_dir)?;
        self.render_pass(spec, &project_dir)?;

        let bootstrap = if spec.init_repo {
            match self.run_bootstrap(spec, &project_dir) {
                Ok(()) => BootstrapOutcome::Completed,
                Err(err) => {
                    warn!("Repository bootstrap failed; the scaffold is intact");
                    BootstrapOutcome::Failed(err)
                }
            }
        } else {
            debug!("Repository bootstrap disabled, skipping");
            BootstrapOutcome::Skipped
        };

        Ok(MaterializeReport { project_dir, bootstrap })
    }

    /// Validates the invocation and resolves the target directory.
    ///
    /// The tool never mutates pre-existing content: any entry already at
    /// the target path, file or directory, fails validation.
    fn preflight(&self, spec: &ProjectSpec, base_dir: &Path) -> Result<PathBuf> {
        if spec.project_name.trim().is_empty() {
            return Err(Error::Validation("project name must not be empty".to_string()));
        }
        if !is_valid_import_name(&spec.import_name) {
            return Err(Error::Validation(format!(
                "'{}' is not a valid import name: use letters, digits and underscores, \
                 and do not start with a digit",
                spec.import_name
            )));
        }

        let project_dir = base_dir.join(&spec.project_name);
        if project_dir.exists() {
            return Err(Error::Validation(format!(
                "target '{}' already exists; choose another project name or remove it first",
                project_dir.display()
            )));
        }

        Ok(project_dir)
    }

    /// Creates the project root and the nested package folder.
    fn create_directories(&self, spec: &ProjectSpec, project_dir: &Path) -> Result<()> {
        debug!("Creating project directory {}", project_dir.display());
        fs::create_dir(project_dir).map_err(|e| Error::filesystem(project_dir, e))?;

        let package_dir = project_dir.join("src").join(&spec.import_name);
        debug!("Creating package directory {}", package_dir.display());
        fs::create_dir_all(&package_dir).map_err(|e| Error::filesystem(&package_dir, e))?;

        Ok(())
    }

    /// Renders every template role and writes it to its target path.
    fn render_pass(&self, spec: &ProjectSpec, project_dir: &Path) -> Result<()> {
        let context = spec.context()?;

        for (role, body) in self.templates.iter() {
            let content = self.engine.render(body, &context)?;
            let target = project_dir.join(role.target_path(&spec.import_name));
            debug!("Writing file {}", target.display());
            write_new(&target, &content)?;
        }

        Ok(())
    }

    fn run_bootstrap(&self, spec: &ProjectSpec, project_dir: &Path) -> Result<()> {
        let request = BootstrapRequest {
            project_dir,
            project_name: &spec.project_name,
            visibility: spec.visibility,
            branch: &spec.branch,
            description: if spec.description.is_empty() { None } else { Some(&spec.description) },
            org: spec.org.as_deref(),
        };
        self.bootstrapper.bootstrap(&request)
    }
}

/// Writes `content` to a file that must not exist yet.
///
/// Create-exclusive semantics double as a race check: another process
/// creating the same file between preflight and this write surfaces as
/// a filesystem error.
fn write_new(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| Error::filesystem(path, e))?;
    file.write_all(content.as_bytes()).map_err(|e| Error::filesystem(path, e))
}
