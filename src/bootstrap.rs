//! Repository bootstrap invocation.
//! Wraps the external helper that initializes version control and
//! creates the remote-hosted repository for a freshly scaffolded
//! project, without pushing any commits.

use std::io;
use std::path::Path;
use std::process::Command;

use log::debug;

use crate::config::Visibility;
use crate::constants::{BOOTSTRAP_COMMAND, BOOTSTRAP_COMMAND_URL};
use crate::error::{Error, Result};

/// Arguments handed to the bootstrap command.
#[derive(Debug)]
pub struct BootstrapRequest<'a> {
    /// Directory of the already-written scaffold
    pub project_dir: &'a Path,
    /// Repository name, normally the distribution name
    pub project_name: &'a str,
    pub visibility: Visibility,
    pub branch: &'a str,
    pub description: Option<&'a str>,
    pub org: Option<&'a str>,
}

/// Trait for repository bootstrap backends.
///
/// Kept narrow so tests can substitute a recording stub and never spawn
/// a real process.
pub trait Bootstrapper {
    /// Initializes version control and the remote repository for an
    /// existing project directory.
    fn bootstrap(&self, request: &BootstrapRequest) -> Result<()>;
}

/// Bootstrapper that shells out to the `shortgit` helper.
pub struct ShortgitBootstrapper;

impl ShortgitBootstrapper {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShortgitBootstrapper {
    fn default() -> Self {
        ShortgitBootstrapper::new()
    }
}

impl Bootstrapper for ShortgitBootstrapper {
    /// Runs `shortgit init` for the project directory and waits for it
    /// to complete.
    ///
    /// # Errors
    /// * `Error::Bootstrap` if the helper is not installed, cannot be
    ///   spawned, or exits with a non-zero status. Already-written
    ///   project files are never touched.
    fn bootstrap(&self, request: &BootstrapRequest) -> Result<()> {
        let mut command = Command::new(BOOTSTRAP_COMMAND);
        command
            .arg("init")
            .arg(request.project_dir)
            .args(["--name", request.project_name])
            .args(["--visibility", request.visibility.as_str()])
            .args(["--branch", request.branch]);
        if let Some(description) = request.description {
            command.args(["--description", description]);
        }
        if let Some(org) = request.org {
            command.args(["--org", org]);
        }

        debug!("Running bootstrap command: {:?}", command);

        let output = command.output().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::Bootstrap {
                command: BOOTSTRAP_COMMAND,
                reason: format!(
                    "'{}' not found on PATH. Install it: {}",
                    BOOTSTRAP_COMMAND, BOOTSTRAP_COMMAND_URL
                ),
            },
            _ => Error::Bootstrap {
                command: BOOTSTRAP_COMMAND,
                reason: format!("failed to spawn '{}': {}", BOOTSTRAP_COMMAND, e),
            },
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Bootstrap {
                command: BOOTSTRAP_COMMAND,
                reason: format!(
                    "'{} init' exited with {}: {}",
                    BOOTSTRAP_COMMAND,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        Ok(())
    }
}
