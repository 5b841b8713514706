//! Error handling for the Kiln application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for Kiln operations.
///
/// Each variant maps to its own process exit code so callers and scripts
/// can distinguish validation problems from filesystem or bootstrap
/// failures.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad or conflicting input, including a pre-existing target path.
    /// Always reported before any filesystem mutation.
    #[error("Validation error: {0}.")]
    Validation(String),

    /// A directory or file operation failed. Partial state already
    /// written is left on disk; there is no automatic cleanup.
    #[error("Filesystem error at '{path}': {source}.")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template referenced a field that is not part of the project
    /// configuration. Indicates a packaging defect, not user error.
    #[error("Template error: {0}.")]
    Template(#[from] minijinja::Error),

    /// The external repository-bootstrap command failed. The scaffold
    /// itself is intact at this point.
    #[error(
        "Bootstrap error: {reason}. The project files were written; \
         run '{command} init' in the project directory to finish repository setup."
    )]
    Bootstrap { command: &'static str, reason: String },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps an IO error with the path it occurred at.
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Filesystem { path: path.into(), source }
    }

    /// Process exit code for this error.
    ///
    /// | Variant    | Code |
    /// |------------|------|
    /// | Validation |  2   |
    /// | Filesystem |  3   |
    /// | Template   |  4   |
    /// | Bootstrap  |  5   |
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Validation(_) => 2,
            Error::Filesystem { .. } => 3,
            Error::Template(_) => 4,
            Error::Bootstrap { .. } => 5,
        }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with the error's
/// dedicated status code.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(err.exit_code());
}
