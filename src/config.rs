//! Project configuration for Kiln.
//! This module builds the validated, immutable configuration of a single
//! invocation from parsed arguments plus derived defaults.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::cli::Args;
use crate::error::{Error, Result};

/// Remote repository visibility handed to the bootstrap command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated configuration of one scaffold invocation.
///
/// Serializes into the template rendering context. Fields that no
/// template may reference (bootstrap parameters) are skipped, so the
/// strict renderer rejects a template reaching for them.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSpec {
    /// Distribution name; also the root directory to create
    pub project_name: String,
    /// Identifier-safe package folder name under src/
    pub import_name: String,
    pub author: String,
    pub description: String,
    pub version: String,
    pub python_version: String,
    /// Calendar year, captured once at invocation start
    pub year: i32,
    #[serde(skip)]
    pub visibility: Visibility,
    #[serde(skip)]
    pub init_repo: bool,
    #[serde(skip)]
    pub branch: String,
    #[serde(skip)]
    pub org: Option<String>,
}

impl ProjectSpec {
    /// Builds the spec from parsed arguments and an explicitly captured
    /// year. Derivation only; validation happens in the materializer's
    /// preflight step.
    pub fn from_args(args: &Args, year: i32) -> Self {
        let import_name = match &args.import_name {
            Some(name) => name.clone(),
            None => normalize_import_name(&args.project_name),
        };

        Self {
            project_name: args.project_name.clone(),
            import_name,
            author: args.author.clone(),
            description: args.description.clone().unwrap_or_default(),
            version: args.version.clone(),
            python_version: args.python_version.clone(),
            year,
            visibility: if args.private { Visibility::Private } else { Visibility::Public },
            init_repo: !args.no_init,
            branch: args.branch.clone(),
            org: args.org.clone(),
        }
    }

    /// The template rendering context for this spec.
    pub fn context(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| Error::Validation(format!("cannot build template context: {}", e)))
    }
}

/// Derives the importable package name from a distribution name:
/// lower-cased, with `-`, `.` and spaces replaced by underscores.
pub fn normalize_import_name(project_name: &str) -> String {
    project_name
        .trim()
        .to_lowercase()
        .replace(['-', '.', ' '], "_")
}

/// Checks that a name is an identifier-like token: letters, digits and
/// underscores, not starting with a digit.
pub fn is_valid_import_name(name: &str) -> bool {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    let re = IDENTIFIER.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());
    re.is_match(name)
}
