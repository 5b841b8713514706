//! Command-line interface implementation for Kiln.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};

use crate::constants::{
    DEFAULT_AUTHOR, DEFAULT_BRANCH, DEFAULT_PYTHON_VERSION, DEFAULT_VERSION,
};

/// Command-line arguments structure for Kiln.
///
/// clap's automatic version flag stays disabled here: `--version` is the
/// initial version of the generated project, not the version of kiln.
#[derive(Parser, Debug)]
#[command(author, about = "Kiln: scaffold a new Python package and bootstrap its repository", long_about = None)]
pub struct Args {
    /// Project (distribution) name; also the directory to create
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Author name used in LICENSE, README and the package manifest
    #[arg(short, long, default_value = DEFAULT_AUTHOR)]
    pub author: String,

    /// Short project description for the manifest and repository
    #[arg(short, long)]
    pub description: Option<String>,

    /// Importable package name (default: derived from PROJECT_NAME)
    #[arg(short, long)]
    pub import_name: Option<String>,

    /// Initial project version
    #[arg(long, default_value = DEFAULT_VERSION)]
    pub version: String,

    /// Minimum Python version constraint
    #[arg(short, long, default_value = DEFAULT_PYTHON_VERSION)]
    pub python_version: String,

    /// Create the remote repository as private
    #[arg(long)]
    pub private: bool,

    /// Default branch for the bootstrapped repository
    #[arg(short, long, default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Owner organization for the bootstrapped repository
    #[arg(long)]
    pub org: Option<String>,

    /// Only scaffold files; do not run the repository bootstrap command
    #[arg(long)]
    pub no_init: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
