//! Kiln's main application entry point and orchestration logic.
//! Parses command-line arguments, builds the project configuration and
//! drives the materializer.

use chrono::Datelike;

use kiln::{
    bootstrap::ShortgitBootstrapper,
    cli::{get_args, Args},
    config::ProjectSpec,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    processor::{BootstrapOutcome, Materializer},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Captures the calendar year once
/// 2. Builds the ProjectSpec from arguments and derived defaults
/// 3. Materializes the scaffold
/// 4. Reports the result; a failed bootstrap still exits non-zero even
///    though the scaffold itself was written
fn run(args: Args) -> Result<()> {
    let year = chrono::Local::now().year();
    let spec = ProjectSpec::from_args(&args, year);

    let engine = MiniJinjaRenderer::new();
    let bootstrapper = ShortgitBootstrapper::new();
    let materializer = Materializer::new(&engine, &bootstrapper);

    let base_dir = std::env::current_dir().map_err(|e| Error::filesystem(".", e))?;
    let report = materializer.materialize(&spec, &base_dir)?;

    println!("Scaffolded {} in {}.", spec.project_name, report.project_dir.display());

    match report.bootstrap {
        BootstrapOutcome::Completed => {
            println!("Repository bootstrap completed.");
            Ok(())
        }
        BootstrapOutcome::Skipped => Ok(()),
        BootstrapOutcome::Failed(err) => Err(err),
    }
}
