/// Initializes the global logger.
///
/// `--verbose` lowers the default filter to debug; an explicit
/// `RUST_LOG` still takes precedence either way.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
