//! Common constants used throughout the Kiln application.

/// Default initial version for a new project
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Default minimum Python version constraint
pub const DEFAULT_PYTHON_VERSION: &str = "3.9";

/// Default branch handed to the bootstrap command
pub const DEFAULT_BRANCH: &str = "main";

/// Default author when none is provided
pub const DEFAULT_AUTHOR: &str = "Author Name";

/// External command used to initialize and host the repository
pub const BOOTSTRAP_COMMAND: &str = "shortgit";

/// Where to get the bootstrap command if it is not installed
pub const BOOTSTRAP_COMMAND_URL: &str = "https://github.com/ionmihai/shortgit";
