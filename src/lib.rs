//! Kiln scaffolds a new Python package directory from a built-in template
//! set and optionally bootstraps a version-controlled, remote-hosted
//! repository for it via an external helper command.

/// External repository bootstrap invocation
pub mod bootstrap;

/// Command-line interface module for the Kiln application
pub mod cli;

/// Project configuration and derived defaults
/// Builds the validated ProjectSpec that drives rendering
pub mod config;

/// Common constants used throughout the application
pub mod constants;

/// Error types and handling for the Kiln application
pub mod error;

/// Logger initialization
pub mod logger;

/// Core scaffolding orchestration
/// Combines validation, rendering and filesystem writes
pub mod processor;

/// Template rendering engine
pub mod renderer;

/// Built-in template set and target layout
pub mod template;
