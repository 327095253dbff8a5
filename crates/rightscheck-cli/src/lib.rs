//! Rightscheck CLI library.
//!
//! Command-line front end for licensing analysis: startup configuration,
//! argument parsing, command execution, and output formatting.

#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::{AppConfig, FileConfig, OutputFormat, Overrides};
pub use error::{CliError, Result};
pub use output::Formatter;
