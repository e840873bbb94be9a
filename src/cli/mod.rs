//! CLI module
//!
//! Command-line interface for the listing client. There are no
//! subcommands: every flag feeds the single listing run, overriding the
//! optional YAML config file.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
