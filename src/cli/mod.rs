//! Command-line interface
//!
//! Parses arguments, dispatches `config` subcommands and reports errors.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands, ConfigCommands};

use console::style;
use serde_json::json;

/// Print `err` and exit with status 1.
pub fn handle_error(err: &anyhow::Error, json: bool) -> ! {
    if json {
        eprintln!("{}", json!({ "status": "error", "error": format!("{err:#}") }));
    } else {
        eprintln!("{} {err:#}", style("Error:").red().bold());
    }
    std::process::exit(1)
}
