//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::infrastructure::logging::{LogFormat, RotationPolicy};

#[derive(Parser, Debug)]
#[command(name = "molsearch")]
#[command(about = "Molecular similarity search server configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "MOLSEARCH_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log format (json, pretty)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    /// Also write logs to rolling files in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation (daily, hourly, never)
    #[arg(long, global = true, default_value = "daily")]
    pub log_rotation: RotationPolicy,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect the configuration resolved from the environment
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the resolved configuration
    Show {
        /// Print the MySQL password instead of masking it
        #[arg(long)]
        show_secrets: bool,

        /// Print as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Verify that the environment yields a valid configuration
    Check,

    /// List the supported environment variables and their defaults
    Env,
}
