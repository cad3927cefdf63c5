//! Molsearch CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use molsearch::cli::{commands, handle_error, Cli, Commands, ConfigCommands};
use molsearch::infrastructure::config::{ConfigLoader, ProcessEnv};
use molsearch::infrastructure::logging::{LogConfig, LoggerImpl};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        handle_error(&err, json);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Listing variables must not depend on them being well formed.
    if let Commands::Config(ConfigCommands::Env) = &cli.command {
        return commands::config::execute_env(&ProcessEnv, cli.json);
    }

    // Loaded once, before anything else; every later component borrows it.
    let config = ConfigLoader::load().context("failed to load configuration")?;

    let log_config = LogConfig {
        level: cli.log_level,
        format: cli.log_format.unwrap_or_default(),
        log_dir: cli.log_dir,
        rotation: cli.log_rotation,
        ..LogConfig::from_service(&config)
    };
    let _logger = LoggerImpl::init(&log_config)?;

    info!(
        vector_db = %config.vector_db_endpoint(),
        rel_db = %config.rel_db_endpoint(),
        collection = %config.default_collection,
        "configuration ready"
    );
    if config.uses_default_credentials() {
        warn!(
            user = %config.rel_db_user,
            "MySQL is using the built-in default credentials; set MYSQL_USER and MYSQL_PWD"
        );
    }

    match &cli.command {
        Commands::Config(command) => {
            commands::config::execute(command, &config, &ProcessEnv, cli.json)
        }
    }
}
