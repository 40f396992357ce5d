//! restcanary -- CRUD lifecycle canary CLI
//!
//! Parses arguments, assembles the effective configuration, initializes
//! logging, and dispatches to the command handlers. Every error path ends
//! in a documented exit code (see [`error::CliError::exit_code`]).

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use std::path::Path;

use clap::Parser;

use restcanary_core::config::{CanaryConfig, GeneralConfig};

use cli::{Cli, Commands};
use error::CliError;
use output::OutputWriter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        config: config_path,
        log_level,
        output,
        command,
    } = cli;
    let writer = OutputWriter::new(output);

    match command {
        Commands::Run(args) => {
            let config =
                effective_config(&config_path, log_level.as_deref(), args.base_url.as_deref())
                    .await?;
            logging::init_tracing(&config.general)?;
            commands::run::execute(&config, &writer).await
        }
        Commands::List(args) => {
            let config =
                effective_config(&config_path, log_level.as_deref(), args.base_url.as_deref())
                    .await?;
            logging::init_tracing(&config.general)?;
            commands::list::execute(&config, &writer).await
        }
        Commands::Config(args) => {
            // The config file itself is what this command diagnoses, so
            // logging comes up on defaults rather than on its contents.
            let mut general = GeneralConfig::default();
            if let Some(level) = log_level {
                general.log_level = level;
            }
            logging::init_tracing(&general)?;
            commands::config::execute(args, &config_path, &writer).await
        }
    }
}

/// Build the effective configuration for `run` and `list`.
///
/// Layering: file (defaults when the file is absent), then environment
/// overrides, then CLI flags. Validation runs last so flag values are
/// checked too.
async fn effective_config(
    path: &Path,
    log_level: Option<&str>,
    base_url: Option<&str>,
) -> Result<CanaryConfig, CliError> {
    let mut config = if path.exists() {
        CanaryConfig::load(path)
            .await
            .map_err(|e| CliError::Config(e.to_string()))?
    } else {
        let mut config = CanaryConfig::default();
        config.apply_env_overrides();
        config
    };

    if let Some(level) = log_level {
        config.general.log_level = level.to_owned();
    }
    if let Some(url) = base_url {
        config.service.base_url = url.to_owned();
    }
    config
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(config)
}
