//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's
//! derive macros. It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Restcanary -- CRUD lifecycle canary for REST object services.
///
/// Use `restcanary <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "restcanary", version, about, long_about = None)]
pub struct Cli {
    /// Path to the restcanary.toml configuration file.
    #[arg(short, long, default_value = "restcanary.toml")]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text tables.
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the six lifecycle scenarios in order and report the verdict.
    Run(RunArgs),

    /// Fetch the object collection once, without running checks.
    List(ListArgs),

    /// Validate or display the configuration.
    Config(ConfigArgs),
}

// ---- run ----

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the target service base URL from the config file.
    #[arg(long)]
    pub base_url: Option<String>,
}

// ---- list ----

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Override the target service base URL from the config file.
    #[arg(long)]
    pub base_url: Option<String>,
}

// ---- config ----

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration subcommand actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration file and report any errors.
    Validate,

    /// Show the effective configuration (file + environment overrides).
    Show {
        /// Show only one section (general, service, lifecycle).
        #[arg(long)]
        section: Option<String>,
    },
}
