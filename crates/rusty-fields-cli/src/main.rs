mod commands;
mod config;
mod context;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::check::{CheckKind, CheckOptions};
use crate::commands::file::FileKind;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::context::Context;

#[derive(Parser)]
#[command(name = "rfv")]
#[command(version, about = "Rusty-Fields CLI - field format checks and phone number parsing", long_about = None)]
struct Cli {
    /// Config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one format check; several values are checked as a list
    Check {
        /// What to check the value as
        kind: CheckKind,

        /// Value(s) to check; omit to test the empty case
        values: Vec<String>,

        #[command(flatten)]
        options: CheckOptions,
    },

    /// Check an upload's size and content type
    File {
        /// Upload category
        kind: FileKind,

        /// Size in bytes
        #[arg(long)]
        size: u64,

        /// Declared MIME type
        #[arg(long)]
        content_type: String,

        /// Field name used in messages
        #[arg(long, default_value = "File")]
        title: String,
    },

    /// Split a phone number into country code and national number
    Phone {
        /// Number in any formatting, e.g. "+1 (202) 555-0199"
        number: String,
    },

    /// List the loaded country codes
    Countries {
        /// Filter by name, name code, or calling code prefix
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Validate the fields described in a TOML file, first failure wins
    Batch {
        /// File with [[field]] entries
        path: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {:#}, using defaults", e);
        Config::default()
    });

    init_logging(cli.verbose, &config.output.log_level);
    tracing::debug!(config = ?cli.config, "Configuration loaded");

    let ctx = Context::from_config(&config, &cli.config, cli.json);

    let passed = match cli.command {
        Commands::Check { kind, values, options } => {
            commands::check::execute(&ctx, kind, &values, &options)?
        }
        Commands::File {
            kind,
            size,
            content_type,
            title,
        } => commands::file::execute(&ctx, kind, size, &content_type, &title)?,
        Commands::Phone { number } => commands::phone::execute(&ctx, &number)?,
        Commands::Countries { search } => commands::countries::execute(&ctx, search.as_deref())?,
        Commands::Batch { path } => commands::batch::execute(&ctx, &path)?,
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Install the stderr subscriber; `-v` flags override the configured level
fn init_logging(verbose: u8, configured: &str) {
    let level = match verbose {
        0 => configured.parse().unwrap_or(tracing::Level::WARN),
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
