//! CLI for the roster user-directory client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use roster_core::config;
use std::path::PathBuf;

use commands::{run_config, run_fetch, FetchArgs};

/// Top-level CLI for the roster user-directory client.
#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "roster: resilient user-directory fetch client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the user directory and render it.
    Fetch {
        /// Override the configured endpoint URL.
        #[arg(long, conflicts_with = "file")]
        url: Option<String>,

        /// Read a canned JSON file instead of the network.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the raw JSON payload instead of a table.
        #[arg(long)]
        json: bool,

        /// Override the retry budget (additional tries after the first).
        #[arg(long, value_name = "N", conflicts_with = "no_retry")]
        max_attempts: Option<u32>,

        /// Single attempt, no retries.
        #[arg(long)]
        no_retry: bool,

        /// Pretend the device is offline with this status description
        /// (exercises the connectivity gate).
        #[arg(long, value_name = "DESC")]
        offline: Option<String>,
    },

    /// Show the resolved config path and effective settings.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                url,
                file,
                json,
                max_attempts,
                no_retry,
                offline,
            } => {
                run_fetch(
                    &cfg,
                    FetchArgs {
                        url,
                        file,
                        json,
                        max_attempts,
                        no_retry,
                        offline,
                    },
                )
                .await?;
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
