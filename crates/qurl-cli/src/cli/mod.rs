//! CLI for qurl.

mod args;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qurl_core::config;

use args::{BuildArgs, VarArgs};
use commands::{run_build, run_decode, run_encode};

/// Top-level CLI for qurl.
#[derive(Debug, Parser)]
#[command(name = "qurl")]
#[command(about = "qurl: build request URLs and form-encoded query strings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build a full URL from protocol, host, port, path and variables.
    Build {
        #[command(flatten)]
        parts: BuildArgs,
        #[command(flatten)]
        vars: VarArgs,
    },

    /// Render variables as a query-string suffix.
    Encode {
        #[command(flatten)]
        vars: VarArgs,
    },

    /// Decode a query string (or URL) into one variable per line.
    Decode {
        /// Query string such as "?a=1&b", or a full URL.
        query: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Build { parts, vars } => run_build(&parts, &vars, &cfg)?,
            CliCommand::Encode { vars } => run_encode(&vars, &cfg)?,
            CliCommand::Decode { query } => run_decode(&query)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
