//! CLI for exercising the AppOpenURL validator outside the engine.

mod commands;

use anyhow::Result;
use aaou_core::config::{self, AaouConfig};
use aaou_core::protocol::Protocol;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use commands::{run_check, run_completions, run_config, run_header, run_open};

/// Top-level CLI for the AppOpenURL plugin harness.
#[derive(Debug, Parser)]
#[command(name = "aaou")]
#[command(about = "AGS AppOpenURL: validate and open script URLs from a terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate a URL fragment the way AppOpenURL does and open it in the default browser.
    Open {
        /// Scheme to prefix: https or http (default from config).
        #[arg(long, short)]
        protocol: Option<Protocol>,
        /// Host/path fragment, without a scheme (e.g. "example.com/page").
        url: String,
    },

    /// Validate and print the assembled URL without opening it.
    Check {
        /// Scheme to prefix: https or http (default from config).
        #[arg(long, short)]
        protocol: Option<Protocol>,
        /// Host/path fragment, without a scheme.
        url: String,
    },

    /// Print the script header the editor registers.
    Header,

    /// Show the config file path and effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    /// Commands that never look at the config file also never create it.
    pub fn reads_config(&self) -> bool {
        matches!(
            self,
            CliCommand::Open { .. } | CliCommand::Check { .. } | CliCommand::Config
        )
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = if cli.command.reads_config() {
            let cfg = config::load_or_init().unwrap_or_else(|e| {
                tracing::warn!("config unavailable ({e:#}), using defaults");
                AaouConfig::default()
            });
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        } else {
            AaouConfig::default()
        };

        let protocol_or_default = |p: Option<Protocol>| p.unwrap_or(cfg.default_protocol);

        match cli.command {
            CliCommand::Open { protocol, url } => {
                run_open(&cfg, protocol_or_default(protocol), &url)?
            }
            CliCommand::Check { protocol, url } => run_check(protocol_or_default(protocol), &url)?,
            CliCommand::Header => run_header(),
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Completions { shell } => run_completions(&mut Cli::command(), shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
