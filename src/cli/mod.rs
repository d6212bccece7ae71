// CLI module for TransLingua
// Author: kelexine (https://github.com/kelexine)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TransLingua - AI-powered multilingual translation backed by Google Gemini
#[derive(Parser, Debug)]
#[command(name = "translingua", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.translingua/config.toml)
    #[arg(long, short = 'c', global = true, env = "TRANSLINGUA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the web UI and JSON API (default)
    Serve {
        /// Override the configured bind address
        #[arg(long)]
        host: Option<String>,

        /// Override the configured port
        #[arg(long, short = 'p')]
        port: Option<u16>,
    },

    /// Translate text once and print the result
    Translate {
        /// Source language display name, e.g. "English"
        #[arg(long = "from", short = 'f')]
        source_language: String,

        /// Target language display name, e.g. "Spanish"
        #[arg(long = "to", short = 't')]
        target_language: String,

        /// Text to translate; read from stdin when omitted
        text: Option<String>,
    },

    /// List Gemini models that support content generation
    Models,

    /// Send a test prompt to verify the API key and model
    Check,

    /// Print the effective configuration as TOML
    Config,
}

impl Args {
    /// The requested subcommand, `serve` when none was given.
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            host: None,
            port: None,
        })
    }
}
