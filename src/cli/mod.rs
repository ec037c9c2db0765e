//! Command Line Interface module
//!
//! Argument parsing for the `tm` binary.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "tm")]
#[command(about = "Attach to a tmux session, creating it if needed")]
#[command(
    long_about = "Resolves NAME to a running tmux session, a predefined session, a \
                  directory under one of the smart directories, or a new session in \
                  the current directory, then attaches to it."
)]
#[command(version)]
pub struct Cli {
    /// Session name, predefined alias or project directory name
    #[arg(required_unless_present = "list")]
    pub name: Option<String>,

    /// Configuration file path (defaults to ~/.config/tm/config.yaml)
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Dry-run mode: show the resolved session without starting tmux
    #[arg(long)]
    pub dry_run: bool,

    /// List running tmux sessions and exit
    #[arg(short, long, conflicts_with = "dry_run")]
    pub list: bool,

    /// Print the session list as JSON
    #[arg(long, requires = "list")]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Adjust log level based on the verbose flag or `TM_DEBUG`
    pub fn effective_log_level(&self, env_debug: bool) -> String {
        if self.verbose || env_debug {
            "debug".to_string()
        } else {
            self.log_level.clone()
        }
    }

    /// Check if we're running in dry-run mode
    pub fn is_dry_run_mode(&self) -> bool {
        self.dry_run
    }
}
