//! TM Session Launcher Library
//!
//! Resolves a free-text name to a tmux session (running, predefined,
//! directory-derived or brand new) and hands the terminal over to tmux.

pub mod app;
pub mod cli;
pub mod config;
pub mod display;
pub mod exec;
pub mod session;
pub mod tmux;

use anyhow::Result;

/// Application result type for consistent error handling
pub type AppResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Initialize tracing subscriber for logging
///
/// Events go to stderr so they never interleave with listing output on stdout.
pub fn init_logging(level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("tm={}", level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
