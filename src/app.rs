//! Application orchestration
//!
//! Resolve the requested name, create the session when tmux does not know
//! it yet, then attach.

use anyhow::{Context, Result};
use tracing::{debug, error};

use crate::config::Config;
use crate::display;
use crate::exec::CommandExecutor;
use crate::session::{Filesystem, Session, SessionResolver};
use crate::tmux::TmuxGateway;

/// The application and its dependencies
pub struct App<'a, E> {
    config: &'a Config,
    gateway: TmuxGateway<E>,
    fs: &'a dyn Filesystem,
}

impl<'a, E: CommandExecutor> App<'a, E> {
    pub fn new(config: &'a Config, executor: E, fs: &'a dyn Filesystem) -> Self {
        Self {
            config,
            gateway: TmuxGateway::new(executor, &config.tmux_path),
            fs,
        }
    }

    /// Decide which session `name` refers to
    pub fn resolve(&self, name: &str) -> Result<Session> {
        let resolver = SessionResolver::new(
            &self.gateway,
            self.fs,
            &self.config.sessions,
            &self.config.smart_directories,
        );

        let session = resolver
            .resolve(name)
            .with_context(|| format!("Failed to resolve session {name}"))?;

        debug!(
            "Session: {}, dir: {}, exists: {}",
            session.name(),
            session.directory().display(),
            session.exists()
        );
        Ok(session)
    }

    /// Resolve `name`, create the session if needed and attach to it.
    ///
    /// With the host executor a successful create or attach replaces the
    /// process, so this only returns when something went wrong.
    pub fn run(&self, name: &str) -> Result<()> {
        let session = self.resolve(name)?;

        if !session.exists() {
            debug!(
                "Creating new session: {} in {}",
                session.name(),
                session.directory().display()
            );
            if let Err(err) = self.gateway.create_session(&session) {
                error!(%err, session = session.name(), "failed to create session");
                display::print_error(&format!("Error creating session: {err}"));
            }
        }

        debug!("Attaching to session: {}", session.name());
        self.gateway
            .attach_session(&session)
            .with_context(|| format!("Failed to attach to session {}", session.name()))
    }

    /// Running tmux sessions
    pub fn list_sessions(&self) -> Vec<Session> {
        self.gateway.list_sessions()
    }
}
