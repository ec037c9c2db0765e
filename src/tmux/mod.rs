//! tmux integration module
//!
//! Typed tmux operations built on a [`CommandExecutor`]. The argument
//! vectors are fixed and order-sensitive:
//!
//! | operation       | arguments                                         | mode    |
//! |-----------------|---------------------------------------------------|---------|
//! | existence check | `has-session -t <name>`                           | capture |
//! | create          | `new-session -s <name> -c <directory>`            | replace |
//! | attach          | `attach-session -t <name>`                        | replace |
//! | list            | `list-sessions -F "#{session_name}:#{session_path}"` | capture |

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::exec::{CommandExecutor, ExecError};
use crate::session::Session;

/// Format string handed to `list-sessions`
pub const LIST_FORMAT: &str = "#{session_name}:#{session_path}";

/// Answers whether a session with a given name is running
pub trait SessionChecker {
    fn has_session(&self, name: &str) -> bool;
}

/// Gateway to the tmux binary
#[derive(Debug, Clone)]
pub struct TmuxGateway<E> {
    executor: E,
    tmux_path: PathBuf,
}

impl<E: CommandExecutor> TmuxGateway<E> {
    pub fn new(executor: E, tmux_path: impl Into<PathBuf>) -> Self {
        Self {
            executor,
            tmux_path: tmux_path.into(),
        }
    }

    /// Check whether a session exists. Any failure of the query counts as "no".
    pub fn has_session(&self, name: &str) -> bool {
        match self
            .executor
            .run_capture(&self.tmux_path, &args(["has-session", "-t", name]))
        {
            Ok(_) => true,
            Err(err) => {
                debug!(session = name, %err, "has-session reported no session");
                false
            }
        }
    }

    /// Start a new session rooted at the session's directory.
    ///
    /// This replaces the current process; it only returns on failure.
    pub fn create_session(&self, session: &Session) -> Result<(), ExecError> {
        let directory = session.directory().to_string_lossy();
        self.executor.run_replace(
            &self.tmux_path,
            &args(["new-session", "-s", session.name(), "-c", &*directory]),
        )
    }

    /// Attach to a running session, replacing the current process.
    pub fn attach_session(&self, session: &Session) -> Result<(), ExecError> {
        self.executor.run_replace(
            &self.tmux_path,
            &args(["attach-session", "-t", session.name()]),
        )
    }

    /// List running sessions in tmux's own order.
    ///
    /// Listing is informational: if tmux fails (no server running, for
    /// instance) the list is simply empty.
    pub fn list_sessions(&self) -> Vec<Session> {
        match self
            .executor
            .run_capture(&self.tmux_path, &args(["list-sessions", "-F", LIST_FORMAT]))
        {
            Ok(output) => parse_session_list(&String::from_utf8_lossy(&output)),
            Err(err) => {
                debug!(%err, "list-sessions failed, assuming no sessions");
                Vec::new()
            }
        }
    }
}

impl<E: CommandExecutor> SessionChecker for TmuxGateway<E> {
    fn has_session(&self, name: &str) -> bool {
        TmuxGateway::has_session(self, name)
    }
}

/// Parse `name:path` records, one per line.
///
/// Blank lines are ignored. A line without a `:` is logged and skipped
/// without affecting the other records. Only the first `:` separates the
/// fields, so paths containing colons survive.
pub fn parse_session_list(output: &str) -> Vec<Session> {
    output
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| match line.split_once(':') {
            Some((name, path)) => Some(Session::listed(name, path)),
            None => {
                warn!(line = index + 1, record = line, "malformed session record");
                None
            }
        })
        .collect()
}

fn args<const N: usize>(parts: [&str; N]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}
