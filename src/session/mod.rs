//! Session resolution module
//!
//! Types describing the session we are about to join or create, the static
//! session entries coming from configuration, and the resolver that maps a
//! requested name onto one of them.

pub mod fs;
pub mod resolver;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use fs::{Filesystem, HostFilesystem, expand_home};
pub use resolver::SessionResolver;

/// A tmux session we want to either start or join
///
/// `directory` is empty for sessions that are already running: it only
/// matters when the session still has to be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    name: String,
    directory: PathBuf,
    exists: bool,
}

impl Session {
    /// A session that has to be created, rooted at `directory`
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            exists: false,
        }
    }

    /// A session tmux already knows about
    pub fn existing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directory: PathBuf::new(),
            exists: true,
        }
    }

    /// A running session as reported by tmux, including its path
    pub fn listed(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            exists: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn exists(&self) -> bool {
        self.exists
    }
}

/// A session with a fixed directory, reachable by its name or any alias
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredefinedEntry {
    /// Canonical session name
    pub name: String,

    /// Directory the session starts in, `~` allowed
    #[serde(rename = "dir")]
    pub directory: PathBuf,

    /// Alternative names resolving to this entry
    #[serde(default)]
    pub aliases: BTreeSet<String>,
}

impl PredefinedEntry {
    pub fn new(
        name: impl Into<String>,
        directory: impl Into<PathBuf>,
        aliases: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    /// Case-sensitive match against the canonical name or an alias
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(name)
    }
}

/// A directory whose children are candidate session directories
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SmartDirectoryRoot {
    pub root: PathBuf,
}

impl SmartDirectoryRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Errors that abort a resolution
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("could not determine the home directory")]
    HomeDirectoryUnavailable,
    #[error("could not read the current working directory: {0}")]
    CurrentDirectory(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_session_has_no_directory() {
        let session = Session::existing("work");
        assert_eq!(session.name(), "work");
        assert!(session.exists());
        assert_eq!(session.directory(), Path::new(""));
    }

    #[test]
    fn test_predefined_entry_matches_name_and_aliases() {
        let entry = PredefinedEntry::new("main", "/code/main", ["m", "ma"]);
        assert!(entry.matches("main"));
        assert!(entry.matches("m"));
        assert!(entry.matches("ma"));
        assert!(!entry.matches("Main"));
        assert!(!entry.matches("mai"));
    }

    #[test]
    fn test_predefined_entry_deserializes_from_yaml() {
        let yaml = "name: main\ndir: ~/code/main\naliases: [m]\n";
        let entry: PredefinedEntry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry, PredefinedEntry::new("main", "~/code/main", ["m"]));

        let yaml = "name: docs\ndir: /docs\n";
        let entry: PredefinedEntry = serde_yaml::from_str(yaml).unwrap();
        assert!(entry.aliases.is_empty());
    }
}
