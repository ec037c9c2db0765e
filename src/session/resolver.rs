//! Session resolver
//!
//! Maps a requested name onto a [`Session`]. Strategies run in a fixed
//! order and the first hit wins:
//!
//! 1. a running tmux session with that name
//! 2. a predefined session whose name or alias matches
//! 3. a `<root>/<name>` directory under one of the smart directory roots
//!
//! When nothing matches, a new session rooted at the current working
//! directory is returned, so resolution never reports "not found".

use std::path::{Component, Path};

use tracing::debug;

use super::fs::{Filesystem, expand_home};
use super::{PredefinedEntry, ResolveError, Session, SmartDirectoryRoot};
use crate::tmux::SessionChecker;

type Strategy = fn(&SessionResolver<'_>, &str) -> Result<Option<Session>, ResolveError>;

/// Lookup strategies in priority order
const STRATEGIES: [(&str, Strategy); 3] = [
    ("existing session", find_existing),
    ("predefined session", find_predefined),
    ("smart directory", find_smart_directory),
];

/// Resolves requested names against tmux, configuration and the filesystem
pub struct SessionResolver<'a> {
    checker: &'a dyn SessionChecker,
    fs: &'a dyn Filesystem,
    predefined: &'a [PredefinedEntry],
    smart_directories: &'a [SmartDirectoryRoot],
}

impl<'a> SessionResolver<'a> {
    pub fn new(
        checker: &'a dyn SessionChecker,
        fs: &'a dyn Filesystem,
        predefined: &'a [PredefinedEntry],
        smart_directories: &'a [SmartDirectoryRoot],
    ) -> Self {
        Self {
            checker,
            fs,
            predefined,
            smart_directories,
        }
    }

    /// Resolve `name` to the session that should be attached or created
    pub fn resolve(&self, name: &str) -> Result<Session, ResolveError> {
        for (label, strategy) in STRATEGIES {
            if let Some(session) = strategy(self, name)? {
                debug!(
                    strategy = label,
                    session = session.name(),
                    dir = %session.directory().display(),
                    exists = session.exists(),
                    "resolved session"
                );
                return Ok(session);
            }
        }

        self.fallback(name)
    }

    fn fallback(&self, name: &str) -> Result<Session, ResolveError> {
        let cwd = self
            .fs
            .current_dir()
            .map_err(ResolveError::CurrentDirectory)?;
        debug!(session = name, dir = %cwd.display(), "falling back to current directory");
        Ok(Session::new(name, cwd))
    }
}

fn find_existing(
    resolver: &SessionResolver<'_>,
    name: &str,
) -> Result<Option<Session>, ResolveError> {
    Ok(resolver
        .checker
        .has_session(name)
        .then(|| Session::existing(name)))
}

fn find_predefined(
    resolver: &SessionResolver<'_>,
    name: &str,
) -> Result<Option<Session>, ResolveError> {
    if resolver.predefined.is_empty() {
        return Ok(None);
    }

    for entry in resolver.predefined.iter().filter(|entry| entry.matches(name)) {
        // An alias of a running session joins it instead of spawning a twin.
        // The requested name itself was already checked.
        if entry.name != name {
            if let Some(session) = find_existing(resolver, &entry.name)? {
                return Ok(Some(session));
            }
        }

        let directory = expand_home(&entry.directory, resolver.fs)?;
        if resolver.fs.is_dir(&directory) {
            return Ok(Some(Session::new(entry.name.clone(), directory)));
        }

        debug!(
            session = %entry.name,
            dir = %directory.display(),
            "skipping predefined session, directory missing"
        );
    }

    Ok(None)
}

fn find_smart_directory(
    resolver: &SessionResolver<'_>,
    name: &str,
) -> Result<Option<Session>, ResolveError> {
    if resolver.smart_directories.is_empty() {
        return Ok(None);
    }

    // only a plain directory name can stay under its root
    let mut components = Path::new(name).components();
    if !matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) {
        debug!(session = name, "not a plain directory name, skipping smart directories");
        return Ok(None);
    }

    for smart in resolver.smart_directories {
        let directory = expand_home(&smart.root, resolver.fs)?.join(name);
        if resolver.fs.is_dir(&directory) {
            return Ok(Some(Session::new(name, directory)));
        }
    }

    Ok(None)
}
