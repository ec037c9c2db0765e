//! Filesystem capability used during resolution

use std::io;
use std::path::{Component, Path, PathBuf};

use super::ResolveError;

/// The parts of the filesystem the resolver looks at
pub trait Filesystem {
    fn is_dir(&self, path: &Path) -> bool;
    fn home_dir(&self) -> Option<PathBuf>;
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// The real filesystem of the running process
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFilesystem;

impl Filesystem for HostFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Replace a leading `~` component with the home directory.
///
/// Only `~` on its own or followed by a separator is expanded; `~user` and
/// paths without a tilde come back unchanged, and the home directory is only
/// looked up when it is needed.
pub fn expand_home(path: &Path, fs: &dyn Filesystem) -> Result<PathBuf, ResolveError> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = fs.home_dir().ok_or(ResolveError::HomeDirectoryUnavailable)?;
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                Ok(home)
            } else {
                Ok(home.join(rest))
            }
        }
        _ => Ok(path.to_path_buf()),
    }
}
