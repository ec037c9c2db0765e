//! Subprocess execution module
//!
//! Two ways of running an external program: capture mode, which waits for
//! the child and hands its stdout back, and replace mode, which gives the
//! terminal to the child for good.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

/// Error types for subprocess execution
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("failed to start {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} exited with status {code:?}: {stderr}", .program.display())]
    NonZeroExit {
        program: PathBuf,
        code: Option<i32>,
        stderr: String,
    },
    #[error("failed to replace process with {}: {source}", .program.display())]
    Replace {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Runs external programs on behalf of the tmux gateway.
///
/// `args` never repeats the program name; the program path doubles as `argv[0]`.
pub trait CommandExecutor {
    /// Run `program` to completion and return its standard output.
    fn run_capture(&self, program: &Path, args: &[String]) -> Result<Vec<u8>, ExecError>;

    /// Replace the current process with `program`.
    ///
    /// The host implementation only comes back on failure.
    fn run_replace(&self, program: &Path, args: &[String]) -> Result<(), ExecError>;
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for &T {
    fn run_capture(&self, program: &Path, args: &[String]) -> Result<Vec<u8>, ExecError> {
        (**self).run_capture(program, args)
    }

    fn run_replace(&self, program: &Path, args: &[String]) -> Result<(), ExecError> {
        (**self).run_replace(program, args)
    }
}

/// Executor backed by the host operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for SystemExecutor {
    fn run_capture(&self, program: &Path, args: &[String]) -> Result<Vec<u8>, ExecError> {
        debug!(program = %program.display(), ?args, "running capture command");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| ExecError::Spawn {
                program: program.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExecError::NonZeroExit {
                program: program.to_path_buf(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }

    #[cfg(unix)]
    fn run_replace(&self, program: &Path, args: &[String]) -> Result<(), ExecError> {
        use std::os::unix::process::CommandExt;

        debug!(program = %program.display(), ?args, "replacing process");

        // exec only returns when the image could not be replaced
        let source = Command::new(program).args(args).exec();
        Err(ExecError::Replace {
            program: program.to_path_buf(),
            source,
        })
    }

    #[cfg(not(unix))]
    fn run_replace(&self, program: &Path, args: &[String]) -> Result<(), ExecError> {
        debug!(program = %program.display(), ?args, "running child in place of process");

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| ExecError::Replace {
                program: program.to_path_buf(),
                source,
            })?;

        std::process::exit(status.code().unwrap_or(1));
    }
}
