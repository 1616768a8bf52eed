//! Shell subprocess boundary.
//!
//! Every package-manager invocation (version probes, installed-package
//! listings) goes through the [`Shell`] trait, so embedders and tests can
//! substitute their own process runner for the default [`SystemShell`].

use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{PmkitError, Result};

/// Captured output of a finished shell command.
#[derive(Debug, Clone)]
pub struct ShellOutput {
    /// Everything the command wrote to stdout, decoded lossily as UTF-8.
    pub stdout: String,
    /// Everything the command wrote to stderr, decoded lossily as UTF-8.
    pub stderr: String,
    /// Exit status; -1 when the process was killed by a signal.
    pub status: i32,
}

impl ShellOutput {
    /// Check if the command exited successfully.
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Process boundary for package-manager invocations.
///
/// Implementations run a single command line to completion and capture its
/// output. They never interpret exit codes; the caller decides what nonzero
/// means for the command it issued.
pub trait Shell: Send + Sync {
    /// Run `command` to completion and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error only when the process cannot be started at all. A
    /// process that starts and exits nonzero is a normal [`ShellOutput`].
    fn run(&self, command: &str) -> Result<ShellOutput>;
}

/// [`Shell`] implementation backed by `std::process`.
///
/// The command line is split with shell-words rules (no actual shell is
/// involved) and the child inherits the full environment of the current
/// process, so hints like `npm_config_user_agent` reach the tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl SystemShell {
    /// Create a new system shell.
    pub fn new() -> Self {
        SystemShell
    }
}

impl Shell for SystemShell {
    fn run(&self, command: &str) -> Result<ShellOutput> {
        let parts = shell_words::split(command)?;
        let Some((program, args)) = parts.split_first() else {
            return Err(PmkitError::ShellSpawn {
                command: command.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
            });
        };

        debug!(command, "spawning subprocess");

        let output = Command::new(program)
            .args(args)
            .envs(std::env::vars())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| PmkitError::ShellSpawn {
                command: command.to_string(),
                source,
            })?;

        Ok(ShellOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code().unwrap_or(-1),
        })
    }
}
