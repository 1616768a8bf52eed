//! Custom error types for pmkit.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for pmkit.
///
/// Absences (no project root, no recognized package manager, package not
/// installed) are not errors; the public API models them as `Option`.
#[derive(Error, Debug)]
pub enum PmkitError {
    /// Failed to list a directory while searching for the project root.
    #[error("Failed to read directory '{path}': {source}")]
    DirRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Current working directory could not be resolved.
    #[error("Failed to resolve current directory: {source}")]
    CurrentDir {
        #[source]
        source: std::io::Error,
    },

    /// The shell could not start a subprocess.
    #[error("Failed to run '{command}': {source}")]
    ShellSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A subprocess that must succeed exited nonzero.
    #[error("Command '{command}' exited with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    /// Installed-package lookup failed or produced unreadable output.
    #[error("Failed to gather package info for '{name}'")]
    PackageInfoQuery { name: String },

    /// A free-form run-script line did not follow the `script -- args` grammar.
    #[error("Not a valid run-script line '{line}': {reason}")]
    MalformedScriptLine { line: String, reason: String },

    /// A free-form exec line named no command.
    #[error("Not a valid exec line '{line}': no command given")]
    MalformedExecLine { line: String },

    /// A free-form line could not be tokenized (unbalanced quoting).
    #[error("Failed to parse command line: {0}")]
    CommandLineParse(#[from] shell_words::ParseError),
}

impl PmkitError {
    /// Create a package-info lookup error for the given package name.
    pub fn package_info(name: impl Into<String>) -> Self {
        PmkitError::PackageInfoQuery { name: name.into() }
    }

    /// Create a malformed run-script line error.
    pub fn malformed_script_line(line: impl Into<String>, reason: impl Into<String>) -> Self {
        PmkitError::MalformedScriptLine {
            line: line.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for pmkit operations.
pub type Result<T> = std::result::Result<T, PmkitError>;
