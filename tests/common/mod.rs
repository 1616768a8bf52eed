//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use pmkit::{PackageManagerKind, Result, Shell, ShellOutput};
use tempfile::TempDir;

pub const BASIC_MANIFEST: &str = r#"{
  "name": "fixture-app",
  "version": "1.0.0",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "start": "node server.js"
  }
}"#;

/// Create a temporary project directory containing a package.json.
pub fn create_project() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("package.json"), BASIC_MANIFEST)
        .expect("Failed to write package.json");
    dir
}

/// Create a temporary project with the lock file belonging to `kind`.
pub fn create_project_with_lockfile(kind: PackageManagerKind) -> TempDir {
    let dir = create_project();
    write_lockfile(dir.path(), kind);
    dir
}

/// Drop the lock file belonging to `kind` into `dir`.
pub fn write_lockfile(dir: &Path, kind: PackageManagerKind) {
    fs::write(dir.join(kind.lock_file()), "").expect("Failed to write lock file");
}

/// Canned-response shell. Maps exact command lines to prepared outputs;
/// unmatched commands succeed with empty output.
#[derive(Debug, Default)]
pub struct MockShell {
    responses: HashMap<String, ShellOutput>,
}

impl MockShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `command` with `stdout` and a zero exit status.
    pub fn on(mut self, command: &str, stdout: &str) -> Self {
        self.responses.insert(
            command.to_string(),
            ShellOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
                status: 0,
            },
        );
        self
    }

    /// Respond to `command` with a nonzero exit status.
    pub fn on_failure(mut self, command: &str, status: i32, stderr: &str) -> Self {
        self.responses.insert(
            command.to_string(),
            ShellOutput {
                stdout: String::new(),
                stderr: stderr.to_string(),
                status,
            },
        );
        self
    }
}

impl Shell for MockShell {
    fn run(&self, command: &str) -> Result<ShellOutput> {
        Ok(self
            .responses
            .get(command)
            .cloned()
            .unwrap_or_else(|| ShellOutput {
                stdout: String::new(),
                stderr: String::new(),
                status: 0,
            }))
    }
}

/// Mock shell prewired with version answers for all four tools.
pub fn versions_shell() -> MockShell {
    MockShell::new()
        .on("npm --version", "10.2.4\n")
        .on("yarn --version", "1.22.19\n")
        .on("pnpm --version", "8.15.4\n")
        .on("bun --version", "1.0.26\n")
}
