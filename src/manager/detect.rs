//! Package manager identification.
//!
//! Two signals, in priority order:
//! 1. The `npm_config_user_agent` environment variable a running package
//!    manager sets for its child processes.
//! 2. Lock-file detection at the nearest project root.
//!
//! The file-derived kind is kept alongside the effective one, so callers
//! can see when the two disagree. Neither signal being present is a normal
//! outcome, not an error.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::{PmkitError, Result};
use crate::shell::{Shell, SystemShell};
use crate::workspace::find_project_root;

use super::{PackageManager, PackageManagerKind};

/// Environment variable package managers set for their child processes.
///
/// The value looks like `"pnpm/7.14.2 npm/? node/v18.16.0 linux x64"`.
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Parse a user-agent value into a package manager kind.
///
/// Only the leading `<name>/<version>` token matters; an unrecognized or
/// missing name yields `None`.
pub fn kind_from_user_agent(user_agent: &str) -> Option<PackageManagerKind> {
    let first = user_agent.split_whitespace().next()?;
    let name = first.split('/').next()?;
    name.parse().ok()
}

/// Pick the kind whose lock file appears in the given file names.
///
/// Kinds are checked in [`PackageManagerKind::all`] order, so the first
/// match wins when several lock files coexist.
pub fn kind_from_lock_files(files: &[String]) -> Option<PackageManagerKind> {
    PackageManagerKind::all()
        .iter()
        .copied()
        .find(|kind| files.iter().any(|f| f == kind.lock_file()))
}

/// Detect the package manager governing the current directory.
///
/// Combines the [`USER_AGENT_ENV`] hint with lock-file detection starting
/// at the current directory. `Ok(None)` means neither signal was present.
///
/// # Errors
///
/// Returns an error if the current directory cannot be resolved, a
/// directory along the walk cannot be listed, or the version probe of the
/// detected tool fails.
pub fn detect_package_manager() -> Result<Option<PackageManager>> {
    let cwd = std::env::current_dir().map_err(|source| PmkitError::CurrentDir { source })?;
    detect_package_manager_in(&cwd)
}

/// Detect the package manager for a specific directory.
///
/// Reads [`USER_AGENT_ENV`] from the real environment and probes versions
/// through the system shell; use [`detect_package_manager_with`] to inject
/// both.
pub fn detect_package_manager_in(start_dir: &Path) -> Result<Option<PackageManager>> {
    let user_agent = std::env::var(USER_AGENT_ENV).ok();
    detect_package_manager_with(start_dir, user_agent.as_deref(), Arc::new(SystemShell::new()))
}

/// Detect the package manager with every input supplied by the caller.
///
/// # Arguments
///
/// * `start_dir` - Directory the lock-file search starts from
/// * `user_agent` - Value of the user-agent hint, if any
/// * `shell` - Shell used to probe the detected tool's version
///
/// # Errors
///
/// Returns an error if the lock-file search hits an unreadable directory
/// or the version probe fails.
pub fn detect_package_manager_with(
    start_dir: &Path,
    user_agent: Option<&str>,
    shell: Arc<dyn Shell>,
) -> Result<Option<PackageManager>> {
    let hinted = user_agent.and_then(kind_from_user_agent);
    let project = find_project_root(start_dir)?
        .as_ref()
        .and_then(|root| kind_from_lock_files(&root.files));

    let Some(kind) = hinted.or(project) else {
        debug!("no package manager signal found");
        return Ok(None);
    };
    debug!(%kind, from_user_agent = hinted.is_some(), "package manager detected");

    let version = fetch_version(kind, shell.as_ref())?;
    Ok(Some(PackageManager::assemble(
        kind, version, project, shell,
    )))
}

/// Ask the tool itself for its version.
fn fetch_version(kind: PackageManagerKind, shell: &dyn Shell) -> Result<String> {
    let command = format!("{} --version", kind.command_name());
    let output = shell.run(&command)?;
    if !output.success() {
        return Err(PmkitError::CommandFailed {
            command,
            status: output.status,
            stderr: output.stderr.trim().to_string(),
        });
    }
    Ok(output.stdout.trim().to_string())
}
