//! Project root discovery.
//!
//! The root of a JavaScript project is the nearest ancestor directory that
//! holds both a `package.json` manifest and a recognized lock file.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PmkitError, Result};
use crate::manager::PackageManagerKind;

/// Manifest file present in every project root.
pub const MANIFEST_FILE: &str = "package.json";

/// A located project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    /// Directory that holds the manifest and at least one lock file.
    pub path: PathBuf,
    /// File names present in that directory.
    pub files: Vec<String>,
}

/// Find the project root starting from the given directory.
///
/// Examines `start` and every ancestor in turn, returning the first
/// directory whose entries include `package.json` and at least one known
/// lock file. Reaching the filesystem root without a match is a normal
/// outcome, not an error.
///
/// # Errors
///
/// Returns an error if `start` does not exist or a directory along the way
/// cannot be listed.
pub fn find_project_root(start: &Path) -> Result<Option<ProjectRoot>> {
    let mut current = start
        .canonicalize()
        .map_err(|source| PmkitError::DirRead {
            path: start.to_path_buf(),
            source,
        })?;

    loop {
        let files = list_entries(&current)?;
        if is_project_root(&files) {
            debug!(path = %current.display(), "project root found");
            return Ok(Some(ProjectRoot {
                path: current,
                files,
            }));
        }

        current = match current.parent() {
            Some(parent) => parent.to_path_buf(),
            None => return Ok(None),
        };
    }
}

/// A root needs the manifest plus at least one lock file.
fn is_project_root(files: &[String]) -> bool {
    files.iter().any(|f| f == MANIFEST_FILE)
        && PackageManagerKind::all()
            .iter()
            .any(|kind| files.iter().any(|f| f == kind.lock_file()))
}

fn list_entries(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|source| PmkitError::DirRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PmkitError::DirRead {
            path: dir.to_path_buf(),
            source,
        })?;
        files.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(files)
}
