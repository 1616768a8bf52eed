//! npm installed-package lookup.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{PmkitError, Result};
use crate::shell::Shell;

use super::PackageInfo;

const LIST_COMMAND: &str = "npm list --depth=0 --json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListOutput {
    #[serde(default)]
    dependencies: HashMap<String, ListedDependency>,
    #[serde(default)]
    dev_dependencies: HashMap<String, ListedDependency>,
}

#[derive(Debug, Deserialize)]
struct ListedDependency {
    version: String,
}

pub(super) fn query(shell: &dyn Shell, name: &str) -> Result<Option<PackageInfo>> {
    let output = shell
        .run(LIST_COMMAND)
        .map_err(|_| PmkitError::package_info(name))?;
    if !output.success() {
        return Err(PmkitError::package_info(name));
    }
    parse_list_output(&output.stdout, name)
}

/// Parse `npm list --depth=0 --json`. Regular dependencies shadow dev
/// dependencies when a name appears in both maps.
fn parse_list_output(stdout: &str, name: &str) -> Result<Option<PackageInfo>> {
    let listed: ListOutput =
        serde_json::from_str(stdout).map_err(|_| PmkitError::package_info(name))?;

    let dependency = listed
        .dependencies
        .get(name)
        .or_else(|| listed.dev_dependencies.get(name));

    Ok(dependency.map(|dep| PackageInfo {
        name: name.to_string(),
        version: dep.version.clone(),
    }))
}
