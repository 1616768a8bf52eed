//! yarn installed-package lookup, classic and berry.
//!
//! Both generations answer `yarn info <name> --json` but with different
//! JSON shapes and different failure conventions: classic reports problems
//! inside the payload, berry exits nonzero for packages it does not know.

use serde_json::Value;

use crate::error::{PmkitError, Result};
use crate::shell::Shell;

use super::PackageInfo;

fn info_command(name: &str) -> String {
    format!("yarn info {name} --json")
}

pub(super) fn query_classic(shell: &dyn Shell, name: &str) -> Result<Option<PackageInfo>> {
    let command = info_command(name);
    let output = shell
        .run(&command)
        .map_err(|_| PmkitError::package_info(name))?;
    if !output.success() {
        return Err(PmkitError::package_info(name));
    }
    parse_classic_output(&output.stdout, name)
}

/// Classic wraps the answer as `{"type":"inspect","data":{...}}`. Error
/// payloads carry a string `data` instead and read as not installed.
fn parse_classic_output(stdout: &str, name: &str) -> Result<Option<PackageInfo>> {
    let value: Value =
        serde_json::from_str(stdout).map_err(|_| PmkitError::package_info(name))?;

    let version = value
        .get("data")
        .and_then(|data| data.get("version"))
        .and_then(Value::as_str);

    Ok(version.map(|version| PackageInfo {
        name: name.to_string(),
        version: version.to_string(),
    }))
}

pub(super) fn query_berry(shell: &dyn Shell, name: &str) -> Result<Option<PackageInfo>> {
    let command = info_command(name);
    let output = shell
        .run(&command)
        .map_err(|_| PmkitError::package_info(name))?;
    if !output.success() {
        // berry exits nonzero when the package is not installed
        return Ok(None);
    }
    parse_berry_output(&output.stdout, name)
}

/// Berry prints `{"value":...,"children":{"Version":...}}` on success.
fn parse_berry_output(stdout: &str, name: &str) -> Result<Option<PackageInfo>> {
    let value: Value =
        serde_json::from_str(stdout).map_err(|_| PmkitError::package_info(name))?;

    let version = value
        .get("children")
        .and_then(|children| children.get("Version"))
        .and_then(Value::as_str);

    Ok(version.map(|version| PackageInfo {
        name: name.to_string(),
        version: version.to_string(),
    }))
}
