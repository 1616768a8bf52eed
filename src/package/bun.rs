//! bun installed-package lookup.

use regex::Regex;

use crate::error::{PmkitError, Result};
use crate::shell::Shell;

use super::PackageInfo;

const LIST_COMMAND: &str = "bun pm ls";

pub(super) fn query(shell: &dyn Shell, name: &str) -> Result<Option<PackageInfo>> {
    let output = shell
        .run(LIST_COMMAND)
        .map_err(|_| PmkitError::package_info(name))?;
    if !output.success() {
        return Err(PmkitError::package_info(name));
    }
    parse_ls_output(&output.stdout, name)
}

/// Parse bun's tree listing, where an installed package shows up as
/// `<name>@<version>` behind box-drawing glyphs.
fn parse_ls_output(stdout: &str, name: &str) -> Result<Option<PackageInfo>> {
    let pattern = Regex::new(&format!(
        r"(?im)^[├└─│\s]*{}@(.*)$",
        regex::escape(name)
    ))
    .map_err(|_| PmkitError::package_info(name))?;

    let version = pattern
        .captures(stdout)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|v| !v.is_empty());

    Ok(version.map(|version| PackageInfo {
        name: name.to_string(),
        version,
    }))
}
