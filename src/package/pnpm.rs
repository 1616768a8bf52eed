//! pnpm installed-package lookup.

use regex::Regex;

use crate::error::{PmkitError, Result};
use crate::shell::Shell;

use super::PackageInfo;

const LIST_COMMAND: &str = "pnpm list --depth=0";

pub(super) fn query(shell: &dyn Shell, name: &str) -> Result<Option<PackageInfo>> {
    let output = shell
        .run(LIST_COMMAND)
        .map_err(|_| PmkitError::package_info(name))?;
    if !output.success() {
        return Err(PmkitError::package_info(name));
    }
    parse_list_output(&output.stdout, name)
}

/// Parse pnpm's textual listing, where an installed package shows up as a
/// `<name> <version>` line.
fn parse_list_output(stdout: &str, name: &str) -> Result<Option<PackageInfo>> {
    let pattern = Regex::new(&format!(r"(?im)^{}\s+(.*)$", regex::escape(name)))
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
