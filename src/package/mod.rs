//! Installed-package queries.
//!
//! Each package manager answers "is this package installed here, and at
//! what version?" through its own listing command and output shape; every
//! tool gets an isolated parser so captured outputs can be tested directly.

mod bun;
mod npm;
mod pnpm;
mod yarn;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::manager::PackageManagerKind;
use crate::shell::Shell;

/// Name and version of an installed package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    /// The package name, as asked for.
    pub name: String,
    /// The installed version.
    pub version: String,
}

/// Ask the tool's own listing command whether `name` is installed in the
/// current project. `Ok(None)` means not installed.
pub(crate) fn installed_package(
    kind: PackageManagerKind,
    yarn_classic: bool,
    shell: &dyn Shell,
    name: &str,
) -> Result<Option<PackageInfo>> {
    match kind {
        PackageManagerKind::Npm => npm::query(shell, name),
        PackageManagerKind::Pnpm => pnpm::query(shell, name),
        PackageManagerKind::Yarn if yarn_classic => yarn::query_classic(shell, name),
        PackageManagerKind::Yarn => yarn::query_berry(shell, name),
        PackageManagerKind::Bun => bun::query(shell, name),
    }
}
