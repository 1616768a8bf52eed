//! Package manager kinds.

use serde::{Deserialize, Serialize};

/// Supported JavaScript package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerKind {
    /// Node Package Manager (npm)
    Npm,
    /// Yarn package manager (classic and berry)
    Yarn,
    /// pnpm - Fast, disk space efficient package manager
    Pnpm,
    /// Bun - Fast all-in-one JavaScript runtime
    Bun,
}

impl PackageManagerKind {
    /// Get the executable name for this package manager.
    pub fn command_name(&self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "npm",
            PackageManagerKind::Yarn => "yarn",
            PackageManagerKind::Pnpm => "pnpm",
            PackageManagerKind::Bun => "bun",
        }
    }

    /// Get the lock file name written by this package manager.
    pub fn lock_file(&self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "package-lock.json",
            PackageManagerKind::Yarn => "yarn.lock",
            PackageManagerKind::Pnpm => "pnpm-lock.yaml",
            PackageManagerKind::Bun => "bun.lockb",
        }
    }

    /// Get all supported package managers, in detection order.
    ///
    /// When several lock files coexist at the project root, the first kind
    /// in this order whose lock file is present wins.
    pub fn all() -> &'static [PackageManagerKind] {
        &[
            PackageManagerKind::Npm,
            PackageManagerKind::Yarn,
            PackageManagerKind::Pnpm,
            PackageManagerKind::Bun,
        ]
    }
}

impl std::fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command_name())
    }
}

impl std::str::FromStr for PackageManagerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(PackageManagerKind::Npm),
            "yarn" => Ok(PackageManagerKind::Yarn),
            "pnpm" => Ok(PackageManagerKind::Pnpm),
            "bun" => Ok(PackageManagerKind::Bun),
            _ => Err(format!(
                "Unknown package manager: '{s}'. Valid options are: npm, yarn, pnpm, bun"
            )),
        }
    }
}
