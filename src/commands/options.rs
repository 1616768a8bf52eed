//! Command building options.

use serde::{Deserialize, Serialize};

/// How much of a command to spell out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandFormat {
    /// The shortest valid spelling (`yarn build`, `npx eslint`).
    #[default]
    Short,
    /// The fully spelled out form (`yarn run build`, `npm exec eslint`).
    Full,
}

impl std::str::FromStr for CommandFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(CommandFormat::Short),
            "full" => Ok(CommandFormat::Full),
            _ => Err(format!(
                "Unknown command format: '{s}'. Valid options are: short, full"
            )),
        }
    }
}

/// Whether exec may download a missing package before running it.
///
/// Only yarn berry and pnpm act on this; the other tools have a single
/// exec form per format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DownloadPreference {
    /// Always use the downloading runner (`dlx`) where one exists.
    #[default]
    PreferAlways,
    /// Never download; run from the project's installed packages.
    PreferNever,
    /// Look the package up first; download only when it is missing.
    PreferIfNeeded,
}

impl std::str::FromStr for DownloadPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prefer-always" => Ok(DownloadPreference::PreferAlways),
            "prefer-never" => Ok(DownloadPreference::PreferNever),
            "prefer-if-needed" => Ok(DownloadPreference::PreferIfNeeded),
            _ => Err(format!(
                "Unknown download preference: '{s}'. Valid options are: \
                 prefer-always, prefer-never, prefer-if-needed"
            )),
        }
    }
}

/// Options for building a run-script command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunScriptOptions {
    /// Arguments handed through to the script.
    pub args: Vec<String>,
    /// Spelling of the command.
    pub format: CommandFormat,
}

/// Options for building an exec command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunExecOptions {
    /// Arguments handed through to the executed binary.
    pub args: Vec<String>,
    /// Spelling of the command; only npm and bun distinguish the two.
    pub format: CommandFormat,
    /// Download policy; only yarn berry and pnpm distinguish `dlx`/`exec`.
    pub download: DownloadPreference,
}
