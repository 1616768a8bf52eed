//! Structured command representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a command invokes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandTarget {
    /// A manifest script name.
    Script(String),
    /// A package binary name.
    Binary(String),
}

impl CommandTarget {
    /// The script or binary name.
    pub fn name(&self) -> &str {
        match self {
            CommandTarget::Script(name) | CommandTarget::Binary(name) => name,
        }
    }
}

/// A fully resolved package manager command.
///
/// Immutable once built. Render it with `to_string()` for display or a
/// shell, or with [`to_argv`](Self::to_argv) for direct spawning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    pm_keywords: Vec<String>,
    target: CommandTarget,
    args: Vec<String>,
    args_need_double_dashes: bool,
}

impl CommandDescriptor {
    pub(crate) fn new(
        pm_keywords: Vec<String>,
        target: CommandTarget,
        args: Vec<String>,
        args_need_double_dashes: bool,
    ) -> Self {
        CommandDescriptor {
            pm_keywords,
            target,
            args,
            args_need_double_dashes,
        }
    }

    /// Leading package manager keywords, e.g. `["pnpm", "dlx"]` or `["npx"]`.
    pub fn pm_keywords(&self) -> &[String] {
        &self.pm_keywords
    }

    /// What the command invokes.
    pub fn target(&self) -> &CommandTarget {
        &self.target
    }

    /// The script name, when the target is a manifest script.
    pub fn script(&self) -> Option<&str> {
        match &self.target {
            CommandTarget::Script(name) => Some(name),
            CommandTarget::Binary(_) => None,
        }
    }

    /// The binary name, when the target is a package binary.
    pub fn binary(&self) -> Option<&str> {
        match &self.target {
            CommandTarget::Binary(name) => Some(name),
            CommandTarget::Script(_) => None,
        }
    }

    /// Arguments handed through verbatim; no quoting is applied.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether rendered arguments sit behind a `--` separator.
    pub fn args_need_double_dashes(&self) -> bool {
        self.args_need_double_dashes
    }

    /// Full token vector for spawning the command directly.
    ///
    /// The first element is the program, the rest are its arguments. The
    /// `--` separator is included when the tool requires one and arguments
    /// are present.
    pub fn to_argv(&self) -> Vec<String> {
        let mut argv = self.pm_keywords.clone();
        argv.push(self.target.name().to_string());
        if !self.args.is_empty() {
            if self.args_need_double_dashes {
                argv.push("--".to_string());
            }
            argv.extend(self.args.iter().cloned());
        }
        argv
    }
}

impl fmt::Display for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_argv().join(" "))
    }
}
