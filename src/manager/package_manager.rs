//! The package manager handle.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::commands::{
    build_exec_command, build_script_command, parse_exec_line, parse_script_line,
    CommandDescriptor, CommandFormat, RunExecOptions, RunScriptOptions,
};
use crate::error::{PmkitError, Result};
use crate::package::{installed_package, PackageInfo};
use crate::shell::{Shell, SystemShell};

use super::keywords::cli_command_keywords;
use super::PackageManagerKind;

/// A package manager the caller can build commands for.
///
/// Immutable after construction; cloning is cheap and values can be shared
/// across threads. The version string decides the yarn classic/berry split,
/// which changes both the reserved-keyword set and exec behavior.
#[derive(Clone)]
pub struct PackageManager {
    kind: PackageManagerKind,
    version: String,
    project_kind: Option<PackageManagerKind>,
    yarn_classic: bool,
    keywords: BTreeSet<&'static str>,
    shell: Arc<dyn Shell>,
}

impl PackageManager {
    /// Create a handle for a known package manager, using the system shell.
    ///
    /// # Examples
    ///
    /// ```
    /// use pmkit::{PackageManager, PackageManagerKind};
    ///
    /// let pm = PackageManager::new(PackageManagerKind::Yarn, "1.22.19");
    /// assert!(pm.is_yarn_classic());
    ///
    /// let pm = PackageManager::new(PackageManagerKind::Yarn, "3.6.1");
    /// assert!(pm.is_yarn_berry());
    /// ```
    pub fn new(kind: PackageManagerKind, version: impl Into<String>) -> Self {
        Self::with_shell(kind, version, Arc::new(SystemShell::new()))
    }

    /// Create a handle that runs its queries through a custom [`Shell`].
    pub fn with_shell(
        kind: PackageManagerKind,
        version: impl Into<String>,
        shell: Arc<dyn Shell>,
    ) -> Self {
        Self::assemble(kind, version.into(), None, shell)
    }

    pub(crate) fn assemble(
        kind: PackageManagerKind,
        version: String,
        project_kind: Option<PackageManagerKind>,
        shell: Arc<dyn Shell>,
    ) -> Self {
        let yarn_classic = kind == PackageManagerKind::Yarn && version_major(&version) == Some(1);
        let keywords = cli_command_keywords(kind, yarn_classic);
        PackageManager {
            kind,
            version,
            project_kind,
            yarn_classic,
            keywords,
            shell,
        }
    }

    /// The effective package manager kind.
    pub fn kind(&self) -> PackageManagerKind {
        self.kind
    }

    /// The tool version, as reported by `<pm> --version`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The kind derived from the project's lock files, when detection saw
    /// one. May differ from [`kind`](Self::kind) when a user-agent hint won.
    pub fn project_package_manager(&self) -> Option<PackageManagerKind> {
        self.project_kind
    }

    /// Reserved CLI keywords for this tool and version.
    pub fn cli_command_keywords(&self) -> &BTreeSet<&'static str> {
        &self.keywords
    }

    /// Whether this is yarn 1.x.
    pub fn is_yarn_classic(&self) -> bool {
        self.yarn_classic
    }

    /// Whether this is yarn 2+ (berry).
    pub fn is_yarn_berry(&self) -> bool {
        self.kind == PackageManagerKind::Yarn && !self.yarn_classic
    }

    /// Build the command string that runs a manifest script.
    ///
    /// Returns `None` when `script` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pmkit::{PackageManager, PackageManagerKind, RunScriptOptions};
    ///
    /// let pm = PackageManager::new(PackageManagerKind::Npm, "8.11.0");
    /// let options = RunScriptOptions {
    ///     args: vec!["--fix".to_string()],
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     pm.run_script("my-script", &options).unwrap(),
    ///     "npm run my-script -- --fix"
    /// );
    /// ```
    pub fn run_script(&self, script: &str, options: &RunScriptOptions) -> Option<String> {
        self.run_script_command(script, options)
            .map(|command| command.to_string())
    }

    /// Structured form of [`run_script`](Self::run_script).
    pub fn run_script_command(
        &self,
        script: &str,
        options: &RunScriptOptions,
    ) -> Option<CommandDescriptor> {
        build_script_command(self, script, options)
    }

    /// Build the command string that executes a package binary.
    ///
    /// Returns `Ok(None)` when `command` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pmkit::{PackageManager, PackageManagerKind, RunExecOptions};
    ///
    /// let pm = PackageManager::new(PackageManagerKind::Pnpm, "7.14.2");
    /// let command = pm.run_exec("eslint", &RunExecOptions::default());
    /// assert_eq!(command.unwrap().unwrap(), "pnpm dlx eslint");
    /// ```
    ///
    /// # Errors
    ///
    /// With [`crate::DownloadPreference::PreferIfNeeded`], the
    /// installed-package lookup may fail; that failure is propagated.
    pub fn run_exec(&self, command: &str, options: &RunExecOptions) -> Result<Option<String>> {
        Ok(self
            .run_exec_command(command, options)?
            .map(|command| command.to_string()))
    }

    /// Structured form of [`run_exec`](Self::run_exec).
    pub fn run_exec_command(
        &self,
        command: &str,
        options: &RunExecOptions,
    ) -> Result<Option<CommandDescriptor>> {
        build_exec_command(self, command, options)
    }

    /// Build a run-script command from a free-form line.
    ///
    /// The line grammar is `<script> [-- <args>...]`; everything after the
    /// `--` token is handed to the script.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty line, for arguments not separated by
    /// `--`, and for unbalanced quoting.
    pub fn run_script_from_line(&self, line: &str, format: CommandFormat) -> Result<String> {
        let parsed = parse_script_line(line)?;
        let options = RunScriptOptions {
            args: parsed.args,
            format,
        };
        self.run_script(&parsed.script, &options)
            .ok_or_else(|| PmkitError::malformed_script_line(line, "no script name given"))
    }

    /// Build an exec command from a free-form line.
    ///
    /// The first token names the binary, the remaining tokens are its
    /// arguments. Uses the default exec options (short format,
    /// prefer-always download).
    ///
    /// # Errors
    ///
    /// Returns an error for an empty line or unbalanced quoting.
    pub fn run_exec_from_line(&self, line: &str) -> Result<String> {
        let parsed = parse_exec_line(line)?;
        let options = RunExecOptions {
            args: parsed.args,
            ..Default::default()
        };
        match self.run_exec(&parsed.command, &options)? {
            Some(command) => Ok(command),
            None => Err(PmkitError::MalformedExecLine {
                line: line.to_string(),
            }),
        }
    }

    /// Look up an installed package in the current project.
    ///
    /// Asks the package manager itself (`npm list`, `yarn info`,
    /// `pnpm list`, `bun pm ls`) and parses the answer. `Ok(None)` means
    /// the package is not installed.
    ///
    /// # Errors
    ///
    /// Returns [`PmkitError::PackageInfoQuery`] when the underlying command
    /// fails or its output cannot be parsed.
    pub fn package_info(&self, name: &str) -> Result<Option<PackageInfo>> {
        installed_package(self.kind, self.yarn_classic, self.shell.as_ref(), name)
    }
}

impl fmt::Debug for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackageManager")
            .field("kind", &self.kind)
            .field("version", &self.version)
            .field("project_package_manager", &self.project_kind)
            .finish_non_exhaustive()
    }
}

/// Leading component of a version string, if numeric.
fn version_major(version: &str) -> Option<u32> {
    version.split('.').next()?.trim().parse().ok()
}
