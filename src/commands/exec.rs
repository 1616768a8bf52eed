//! Exec command building.
//!
//! Picks between the downloading runners (`npx`, `bunx`, `dlx`) and the
//! installed-only forms (`exec`) per tool, download preference, and format,
//! then rewrites scoped names where the chosen form demands it.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::Result;
use crate::manager::{PackageManager, PackageManagerKind};

use super::descriptor::{CommandDescriptor, CommandTarget};
use super::options::{CommandFormat, DownloadPreference, RunExecOptions};

/// Build the command that executes `command`, or `Ok(None)` when the name
/// is empty.
///
/// # Errors
///
/// [`DownloadPreference::PreferIfNeeded`] consults the installed-package
/// query; its failures are propagated.
pub(crate) fn build_exec_command(
    pm: &PackageManager,
    command: &str,
    options: &RunExecOptions,
) -> Result<Option<CommandDescriptor>> {
    if command.is_empty() {
        return Ok(None);
    }

    let pm_keywords = resolve_pm_keywords(pm, command, options)?;
    let target = resolved_command_name(pm.kind(), &pm_keywords, command);
    let double_dashes = exec_args_need_double_dashes(pm.kind(), &pm_keywords);

    Ok(Some(CommandDescriptor::new(
        pm_keywords,
        CommandTarget::Binary(target),
        options.args.clone(),
        double_dashes,
    )))
}

/// Resolve the leading keywords for the exec form.
///
/// bun and npm switch on format alone; yarn classic has exactly one form;
/// yarn berry and pnpm switch on the download preference, asking the
/// project what is installed when the preference is conditional. The
/// installed-package query runs with the name as given, scope included.
fn resolve_pm_keywords(
    pm: &PackageManager,
    command: &str,
    options: &RunExecOptions,
) -> Result<Vec<String>> {
    let keywords: Vec<&str> = match pm.kind() {
        PackageManagerKind::Bun => match options.format {
            CommandFormat::Short => vec!["bunx"],
            CommandFormat::Full => vec!["bun", "x"],
        },
        PackageManagerKind::Npm => match options.format {
            CommandFormat::Short => vec!["npx"],
            CommandFormat::Full => vec!["npm", "exec"],
        },
        PackageManagerKind::Yarn if pm.is_yarn_classic() => vec!["yarn", "exec"],
        PackageManagerKind::Yarn | PackageManagerKind::Pnpm => {
            let name = pm.kind().command_name();
            match options.download {
                DownloadPreference::PreferAlways => vec![name, "dlx"],
                DownloadPreference::PreferNever => vec![name, "exec"],
                DownloadPreference::PreferIfNeeded => {
                    if pm.package_info(command)?.is_some() {
                        vec![name, "exec"]
                    } else {
                        vec![name, "dlx"]
                    }
                }
            }
        }
    };
    Ok(keywords.into_iter().map(String::from).collect())
}

/// yarn and pnpm `exec` call the installed binary by its bare name, so a
/// scoped package name loses its scope there. Every other form keeps the
/// name as given.
fn resolved_command_name(
    kind: PackageManagerKind,
    pm_keywords: &[String],
    command: &str,
) -> String {
    let applies = matches!(kind, PackageManagerKind::Yarn | PackageManagerKind::Pnpm)
        && pm_keywords.last().map(String::as_str) == Some("exec");
    if applies {
        unscope(command).to_string()
    } else {
        command.to_string()
    }
}

/// `@scope/name` -> `name`; anything else passes through.
fn unscope(command: &str) -> &str {
    static SCOPE: OnceLock<Regex> = OnceLock::new();
    let pattern = SCOPE.get_or_init(|| Regex::new(r"^@[^/]+/(.*)").expect("scope pattern is valid"));
    match pattern.captures(command) {
        Some(caps) => caps.get(1).map_or(command, |m| m.as_str()),
        None => command,
    }
}

/// Only `npm exec` and bun's runners separate arguments with `--`.
fn exec_args_need_double_dashes(kind: PackageManagerKind, pm_keywords: &[String]) -> bool {
    match kind {
        PackageManagerKind::Bun => true,
        PackageManagerKind::Npm => pm_keywords.iter().any(|k| k == "exec"),
        _ => false,
    }
}
