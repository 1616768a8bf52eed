//! Run-script command building.

use crate::manager::{PackageManager, PackageManagerKind};

use super::descriptor::{CommandDescriptor, CommandTarget};
use super::options::{CommandFormat, RunScriptOptions};

/// Script every tool accepts without the `run` keyword.
const START_SCRIPT: &str = "start";

/// Build the command that runs `script`, or `None` when the name is empty.
pub(crate) fn build_script_command(
    pm: &PackageManager,
    script: &str,
    options: &RunScriptOptions,
) -> Option<CommandDescriptor> {
    if script.is_empty() {
        return None;
    }

    let mut pm_keywords = vec![pm.kind().command_name().to_string()];
    if includes_run_keyword(pm, script, options.format) {
        pm_keywords.push("run".to_string());
    }

    Some(CommandDescriptor::new(
        pm_keywords,
        CommandTarget::Script(script.to_string()),
        options.args.clone(),
        script_args_need_double_dashes(pm.kind()),
    ))
}

/// Whether the `run` keyword must appear before the script name.
///
/// `start` is aliased by every tool, npm has no bare script form at all,
/// and a script shadowed by a reserved CLI keyword needs `run` to
/// disambiguate.
fn includes_run_keyword(pm: &PackageManager, script: &str, format: CommandFormat) -> bool {
    if format == CommandFormat::Full {
        return true;
    }
    if script == START_SCRIPT {
        return false;
    }
    if pm.kind() == PackageManagerKind::Npm {
        return true;
    }
    pm.cli_command_keywords().contains(script)
}

/// npm and bun hand script arguments through behind a `--` separator.
fn script_args_need_double_dashes(kind: PackageManagerKind) -> bool {
    matches!(kind, PackageManagerKind::Npm | PackageManagerKind::Bun)
}
