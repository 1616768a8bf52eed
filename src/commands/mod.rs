//! Command construction for run scripts and package execution.
//!
//! Builders take a [`crate::PackageManager`] plus options and produce
//! [`CommandDescriptor`] values; the free-form parsers split whole lines
//! the way `npm run` and `npx` receive them.

mod descriptor;
mod exec;
mod line;
mod options;
mod script;

pub use descriptor::{CommandDescriptor, CommandTarget};
pub use line::{parse_exec_line, parse_script_line, ExecLine, ScriptLine};
pub use options::{CommandFormat, DownloadPreference, RunExecOptions, RunScriptOptions};

pub(crate) use exec::build_exec_command;
pub(crate) use script::build_script_command;
