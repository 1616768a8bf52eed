//! Free-form command line parsing.
//!
//! A whole invocation arrives as one string, the way users type it after
//! `npm run` or `npx`, and gets split into a target and its arguments.

use crate::error::{PmkitError, Result};

/// A parsed `<script> [-- <args>...]` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// The manifest script name.
    pub script: String,
    /// Arguments found after the `--` separator.
    pub args: Vec<String>,
}

/// A parsed `<command> [<args>...]` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecLine {
    /// The binary to execute.
    pub command: String,
    /// The remaining tokens, verbatim.
    pub args: Vec<String>,
}

/// Parse a run-script line.
///
/// The first token is the script name; any following tokens must be
/// introduced by a literal `--`.
///
/// # Examples
///
/// ```
/// use pmkit::parse_script_line;
///
/// let line = parse_script_line("my-script -- ./out --esm").unwrap();
/// assert_eq!(line.script, "my-script");
/// assert_eq!(line.args, vec!["./out", "--esm"]);
/// ```
///
/// # Errors
///
/// Returns an error when the line is empty, when arguments appear without
/// the `--` separator, or when quoting is unbalanced.
pub fn parse_script_line(line: &str) -> Result<ScriptLine> {
    let mut tokens = shell_words::split(line)?.into_iter();

    let Some(script) = tokens.next() else {
        return Err(PmkitError::malformed_script_line(
            line,
            "no script name given",
        ));
    };

    let args: Vec<String> = match tokens.next() {
        None => Vec::new(),
        Some(separator) if separator == "--" => tokens.collect(),
        Some(_) => {
            return Err(PmkitError::malformed_script_line(
                line,
                "script arguments must be separated by '--'",
            ))
        }
    };

    Ok(ScriptLine { script, args })
}

/// Parse an exec line: the first token is the command, the rest are its
/// arguments.
///
/// # Errors
///
/// Returns an error when the line is empty or quoting is unbalanced.
pub fn parse_exec_line(line: &str) -> Result<ExecLine> {
    let mut tokens = shell_words::split(line)?.into_iter();

    let Some(command) = tokens.next() else {
        return Err(PmkitError::MalformedExecLine {
            line: line.to_string(),
        });
    };

    Ok(ExecLine {
        command,
        args: tokens.collect(),
    })
}
