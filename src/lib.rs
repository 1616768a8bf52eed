//! pmkit - Package Manager Kit
//!
//! Detects which JavaScript package manager (npm, yarn, pnpm, or bun) a
//! project uses and builds the right shell commands for running
//! `package.json` scripts and executing package binaries.
//!
//! # Features
//!
//! - **Detection**: environment hint first, lock files second, with the
//!   project's own manager reported alongside the active one
//! - **Command building**: plain shell strings or structured commands for
//!   both `run` scripts and `exec`/`dlx` invocations
//! - **Tool-aware**: yarn classic vs berry, script/keyword collisions,
//!   double-dash placement, scope stripping for exec
//! - **Testable**: all subprocess access goes through a small shell trait
//!
//! # Modules
//!
//! - [`commands`] - Run and exec command construction
//! - [`error`] - Error types and result helpers
//! - [`manager`] - Package manager detection and the facade type
//! - [`package`] - Installed-package queries
//! - [`shell`] - Subprocess execution
//! - [`workspace`] - Project root discovery
//!
//! # Example
//!
//! ```no_run
//! use pmkit::{detect_package_manager, CommandFormat, RunScriptOptions};
//!
//! // Detect the active package manager for the current directory
//! let detected = detect_package_manager().expect("detection failed");
//!
//! if let Some(pm) = detected {
//!     println!("Using {} {}", pm.kind(), pm.version());
//!
//!     // Build the shell command for a package.json script
//!     let options = RunScriptOptions {
//!         args: vec!["--watch".to_string()],
//!         format: CommandFormat::Short,
//!     };
//!     if let Some(command) = pm.run_script("dev", &options) {
//!         println!("$ {command}");
//!     }
//! }
//! ```

/// Run and exec command construction.
pub mod commands;

/// Error types and result helpers.
pub mod error;

/// Package manager detection and the facade type.
pub mod manager;

/// Installed-package queries.
pub mod package;

/// Subprocess execution.
pub mod shell;

/// Project root discovery.
pub mod workspace;

// Re-export commonly used types
pub use commands::{
    parse_exec_line, parse_script_line, CommandDescriptor, CommandFormat, CommandTarget,
    DownloadPreference, ExecLine, RunExecOptions, RunScriptOptions, ScriptLine,
};
pub use error::{PmkitError, Result};
pub use manager::{
    detect_package_manager, detect_package_manager_in, detect_package_manager_with,
    PackageManager, PackageManagerKind,
};
pub use package::PackageInfo;
pub use shell::{Shell, ShellOutput, SystemShell};
pub use workspace::{find_project_root, ProjectRoot};
