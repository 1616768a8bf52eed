//! Package manager identification and the manager handle.
//!
//! Detection combines the `npm_config_user_agent` hint with lock-file
//! detection at the nearest project root; the resulting [`PackageManager`]
//! carries everything command building needs.

mod detect;
mod keywords;
mod kind;
mod package_manager;

pub use detect::{
    detect_package_manager, detect_package_manager_in, detect_package_manager_with,
    kind_from_lock_files, kind_from_user_agent, USER_AGENT_ENV,
};
pub use keywords::cli_command_keywords;
pub use kind::PackageManagerKind;
pub use package_manager::PackageManager;
