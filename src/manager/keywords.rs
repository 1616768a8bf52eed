//! Reserved CLI command keywords per package manager.
//!
//! A manifest script whose name collides with one of these keywords cannot
//! be invoked in the bare short form; the `run` keyword disambiguates.

use std::collections::BTreeSet;

use super::PackageManagerKind;

// source: https://docs.npmjs.com/cli/v10/commands
const NPM_KEYWORDS: &[&str] = &[
    "access",
    "adduser",
    "audit",
    "bugs",
    "cache",
    "ci",
    "completion",
    "config",
    "dedupe",
    "deprecate",
    "diff",
    "dist-tag",
    "docs",
    "doctor",
    "edit",
    "exec",
    "explain",
    "explore",
    "find-dupes",
    "fund",
    "help",
    "help-search",
    "hook",
    "init",
    "install",
    "install-ci-test",
    "install-test",
    "link",
    "login",
    "logout",
    "ls",
    "org",
    "outdated",
    "owner",
    "pack",
    "ping",
    "pkg",
    "prefix",
    "profile",
    "prune",
    "publish",
    "query",
    "rebuild",
    "repo",
    "restart",
    "root",
    "run",
    "run-script",
    "search",
    "shrinkwrap",
    "star",
    "stars",
    "start",
    "stop",
    "team",
    "test",
    "token",
    "uninstall",
    "unpublish",
    "unstar",
    "update",
    "version",
    "view",
    "whoami",
];

// source: https://classic.yarnpkg.com/lang/en/docs/cli/
const YARN_CLASSIC_KEYWORDS: &[&str] = &[
    "add",
    "audit",
    "autoclean",
    "bin",
    "cache",
    "check",
    "config",
    "create",
    "dedupe",
    "generate-lock-entry",
    "global",
    "help",
    "import",
    "info",
    "init",
    "install",
    "licenses",
    "link",
    "list",
    "lockfile",
    "login",
    "logout",
    "outdated",
    "owner",
    "pack",
    "policies",
    "prune",
    "publish",
    "remove",
    "run",
    "self-update",
    "tag",
    "team",
    "test",
    "unlink",
    "upgrade",
    "upgrade-interactive",
    "version",
    "versions",
    "why",
    "workspace",
    "workspaces",
];

// source: https://yarnpkg.com/cli
const YARN_BERRY_KEYWORDS: &[&str] = &[
    "add",
    "bin",
    "cache",
    "config",
    "dedupe",
    "dlx",
    "exec",
    "explain",
    "info",
    "init",
    "install",
    "link",
    "node",
    "npm",
    "pack",
    "patch",
    "patch-commit",
    "rebuild",
    "remove",
    "run",
    "set",
    "stage",
    "unlink",
    "unplug",
    "up",
    "why",
];

// source: https://pnpm.io/pnpm-cli
const PNPM_KEYWORDS: &[&str] = &[
    "add",
    "audit",
    "bin",
    "config",
    "create",
    "dedupe",
    "deploy",
    "dlx",
    "doctor",
    "env",
    "exec",
    "fetch",
    "import",
    "init",
    "install",
    "install-test",
    "licenses",
    "link",
    "list",
    "outdated",
    "pack",
    "patch",
    "patch-commit",
    "patch-remove",
    "prune",
    "publish",
    "rebuild",
    "remove",
    "root",
    "run",
    "server",
    "setup",
    "start",
    "store",
    "test",
    "unlink",
    "update",
    "why",
];

// source: https://bun.sh/docs
const BUN_KEYWORDS: &[&str] = &["add", "install", "link", "pm", "remove", "run", "test", "x"];

/// Build the reserved-keyword set for a package manager.
///
/// Only yarn needs the `yarn_classic` split: classic and berry ship
/// different command sets. The other tools are treated
/// version-independently.
pub fn cli_command_keywords(
    kind: PackageManagerKind,
    yarn_classic: bool,
) -> BTreeSet<&'static str> {
    let keywords = match kind {
        PackageManagerKind::Npm => NPM_KEYWORDS,
        PackageManagerKind::Yarn if yarn_classic => YARN_CLASSIC_KEYWORDS,
        PackageManagerKind::Yarn => YARN_BERRY_KEYWORDS,
        PackageManagerKind::Pnpm => PNPM_KEYWORDS,
        PackageManagerKind::Bun => BUN_KEYWORDS,
    };
    keywords.iter().copied().collect()
}
