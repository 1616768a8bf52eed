//! Integration tests for package manager detection.
//!
//! These tests drive detection end to end through the public API, with
//! temporary project directories and a canned shell for version probes.

mod common;

use std::fs;
use std::sync::Arc;

use pmkit::{detect_package_manager_with, PackageManagerKind, PmkitError};
use tempfile::TempDir;

use common::{create_project_with_lockfile, versions_shell, MockShell};

// ==================== Lock File Detection ====================

#[test]
fn test_detect_npm_from_lockfile() {
    let project = create_project_with_lockfile(PackageManagerKind::Npm);
    let pm = detect_package_manager_with(project.path(), None, Arc::new(versions_shell()))
        .unwrap()
        .unwrap();
    assert_eq!(pm.kind(), PackageManagerKind::Npm);
}

#[test]
fn test_detect_yarn_from_lockfile() {
    let project = create_project_with_lockfile(PackageManagerKind::Yarn);
    let pm = detect_package_manager_with(project.path(), None, Arc::new(versions_shell()))
        .unwrap()
        .unwrap();
    assert_eq!(pm.kind(), PackageManagerKind::Yarn);
}

#[test]
fn test_detect_pnpm_from_lockfile() {
    let project = create_project_with_lockfile(PackageManagerKind::Pnpm);
    let pm = detect_package_manager_with(project.path(), None, Arc::new(versions_shell()))
        .unwrap()
        .unwrap();
    assert_eq!(pm.kind(), PackageManagerKind::Pnpm);
}

#[test]
fn test_detect_bun_from_lockfile() {
    let project = create_project_with_lockfile(PackageManagerKind::Bun);
    let pm = detect_package_manager_with(project.path(), None, Arc::new(versions_shell()))
        .unwrap()
        .unwrap();
    assert_eq!(pm.kind(), PackageManagerKind::Bun);
}

#[test]
fn test_lockfile_without_manifest_is_not_a_project() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("yarn.lock"), "").unwrap();

    let detected =
        detect_package_manager_with(dir.path(), None, Arc::new(versions_shell())).unwrap();
    assert!(detected.is_none());
}

#[test]
fn test_detect_from_nested_directory() {
    let project = create_project_with_lockfile(PackageManagerKind::Pnpm);
    let nested = project.path().join("src").join("components");
    fs::create_dir_all(&nested).unwrap();

    let pm = detect_package_manager_with(&nested, None, Arc::new(versions_shell()))
        .unwrap()
        .unwrap();
    assert_eq!(pm.kind(), PackageManagerKind::Pnpm);
    assert_eq!(
        pm.project_package_manager(),
        Some(PackageManagerKind::Pnpm)
    );
}

#[test]
fn test_nearest_project_root_wins() {
    let outer = create_project_with_lockfile(PackageManagerKind::Npm);
    let inner = outer.path().join("packages").join("app");
    fs::create_dir_all(&inner).unwrap();
    fs::write(inner.join("package.json"), common::BASIC_MANIFEST).unwrap();
    fs::write(inner.join("yarn.lock"), "").unwrap();

    let pm = detect_package_manager_with(&inner, None, Arc::new(versions_shell()))
        .unwrap()
        .unwrap();
    assert_eq!(pm.kind(), PackageManagerKind::Yarn);
}

#[test]
fn test_multiple_lockfiles_resolve_in_stable_order() {
    let project = create_project_with_lockfile(PackageManagerKind::Bun);
    fs::write(project.path().join("package-lock.json"), "{}").unwrap();

    let pm = detect_package_manager_with(project.path(), None, Arc::new(versions_shell()))
        .unwrap()
        .unwrap();
    assert_eq!(pm.kind(), PackageManagerKind::Npm);
}

// ==================== User Agent Hint ====================

#[test]
fn test_user_agent_overrides_lockfile() {
    let project = create_project_with_lockfile(PackageManagerKind::Pnpm);

    let pm = detect_package_manager_with(
        project.path(),
        Some("yarn/1.22.19 npm/? node/v18.16.0 linux x64"),
        Arc::new(versions_shell()),
    )
    .unwrap()
    .unwrap();

    assert_eq!(pm.kind(), PackageManagerKind::Yarn);
    assert_eq!(
        pm.project_package_manager(),
        Some(PackageManagerKind::Pnpm)
    );
}

#[test]
fn test_user_agent_works_without_a_project() {
    let dir = TempDir::new().unwrap();

    let pm = detect_package_manager_with(
        dir.path(),
        Some("bun/1.0.26 npm/? node/v20.8.0 linux x64"),
        Arc::new(versions_shell()),
    )
    .unwrap()
    .unwrap();

    assert_eq!(pm.kind(), PackageManagerKind::Bun);
    assert_eq!(pm.project_package_manager(), None);
}

#[test]
fn test_unrecognized_user_agent_falls_back_to_lockfile() {
    let project = create_project_with_lockfile(PackageManagerKind::Npm);

    let pm = detect_package_manager_with(
        project.path(),
        Some("volta/1.1.1 node/v18.16.0"),
        Arc::new(versions_shell()),
    )
    .unwrap()
    .unwrap();

    assert_eq!(pm.kind(), PackageManagerKind::Npm);
}

#[test]
fn test_no_signal_detects_nothing() {
    let dir = TempDir::new().unwrap();
    let detected =
        detect_package_manager_with(dir.path(), None, Arc::new(versions_shell())).unwrap();
    assert!(detected.is_none());
}

#[test]
fn test_detection_is_stable_across_calls() {
    let project = create_project_with_lockfile(PackageManagerKind::Pnpm);

    let first = detect_package_manager_with(project.path(), None, Arc::new(versions_shell()))
        .unwrap()
        .unwrap();
    let second = detect_package_manager_with(project.path(), None, Arc::new(versions_shell()))
        .unwrap()
        .unwrap();

    assert_eq!(first.kind(), second.kind());
    assert_eq!(first.version(), second.version());
}

// ==================== Version Probing ====================

#[test]
fn test_version_comes_from_the_tool() {
    let project = create_project_with_lockfile(PackageManagerKind::Npm);
    let pm = detect_package_manager_with(project.path(), None, Arc::new(versions_shell()))
        .unwrap()
        .unwrap();
    assert_eq!(pm.version(), "10.2.4");
}

#[test]
fn test_yarn_generations_are_told_apart() {
    let project = create_project_with_lockfile(PackageManagerKind::Yarn);

    let classic = detect_package_manager_with(
        project.path(),
        None,
        Arc::new(MockShell::new().on("yarn --version", "1.22.19\n")),
    )
    .unwrap()
    .unwrap();
    assert!(classic.is_yarn_classic());

    let berry = detect_package_manager_with(
        project.path(),
        None,
        Arc::new(MockShell::new().on("yarn --version", "3.6.1\n")),
    )
    .unwrap()
    .unwrap();
    assert!(berry.is_yarn_berry());
}

#[test]
fn test_version_probe_failure_is_an_error() {
    let project = create_project_with_lockfile(PackageManagerKind::Pnpm);
    let shell = MockShell::new().on_failure("pnpm --version", 127, "pnpm: not found");

    let err = detect_package_manager_with(project.path(), None, Arc::new(shell)).unwrap_err();
    assert!(matches!(
        err,
        PmkitError::CommandFailed { status: 127, .. }
    ));
}

#[test]
fn test_detected_manager_builds_commands() {
    let project = create_project_with_lockfile(PackageManagerKind::Yarn);
    let pm = detect_package_manager_with(project.path(), None, Arc::new(versions_shell()))
        .unwrap()
        .unwrap();

    let command = pm.run_script("dev", &pmkit::RunScriptOptions::default());
    assert_eq!(command.as_deref(), Some("yarn dev"));
}
