//! End-to-end CLI tests.
//!
//! The validation paths run for real; the success path runs against stub
//! host tools on a private PATH so no git remote or debuild toolchain is
//! needed.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const EXIT_CONFIG: i32 = 64;

fn debpack() -> Command {
    Command::cargo_bin("debpack").unwrap()
}

/// Lay out a packaging metadata checkout with a parseable changelog.
fn write_pkg_metadata(dir: &Path) -> PathBuf {
    let pkg = dir.join("pkg");
    fs::create_dir_all(pkg.join("debian")).unwrap();
    fs::write(
        pkg.join("debian/changelog"),
        "demo (1.2.3-1) unstable; urgency=medium\n\n  * Initial release\n",
    )
    .unwrap();
    fs::write(pkg.join("debian/control"), "Source: demo\n").unwrap();
    pkg
}

/// Lay out a local source checkout the pipeline will accept.
fn write_source_tree(dir: &Path) -> PathBuf {
    let tree = dir.join("repo");
    fs::create_dir_all(tree.join(".git")).unwrap();
    fs::write(tree.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
    fs::write(tree.join("main.c"), "int main(void) { return 0; }\n").unwrap();
    tree
}

/// Create an executable stub for a host tool.
fn write_stub(bin_dir: &Path, name: &str, body: &str) {
    let path = bin_dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Stub git, tar, and debuild; debuild drops an artifact next to the
/// checkout the way the real one does.
fn write_tool_stubs(dir: &Path) -> PathBuf {
    let bin = dir.join("bin");
    fs::create_dir_all(&bin).unwrap();
    write_stub(&bin, "git", "exit 0");
    write_stub(&bin, "tar", "exit 0");
    write_stub(&bin, "debuild", ": > ../demo_1.2.3-1_amd64.changes");
    bin
}

#[test]
fn no_arguments_is_a_usage_error() {
    debpack()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn unknown_platform_is_rejected_at_parse_time() {
    let tmp = tempdir().unwrap();
    debpack()
        .current_dir(tmp.path())
        .args([
            "--platform", "18.04",
            "--pkg-path", "pkg",
            "--source-url", "repo",
            "--source-ref", "main",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn missing_debian_dir_exits_64_before_any_work() {
    let tmp = tempdir().unwrap();
    let pkg = tmp.path().join("pkg");
    fs::create_dir_all(&pkg).unwrap();

    debpack()
        .current_dir(tmp.path())
        .arg("--platform").arg("22.04")
        .arg("--pkg-path").arg(&pkg)
        .arg("--source-url").arg("https://example.invalid/repo.git")
        .arg("--source-ref").arg("main")
        .assert()
        .code(EXIT_CONFIG)
        .stderr(predicate::str::contains("debian/"));

    assert!(!tmp.path().join("package_workspace").exists());
}

#[test]
fn missing_changelog_exits_64() {
    let tmp = tempdir().unwrap();
    let pkg = tmp.path().join("pkg");
    fs::create_dir_all(pkg.join("debian")).unwrap();

    debpack()
        .current_dir(tmp.path())
        .arg("--platform").arg("22.04")
        .arg("--pkg-path").arg(&pkg)
        .arg("--source-url").arg("https://example.invalid/repo.git")
        .arg("--source-ref").arg("main")
        .assert()
        .code(EXIT_CONFIG)
        .stderr(predicate::str::contains("changelog not found"));
}

#[test]
fn changelog_without_version_entry_exits_64() {
    let tmp = tempdir().unwrap();
    let pkg = tmp.path().join("pkg");
    fs::create_dir_all(pkg.join("debian")).unwrap();
    fs::write(pkg.join("debian/changelog"), "no entries here\n").unwrap();

    debpack()
        .current_dir(tmp.path())
        .arg("--platform").arg("22.04")
        .arg("--pkg-path").arg(&pkg)
        .arg("--source-url").arg("https://example.invalid/repo.git")
        .arg("--source-ref").arg("main")
        .assert()
        .code(EXIT_CONFIG)
        .stderr(predicate::str::contains("no version entry"));
}

#[test]
fn missing_host_tools_exit_64_before_the_workspace_exists() {
    let tmp = tempdir().unwrap();
    let pkg = write_pkg_metadata(tmp.path());

    debpack()
        .current_dir(tmp.path())
        .env("PATH", "")
        .arg("--platform").arg("22.04")
        .arg("--pkg-path").arg(&pkg)
        .arg("--source-url").arg("https://example.invalid/repo.git")
        .arg("--source-ref").arg("main")
        .assert()
        .code(EXIT_CONFIG)
        .stderr(predicate::str::contains("required tools missing"));

    assert!(!tmp.path().join("package_workspace").exists());
}

#[test]
fn local_source_build_collects_artifacts_and_cleans_up() {
    let tmp = tempdir().unwrap();
    let pkg = write_pkg_metadata(tmp.path());
    let tree = write_source_tree(tmp.path());
    let bin = write_tool_stubs(tmp.path());
    let output = tmp.path().join("artifacts");

    debpack()
        .current_dir(tmp.path())
        .env("PATH", &bin)
        .arg("--platform").arg("24.04")
        .arg("--pkg-path").arg(&pkg)
        .arg("--source-url").arg(&tree)
        .arg("--source-ref").arg("main")
        .arg("--output-dir").arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Build complete."));

    assert!(output.join("demo_1.2.3-1_amd64.changes").is_file());
    assert!(!tmp.path().join("package_workspace").exists());
}

#[test]
fn keep_temp_retains_the_workspace() {
    let tmp = tempdir().unwrap();
    let pkg = write_pkg_metadata(tmp.path());
    let tree = write_source_tree(tmp.path());
    let bin = write_tool_stubs(tmp.path());

    debpack()
        .current_dir(tmp.path())
        .env("PATH", &bin)
        .arg("--platform").arg("24.04")
        .arg("--pkg-path").arg(&pkg)
        .arg("--source-url").arg(&tree)
        .arg("--source-ref").arg("main")
        .arg("--keep-temp")
        .assert()
        .success();

    let workspace = tmp.path().join("package_workspace");
    assert!(workspace.is_dir());
    // The copied local tree stays with the workspace.
    assert!(workspace.join("source/main.c").is_file());
}

#[test]
fn local_source_without_vcs_marker_exits_64() {
    let tmp = tempdir().unwrap();
    let pkg = write_pkg_metadata(tmp.path());
    let plain = tmp.path().join("plain");
    fs::create_dir_all(&plain).unwrap();
    let bin = write_tool_stubs(tmp.path());

    debpack()
        .current_dir(tmp.path())
        .env("PATH", &bin)
        .arg("--platform").arg("20.04")
        .arg("--pkg-path").arg(&pkg)
        .arg("--source-url").arg(&plain)
        .arg("--source-ref").arg("main")
        .assert()
        .code(EXIT_CONFIG)
        .stderr(predicate::str::contains("not a git checkout"));

    // Acquisition failed inside the pipeline, so cleanup removed the
    // workspace it had already created.
    assert!(!tmp.path().join("package_workspace").exists());
}

#[test]
fn failing_build_tool_exits_1() {
    let tmp = tempdir().unwrap();
    let pkg = write_pkg_metadata(tmp.path());
    let tree = write_source_tree(tmp.path());
    let bin = write_tool_stubs(tmp.path());
    write_stub(&bin, "debuild", "exit 29");

    debpack()
        .current_dir(tmp.path())
        .env("PATH", &bin)
        .arg("--platform").arg("24.04")
        .arg("--pkg-path").arg(&pkg)
        .arg("--source-url").arg(&tree)
        .arg("--source-ref").arg("main")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("debuild failed"));

    assert!(!tmp.path().join("package_workspace").exists());
}
