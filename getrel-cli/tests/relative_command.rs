//! Integration tests for computing relative paths through the binary.

mod common;

use common::{command, output_of, TestEnv};
use predicates::prelude::*;
use std::path::Path;

const HOME_DIR: &str = "/Users/faekiva";

#[cfg(unix)]
#[test]
fn test_same_path() {
    let output = output_of(command().args([
        "--case-sensitive",
        "true",
        HOME_DIR,
        "--relative-to",
        "/Users/faekiva/",
    ]));
    assert_eq!(output, ".");
}

#[cfg(unix)]
#[test]
fn test_child_path() {
    let output = output_of(command().args([
        "--case-sensitive",
        "true",
        HOME_DIR,
        "--relative-to",
        "/Users",
    ]));
    assert_eq!(output, "faekiva");
}

#[cfg(unix)]
#[test]
fn test_case_insensitive() {
    let output = output_of(command().args([
        "--case-sensitive",
        "false",
        HOME_DIR,
        "--relative-to",
        "/users",
    ]));
    assert_eq!(output, "faekiva");
}

#[cfg(unix)]
#[test]
fn test_case_sensitive_mismatch_ascends() {
    let output = output_of(command().args([
        "--case-sensitive",
        "true",
        HOME_DIR,
        "--relative-to",
        "/users",
    ]));
    assert_eq!(output, "../Users/faekiva");
}

#[cfg(unix)]
#[test]
fn test_always_start_with_dot() {
    let output = output_of(command().args([
        "--case-sensitive",
        "false",
        HOME_DIR,
        "--always-start-with-dot",
        "--relative-to",
        "/users",
    ]));
    assert_eq!(output, "./faekiva");
}

#[cfg(unix)]
#[test]
fn test_options_from_environment() {
    let output = output_of(
        command()
            .arg(HOME_DIR)
            .env("GETREL_RELATIVE_TO", "/users")
            .env("GETREL_CASE_SENSITIVE", "false")
            .env("GETREL_ALWAYS_START_WITH_DOT", "true"),
    );
    assert_eq!(output, "./faekiva");
}

/// Relative inputs resolve against `$PWD` when it names the working
/// directory.
#[test]
fn test_absolute_path_against_period() {
    let env = TestEnv::new();
    let test_dir = env.create_dir("boop");
    let test_dir2 = env.create_dir("boop/beep");

    let where_ = output_of(
        command()
            .current_dir(&test_dir)
            .env("PWD", &test_dir)
            .args(["--case-sensitive", "false", "--relative-to", "."])
            .arg(env.path()),
    );
    assert_eq!(where_, "..");

    let where_ = output_of(
        command()
            .current_dir(&test_dir)
            .env("PWD", &test_dir)
            .args(["--case-sensitive", "false", "..", "--relative-to"])
            .arg(&test_dir2),
    );
    assert_eq!(Path::new(&where_), Path::new("..").join(".."));
}

/// Without --relative-to the working directory is the base.
#[test]
fn test_default_relative_to_working_directory() {
    let env = TestEnv::new();
    let child = env.create_dir("Child/Grandchild");

    let output = output_of(env.command().args(["--case-sensitive", "true"]).arg(&child));
    assert_eq!(Path::new(&output), Path::new("Child").join("Grandchild"));
}

/// Guessing on a real directory: a differently-cased reference only
/// matches when the filesystem folds case.
#[test]
fn test_guess_on_real_filesystem() {
    let env = TestEnv::new();
    let folds = env.folds_case();
    let project = env.create_dir("Project/src");
    let reference = env.path().join("project");

    let output = output_of(env.command().arg(&project).arg("--relative-to").arg(&reference));

    if folds {
        assert_eq!(output, "src");
    } else {
        let expected = Path::new("..").join("Project").join("src");
        assert_eq!(Path::new(&output), expected);
    }
}

/// Nonexistent paths cannot be probed; the OS default decides, and the
/// command still succeeds.
#[cfg(target_os = "linux")]
#[test]
fn test_guess_falls_back_to_os_default() {
    let output = output_of(command().args([
        "/Nonexistent-getrel-path/A",
        "--relative-to",
        "/nonexistent-getrel-path",
    ]));
    // Linux defaults to case-sensitive.
    assert_eq!(output, "../Nonexistent-getrel-path/A");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let env = TestEnv::new();
    let child = env.create_dir("child");

    env.command()
        .arg("--verbose")
        .arg(&child)
        .assert()
        .success()
        .stdout("child\n")
        .stderr(predicate::str::contains("relative to the working directory"))
        .stderr(predicate::str::contains("case sensitivity: guess"));
}

#[test]
fn test_quiet_is_silent() {
    let env = TestEnv::new();
    let child = env.create_dir("child");

    env.command()
        .arg("--quiet")
        .arg(&child)
        .assert()
        .success()
        .stdout("child\n")
        .stderr(predicate::str::is_empty());
}
