//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn bin() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("file-bundler"));
    cmd.env_remove("BUNDLE_OUTPUT").env_remove("BUNDLE_LANGUAGE").env_remove("BUNDLE_AUTHOR");
    cmd
}

#[test]
fn test_cli_version() {
    bin().arg("--version").assert().success().stdout(predicate::str::contains("file-bundler"));
}

#[test]
fn test_cli_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundle the source files"))
        .stdout(predicate::str::contains("bundle"))
        .stdout(predicate::str::contains("create-rsp"));
}

#[test]
fn test_bundle_requires_output_and_language() {
    bin()
        .arg("bundle")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"))
        .stderr(predicate::str::contains("--language"));
}

#[test]
fn test_bundle_rejects_unknown_language_before_scanning() {
    let work = TempDir::new().expect("work dir");
    bin()
        .current_dir(work.path())
        .args(["bundle", "--output", "out.txt", "--language", "rust"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Invalid programming language. Please use 'all' or a valid language: \
             csharp, python, java, javascript, all",
        ));
    assert!(!work.path().join("out.txt").exists());
}

#[test]
fn test_bundle_rejects_blank_output() {
    let work = TempDir::new().expect("work dir");
    bin()
        .current_dir(work.path())
        .args(["bundle", "--output", " ", "--language", "all"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid output file path."));
}

#[test]
fn test_bundle_reports_missing_output_directory() {
    let work = TempDir::new().expect("work dir");
    fs::write(work.path().join("a.txt"), "alpha\n").expect("write a.txt");
    bin()
        .current_dir(work.path())
        .args(["bundle", "-o", "missing/out.txt", "-l", "all"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid file path"));
}

#[test]
fn test_bundle_prints_count_and_creation() {
    let work = TempDir::new().expect("work dir");
    let out = TempDir::new().expect("out dir");
    fs::write(work.path().join("a.txt"), "alpha\n").expect("write a.txt");
    fs::write(work.path().join("b.txt"), "bravo\n").expect("write b.txt");

    bin()
        .current_dir(work.path())
        .args(["bundle", "-o"])
        .arg(out.path().join("bundle.txt"))
        .args(["-l", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Including 2 files."))
        .stdout(predicate::str::contains("File created"));
}

#[test]
fn test_bundle_reads_options_from_environment() {
    let work = TempDir::new().expect("work dir");
    fs::write(work.path().join("a.txt"), "alpha\n").expect("write a.txt");

    bin()
        .current_dir(work.path())
        .env("BUNDLE_OUTPUT", "env-bundle.out")
        .env("BUNDLE_LANGUAGE", "all")
        .env("BUNDLE_AUTHOR", "Env Author")
        .arg("bundle")
        .assert()
        .success();

    let bundle = fs::read_to_string(work.path().join("env-bundle.out")).expect("read bundle");
    assert!(bundle.starts_with("// Created by: Env Author\nBundled files:\n"));
}

#[test]
fn test_bundle_json_result() {
    let work = TempDir::new().expect("work dir");
    let out = TempDir::new().expect("out dir");
    fs::write(work.path().join("app.py"), "print(1)\n").expect("write app.py");

    let assert = bin()
        .current_dir(work.path())
        .args(["bundle", "-l", "python", "--format", "json", "-o"])
        .arg(out.path().join("bundle.txt"))
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("json result");
    assert_eq!(value["status"], "success");
    assert_eq!(value["files_included"], 1);
    assert!(value["message"].as_str().expect("message").contains("python"));
    assert!(value.get("error_kind").is_none());
}

#[test]
fn test_bundle_json_failure_reports_error_kind() {
    let work = TempDir::new().expect("work dir");

    let assert = bin()
        .current_dir(work.path())
        .args(["bundle", "-o", "out.txt", "-l", "rust", "--format", "json"])
        .assert()
        .failure();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("json result");
    assert_eq!(value["status"], "failure");
    assert_eq!(value["error_kind"], "validation");
    assert_eq!(value["files_included"], 0);

    let assert = bin()
        .current_dir(work.path())
        .args(["bundle", "-o", "missing/out.txt", "-l", "all", "--format", "json"])
        .assert()
        .failure();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("json result");
    assert_eq!(value["error_kind"], "filesystem");
    assert_eq!(value["message"], "Invalid file path");
}

#[test]
fn test_completions_for_bash() {
    bin()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file-bundler"));
}
