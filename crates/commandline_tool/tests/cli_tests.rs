//! Binary-level checks of the `c2rs` command line.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `c2rs` command running in `dir` with no credential and no config overrides.
fn c2rs_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("c2rs").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("OPENAI_API_KEY")
        .env_remove("C2RS_LLM__API_KEY_ENV")
        .env_remove("C2RS_LLM__MODEL")
        .env_remove("C2RS_PROCESSOR__OUTPUT_DIR");
    cmd
}

#[test]
fn test_help_lists_flags() {
    let tmp = TempDir::new().unwrap();
    c2rs_in(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--keep"))
        .stdout(predicate::str::contains("FILENAME"))
        .stdout(predicate::str::contains("keep the memory safety errors"))
        .stdout(predicate::str::contains("Show debug logs"));
}

#[test]
fn test_filename_is_required() {
    let tmp = TempDir::new().unwrap();
    c2rs_in(&tmp).assert().failure();
}

#[test]
fn test_missing_api_key_is_fatal() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("hello.c"), "int main(){return 0;}").unwrap();

    c2rs_in(&tmp)
        .arg("hello.c")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY is not set"));

    assert!(!tmp.path().join("outputs").exists());
}

#[test]
fn test_api_key_from_dotenv() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".env"), "OPENAI_API_KEY=sk-from-dotenv\n").unwrap();
    fs::write(tmp.path().join("notes.txt"), "not code").unwrap();

    c2rs_in(&tmp)
        .arg("notes.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt is not a C file. Skipping."));
}

#[test]
fn test_non_c_files_are_skipped() {
    let tmp = TempDir::new().unwrap();
    let samples = tmp.path().join("samples");
    fs::create_dir(&samples).unwrap();
    fs::write(samples.join("notes.txt"), "not code").unwrap();
    fs::write(samples.join("README.md"), "# docs").unwrap();

    c2rs_in(&tmp)
        .env("OPENAI_API_KEY", "sk-test")
        .arg("samples")
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt is not a C file. Skipping."))
        .stdout(predicate::str::contains("README.md").not())
        .stdout(predicate::str::contains("Translated 0 file(s), skipped 1."));
}

#[test]
fn test_invalid_config_is_fatal() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bad.toml"), "[llm]\nmodel = \"\"\n").unwrap();
    fs::write(tmp.path().join("hello.c"), "int main(){return 0;}").unwrap();

    c2rs_in(&tmp)
        .env("OPENAI_API_KEY", "sk-test")
        .args(["hello.c", "--config", "bad.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_writes_log_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("notes.txt"), "not code").unwrap();

    c2rs_in(&tmp)
        .env("OPENAI_API_KEY", "sk-test")
        .arg("notes.txt")
        .assert()
        .success();

    assert!(tmp.path().join("log").join("latest.log").exists());
}

#[test]
fn test_output_path_that_is_a_file_is_fatal() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("notes.txt"), "not code").unwrap();
    fs::write(tmp.path().join("outputs"), "occupied").unwrap();

    c2rs_in(&tmp)
        .env("OPENAI_API_KEY", "sk-test")
        .arg("notes.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output path is not a directory"));
}
