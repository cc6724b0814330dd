//! Integration tests that run the CLI binary.

use std::path::Path;

fn bin(home: &Path) -> std::process::Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_study", "-", "buddy"));
    let mut cmd = std::process::Command::new(bin);
    // Isolate from the real environment: no key in env, no stored key, no .env file.
    cmd.env_remove("OPENROUTER_API_KEY")
        .env_remove("OPENROUTER_MODEL")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_CACHE_HOME", home.join("cache"))
        .current_dir(home);
    cmd
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("quiz"), "expected subcommands in usage: {}", stdout);
    assert!(stdout.contains("todo"));
}

#[test]
fn cli_version_succeeds() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("study-buddy"));
}

#[test]
fn cli_prompt_without_api_key_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("-p")
        .arg("hello")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        !output.status.success(),
        "expected failure when OPENROUTER_API_KEY is not set"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("OPENROUTER_API_KEY"),
        "expected API key error message, got: {}",
        stderr
    );
}

#[test]
fn cli_quiz_without_api_key_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .args(["quiz", "physics"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("OPENROUTER_API_KEY"));
}

#[test]
fn cli_completions_bash_succeeds() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .args(["completions", "bash"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("study-buddy"));
}

#[test]
fn cli_config_reports_missing_key() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("config")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OPENROUTER_API_KEY"), "got: {}", stdout);
}

#[test]
fn cli_blank_prompt_fails_before_any_request() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .env("OPENROUTER_API_KEY", "sk-test")
        .args(["-p", "   "])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: empty prompt"), "got: {}", stderr);
}

#[test]
fn cli_config_reports_model_flag() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .args(["-m", "x/y", "config"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("x/y (from --model)"), "got: {}", stdout);
}

#[test]
fn cli_config_set_model_is_saved() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .args(["config", "set-model", "foo/bar"])
        .output()
        .expect("binary not found - run cargo build first");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = bin(tmp.path())
        .arg("config")
        .output()
        .expect("binary not found - run cargo build first");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("foo/bar (from settings)"), "got: {}", stdout);
}

#[test]
fn cli_config_set_api_key_is_used_by_config() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .args(["config", "set-api-key", "sk-or-stored"])
        .output()
        .expect("binary not found - run cargo build first");
    assert!(output.status.success());

    let output = bin(tmp.path())
        .arg("config")
        .output()
        .expect("binary not found - run cargo build first");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("set ✓ (settings)"), "got: {}", stdout);
    assert!(!stdout.contains("sk-or-stored"));
}
