//! CLI integration tests for inno_bundler.
//!
//! These run the binary against the JSON fixtures and inspect the generated
//! script and the process exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the bundler binary command with tool overrides cleared.
fn inno_bundler() -> Command {
    let mut cmd = Command::cargo_bin("inno_bundler").unwrap();
    cmd.env_remove("ISCC")
        .env_remove("SIGNTOOL")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

// ============================================================================
// rendering
// ============================================================================

#[test]
fn test_minimal_config_renders_script_in_working_directory() {
    let tmp = TempDir::new().unwrap();

    inno_bundler()
        .arg(fixture("minimal.json"))
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("App.iss"));

    let script = fs::read_to_string(tmp.path().join("App.iss")).unwrap();
    assert!(!script.is_empty());
    assert!(script.contains("AppId={{6a091ce2-5472-d505-4eb3-5b43d6754dc9}"));
    assert!(script.contains("OutputBaseFilename=Install Acme App 1.0"));
}

#[cfg(unix)]
#[test]
fn test_multi_component_config_lists_every_component() {
    let tmp = TempDir::new().unwrap();

    inno_bundler()
        .arg(fixture("studio.json"))
        .args(["--signtool", "true"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let script = fs::read_to_string(tmp.path().join("Studio.iss")).unwrap();
    assert!(script.contains(r#"Name: "core"; Description: "Editor and runtime""#));
    assert!(script.contains(r#"Name: "plugins"; Description: "Optional plugins""#));
    assert!(script.contains(r#"Source: "redist\vc_redist.x64.exe"; DestDir: "{tmp}""#));
    assert!(script.contains(r#"MessagesFile: "compiler:Languages\French.isl""#));
}

#[test]
fn test_custom_template() {
    let tmp = TempDir::new().unwrap();
    let template = tmp.path().join("custom.hbs");
    fs::write(&template, "{{config.publisher}} {{config.app_id}}").unwrap();

    inno_bundler()
        .arg(fixture("minimal.json"))
        .arg("--template")
        .arg(&template)
        .current_dir(tmp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(tmp.path().join("App.iss")).unwrap(),
        "\u{FEFF}Acme 6a091ce2-5472-d505-4eb3-5b43d6754dc9"
    );
}

// ============================================================================
// config errors
// ============================================================================

#[test]
fn test_missing_required_field_fails() {
    let tmp = TempDir::new().unwrap();

    inno_bundler()
        .arg(fixture("missing_name.json"))
        .current_dir(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing field `name`"));

    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_config_file_fails() {
    let tmp = TempDir::new().unwrap();

    inno_bundler()
        .arg("nope.json")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_config_argument_is_required() {
    inno_bundler().assert().failure();
}

// ============================================================================
// external tools
// ============================================================================

#[cfg(unix)]
#[test]
fn test_run_iscc_invokes_compiler() {
    let tmp = TempDir::new().unwrap();

    inno_bundler()
        .arg(fixture("minimal.json"))
        .args(["-r", "--iscc", "true"])
        .current_dir(tmp.path())
        .assert()
        .success();

    assert!(tmp.path().join("App.iss").exists());
}

#[cfg(unix)]
#[test]
fn test_failing_compiler_keeps_script_and_exit_code() {
    let tmp = TempDir::new().unwrap();

    inno_bundler()
        .arg(fixture("minimal.json"))
        .args(["--run_iscc", "--iscc", "false"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(tmp.path().join("App.iss").exists());
}

#[cfg(unix)]
#[test]
fn test_failing_compiler_is_logged_once() {
    let tmp = TempDir::new().unwrap();

    let output = inno_bundler()
        .arg(fixture("minimal.json"))
        .args(["--run_iscc", "--iscc", "false"])
        .env("RUST_LOG", "warn")
        .current_dir(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("iscc exited with").count(), 1, "{stderr}");
}

#[test]
fn test_missing_compiler_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let absent = tmp.path().join("no-such-iscc");

    inno_bundler()
        .arg(fixture("minimal.json"))
        .arg("-r")
        .arg("--iscc")
        .arg(&absent)
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert!(tmp.path().join("App.iss").exists());
}

#[cfg(unix)]
#[test]
fn test_signing_failure_is_reported_without_failing() {
    let tmp = TempDir::new().unwrap();

    inno_bundler()
        .arg(fixture("studio.json"))
        .args(["--signtool", "false"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Signing failed"))
        .stderr(predicate::str::contains("Install Contoso Studio 2.3.4.exe"));
}

#[cfg(unix)]
#[test]
fn test_signtool_from_environment() {
    let tmp = TempDir::new().unwrap();

    inno_bundler()
        .arg(fixture("studio.json"))
        .env("SIGNTOOL", "true")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed"));
}
