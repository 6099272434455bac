use std::path::Path;
use std::process::{Command, Output};

/// Runs the binary in `dir` with nothing inherited from the test environment.
fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kia-metadata"))
        .env_clear()
        .current_dir(dir)
        .output()
        .unwrap()
}

#[test]
fn given_log_format_in_dotenv_when_run_fails_then_error_is_logged_as_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "LOG_FORMAT=json\n").unwrap();

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .find(|line| line.contains("Run failed"))
        .unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "ERROR");
    assert_eq!(event["fields"]["message"], "Run failed");
    assert!(event["fields"]["error"]
        .as_str()
        .unwrap()
        .contains("GCP_PROJECT_ID"));
}

#[test]
fn given_log_filter_in_dotenv_when_run_fails_then_filter_applies() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "RUST_LOG=off\n").unwrap();

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Run failed"));
}

#[test]
fn given_no_dotenv_when_run_fails_then_error_is_logged_as_text() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Run failed"));
    assert!(!stdout.contains("\"level\":\"ERROR\""));
}
