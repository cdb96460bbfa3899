use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn log_report(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_log-report"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn write_sample(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("access.log");
    fs::write(
        &path,
        concat!(
            "{\"@timestamp\": \"2025-06-22T13:57:32+00:00\", \"url\": \"/api/users\", \"response_time\": 0.1}\n",
            "{\"@timestamp\": \"2025-06-22T13:57:33+00:00\", \"url\": \"/api/users\", \"response_time\": 0.15}\n",
            "not json\n",
            "\n",
            "{\"@timestamp\": \"2025-06-23T09:00:00+00:00\", \"url\": \"/api/products\", \"response_time\": 0.2}\n",
        ),
    )
    .unwrap();
    path
}

#[test]
fn prints_plain_report() {
    let dir = tempdir().unwrap();
    let log = write_sample(dir.path());

    let output = log_report(&["--file", path_str(&log), "--format", "plain"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "Endpoint                      Requests  Avg Response Time",
            "--------------------------------------------------",
            "/api/products                 1         0.2ms",
            "/api/users                    2         0.125ms",
        ]
    );
}

#[test]
fn date_filter_narrows_report() {
    let dir = tempdir().unwrap();
    let log = write_sample(dir.path());

    let output = log_report(&[
        "--file",
        path_str(&log),
        "--date",
        "2025-06-23",
        "--format",
        "json",
    ]);

    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        rows,
        serde_json::json!([
            {"endpoint": "/api/products", "requests": 1, "avg_response_time_ms": 0.2}
        ])
    );
}

#[test]
fn default_format_is_grid() {
    let dir = tempdir().unwrap();
    let log = write_sample(dir.path());

    let output = log_report(&["--file", path_str(&log)]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with('+'));
    assert!(stdout.contains("Avg Response Time"));
    assert!(stdout.contains("0.125ms"));
}

#[test]
fn invalid_date_exits_with_one() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.log");

    // The date is rejected before the missing file is even looked at.
    let output = log_report(&["--file", path_str(&missing), "--date", "2023-13-01"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid date format"), "{stderr}");
}

#[test]
fn missing_file_exits_with_one_and_no_report() {
    let dir = tempdir().unwrap();
    let log = write_sample(dir.path());
    let missing = dir.path().join("missing.log");

    let output = log_report(&["--file", path_str(&log), path_str(&missing)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not found"), "{stderr}");
}
