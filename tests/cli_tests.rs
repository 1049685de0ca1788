use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{json_files, rtr, sample_file, write_file};

#[test]
fn run_records_and_saves() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sessions = dir.path().join("sessions");
    let sessions_arg = sessions.to_string_lossy().to_string();

    rtr()
        .args(["--test", "--dir", &sessions_arg, "run"])
        .write_stdin("activity Reading\nstart\nstop\nsave\nquit\n")
        .assert()
        .success()
        .stdout(contains("Time Recorder"))
        .stdout(contains("Reading: "))
        .stdout(contains("Sessions saved as"));

    let files = json_files(&sessions);
    assert_eq!(files.len(), 1);

    let content = fs::read_to_string(&files[0]).expect("read saved file");
    let value: serde_json::Value = serde_json::from_str(&content).expect("json");
    assert_eq!(value[0]["activity"], "Reading");
    assert!(value[0]["end"].as_f64() >= value[0]["start"].as_f64());
}

#[test]
fn run_with_preset_activity_and_blank_label() {
    let dir = tempfile::tempdir().expect("tempdir");
    let arg = dir.path().to_string_lossy().to_string();

    rtr()
        .args(["--test", "--dir", &arg, "run", "--activity", "1"])
        .write_stdin("start\nstop\nactivity -\nstart\nstop\n")
        .assert()
        .success()
        .stdout(contains("Activity set to 'Study'"))
        .stdout(contains("Study: "))
        .stdout(contains("Breathing: "));
}

#[test]
fn run_survives_bad_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bad = write_file(dir.path(), "bad.json", "{ nope");
    let arg = dir.path().to_string_lossy().to_string();

    rtr()
        .args(["--test", "--dir", &arg, "run"])
        .write_stdin(format!("load {}\nlist\n", bad.display()))
        .assert()
        .success()
        .stdout(contains("Invalid session file"))
        .stdout(contains("(no sessions)"));
}

#[test]
fn run_ends_on_eof() {
    rtr()
        .args(["--test", "run"])
        .write_stdin("start\n")
        .assert()
        .success();
}

#[test]
fn list_is_most_recent_first() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = sample_file(dir.path());
    let file_arg = file.to_string_lossy().to_string();

    let output = rtr()
        .args(["--test", "list", "--file", &file_arg])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "Study: 11:30 ~ 11:45 (0:15:00)",
            "Reading: 10:40 ~ 11:10 (0:30:00)",
            "Study: 09:00 ~ 10:30 (1:30:00)",
        ]
    );
}

#[test]
fn list_missing_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.json");

    rtr()
        .args(["--test", "list", "--file", &missing.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("Error:").and(contains("cannot read session file")));
}

#[test]
fn summary_table_and_chart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = sample_file(dir.path());
    let file_arg = file.to_string_lossy().to_string();

    rtr()
        .args(["--test", "summary", "--file", &file_arg])
        .assert()
        .success()
        .stdout(contains("Study"))
        .stdout(contains("1h 45m 0s"))
        .stdout(contains("30m 0s"))
        .stdout(contains("Total: 2h 15m 0s"));

    rtr()
        .args(["--test", "summary", "--file", &file_arg, "--chart"])
        .assert()
        .success()
        .stdout(contains("Time spent on activities"))
        .stdout(contains("77.78%"))
        .stdout(contains("22.22%"));
}

#[test]
fn export_sessions_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = sample_file(dir.path());
    let out = dir.path().join("out").join("sessions.csv");

    rtr()
        .args([
            "--test",
            "export",
            "--file",
            &file.to_string_lossy(),
            "--out",
            &out.to_string_lossy(),
            "--format",
            "csv",
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("activity,start,end,start_local,end_local,elapsed,seconds")
    );
    assert!(content.contains("Study,0.0,5400.0,1970-01-01T09:00:00+09:00"));
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn export_summary_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = sample_file(dir.path());
    let out = dir.path().join("totals.json");

    rtr()
        .args([
            "--test",
            "export",
            "--file",
            &file.to_string_lossy(),
            "--out",
            &out.to_string_lossy(),
            "--format",
            "json",
            "--summary",
        ])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read json")).expect("json");
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["activity"], "Study");
    assert_eq!(rows[0]["sessions"], 2);
    assert_eq!(rows[0]["seconds"], 6300.0);
    assert_eq!(rows[0]["share"], "77.78");
    assert_eq!(rows[1]["duration"], "30m 0s");
}

#[test]
fn export_refuses_overwrite_without_confirmation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = sample_file(dir.path());
    let out = write_file(dir.path(), "existing.csv", "keep me");

    rtr()
        .args([
            "--test",
            "export",
            "--file",
            &file.to_string_lossy(),
            "--out",
            &out.to_string_lossy(),
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn init_in_test_mode_creates_sessions_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sessions = dir.path().join("a").join("b");

    rtr()
        .args(["--test", "--dir", &sessions.to_string_lossy(), "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(sessions.is_dir());
}

#[test]
fn config_print_shows_defaults() {
    rtr()
        .args(["--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("fallback_activity: Breathing"))
        .stdout(contains("refresh_ms: 50"));
}
