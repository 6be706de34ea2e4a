use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("covid").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("covid"));
}

#[test]
fn global_fetch_failure_exits_nonzero() {
    // Point the client at a closed local port: the connection is refused
    // quickly and the global fetch (the only fatal stage) fails.
    let mut cmd = Command::cargo_bin("covid").unwrap();
    cmd.env("COVID_API_BASE", "http://127.0.0.1:9/v3/covid-19");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to fetch global summary"));
}

// Live tests (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn fetch_online_global_summary() {
    let mut cmd = Command::cargo_bin("covid").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Global summary:"))
        .stdout(predicate::str::contains("No country specified"));
}

#[cfg(feature = "online")]
#[test]
fn fetch_online_country_plot() {
    let dir = tempfile::tempdir().unwrap();
    let plot = dir.path().join("india.png");
    let mut cmd = Command::cargo_bin("covid").unwrap();
    cmd.args([
        "--country",
        "India",
        "--days",
        "90",
        "--saveplot",
        plot.to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("India summary:"))
        .stdout(predicate::str::contains("Saved plot to:"));
    assert!(plot.exists());
}
