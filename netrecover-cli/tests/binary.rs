//! Runs the `netrecover` binary end to end.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

#[test]
fn bi_tree_command_initialises_logging_and_prints_edges() {
    let dir = TempDir::new().expect("temp dir must be created");
    let path = dir.path().join("pairs.txt");
    fs::write(&path, "0 1 0.9\n1 2 0.8\n0 2 0.95\n").expect("fixture must be written");

    let output = Command::new(env!("CARGO_BIN_EXE_netrecover"))
        .arg("bi-tree")
        .arg(&path)
        .args(["--vertices", "3"])
        .env("RUST_LOG", "debug")
        .env_remove("NETRECOVER_LOG_FORMAT")
        .output()
        .expect("binary must launch");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "binary failed: {stderr}");
    assert!(!stderr.contains("failed to initialize logging"), "{stderr}");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "edges: 2\n0\t2\n0\t1\n"
    );
}

#[test]
fn invalid_log_format_fails_before_running() {
    let output = Command::new(env!("CARGO_BIN_EXE_netrecover"))
        .args(["bi-tree", "missing.txt", "--vertices", "3"])
        .env("NETRECOVER_LOG_FORMAT", "xml")
        .output()
        .expect("binary must launch");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to initialize logging"));
    assert!(output.stdout.is_empty());
}
