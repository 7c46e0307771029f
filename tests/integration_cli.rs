//! Integration tests for the sysgraph CLI: matrix files in a temp
//! directory, the built binary spawned against them, stdout checked in both
//! human and JSON form.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn sysgraph_binary() -> PathBuf {
    let mut path = std::env::current_exe().expect("could not get current exe path");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("sysgraph");
    assert!(
        path.exists(),
        "sysgraph binary not found at {:?}. Run `cargo build` first.",
        path
    );
    path
}

fn run_sysgraph(args: &[&str]) -> std::process::Output {
    Command::new(sysgraph_binary())
        .args(args)
        .output()
        .expect("failed to run sysgraph")
}

fn write_matrix(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write matrix file");
    path
}

#[test]
fn convert_prints_adjacency_and_right_incidence() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(dir.path(), "chain.txt", "3 2\n1 0\n-1 1\n0 -1\n");

    let output = run_sysgraph(&["convert", file.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 1 0"), "adjacency row missing: {stdout}");
    assert!(stdout.contains("Vertex 1: 2"), "right incidence missing: {stdout}");
    assert!(stdout.contains("Vertex 3: none"), "empty set missing: {stdout}");
}

#[test]
fn convert_json_output() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(dir.path(), "chain.txt", "3 2\n1 0\n-1 1\n0 -1\n");

    let output = run_sysgraph(&["convert", file.to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");
    assert_eq!(json["adjacency"][0][1], 1);
    assert_eq!(json["right_incidence"][1]["successors"][0], 3);
}

#[test]
fn convert_rejects_duplicate_edge() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(dir.path(), "dup.txt", "2 2\n1 1\n-1 -1\n");

    let output = run_sysgraph(&["convert", file.to_str().unwrap()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"), "stderr: {stderr}");
}

#[test]
fn levels_on_acyclic_adjacency() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(
        dir.path(),
        "dag.txt",
        "4\n0 1 0 0\n0 0 1 0\n0 0 0 0\n0 0 0 0\n",
    );

    let output = run_sysgraph(&["levels", file.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Level 0: (1, 4)"), "stdout: {stdout}");
    assert!(stdout.contains("Level 1: (2)"), "stdout: {stdout}");
    assert!(stdout.contains("Level 2: (3)"), "stdout: {stdout}");
}

#[test]
fn levels_from_incidence_file() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(dir.path(), "chain.txt", "3 2\n1 0\n-1 1\n0 -1\n");

    let output = run_sysgraph(&["levels", file.to_str().unwrap(), "--incidence", "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");
    assert_eq!(json["levels"][0]["vertices"][0], 1);
    assert_eq!(json["order"], serde_json::json!([1, 2, 3]));
}

#[test]
fn levels_fails_with_cycle_diagnostics() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(dir.path(), "cyclic.txt", "2\n0 1\n1 0\n");

    let output = run_sysgraph(&["levels", file.to_str().unwrap()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cycle"), "stderr: {stderr}");
    assert!(stderr.contains("1 -> 2 -> 1"), "stderr: {stderr}");
}

#[test]
fn cycles_reports_acyclic_graph() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(dir.path(), "dag.txt", "2\n0 1\n0 0\n");

    let output = run_sysgraph(&["cycles", file.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("acyclic"));
}

#[test]
fn cycles_lists_simple_cycles_json() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(dir.path(), "cyclic.txt", "2\n0 1\n1 0\n");

    let output = run_sysgraph(&["cycles", file.to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");
    assert_eq!(json["acyclic"], false);
    assert_eq!(json["cycles"], serde_json::json!([[1, 2]]));
}

#[test]
fn decompose_reports_subsystems_and_condensation() {
    // Two 2-cycles bridged by one edge plus an isolated vertex.
    let dir = TempDir::new().unwrap();
    let file = write_matrix(
        dir.path(),
        "mixed.txt",
        "5\n0 1 0 0 0\n1 0 1 0 0\n0 0 0 1 0\n0 0 1 0 0\n0 0 0 0 0\n",
    );

    let output = run_sysgraph(&["decompose", file.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Subsystem 1: vertices 1, 2"), "stdout: {stdout}");
    assert!(stdout.contains("Subsystem 3: vertices 5"), "stdout: {stdout}");
    assert!(stdout.contains("1->2"), "condensation edge missing: {stdout}");
    assert!(stdout.contains("no edges"), "stdout: {stdout}");
}

#[test]
fn decompose_json_right_incidence_is_incoming() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(dir.path(), "chain.txt", "3\n0 1 0\n0 0 1\n0 0 0\n");

    let output = run_sysgraph(&["decompose", file.to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");
    assert_eq!(json["subsystem_count"], 3);
    // Subsystem 2 is entered from subsystem 1; subsystem 1 from nothing.
    assert_eq!(json["right_incidence"][0]["incoming"], serde_json::json!([]));
    assert_eq!(json["right_incidence"][1]["incoming"], serde_json::json!([1]));
}

#[test]
fn missing_file_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.txt");

    let output = run_sysgraph(&["cycles", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("IO error"));
}
