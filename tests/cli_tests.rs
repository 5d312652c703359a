//! Integration tests for the citygraph CLI
//!
//! These tests run the citygraph binary, feed start/target on stdin and
//! check stdout, stderr and the exit code.

mod support;

use predicates::prelude::*;
use std::fs;
use support::{citygraph, fixture};
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    citygraph()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: citygraph"))
        .stdout(predicate::str::contains("<FILENAME>"))
        .stdout(predicate::str::contains("<ALGORITHM>"));
}

#[test]
fn test_version_flag() {
    citygraph()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("citygraph"));
}

// ============================================================================
// Algorithms
// ============================================================================

#[test]
fn test_dijkstra_least_weight() {
    citygraph()
        .arg(fixture("triangle.json"))
        .arg("dijkstra")
        .write_stdin("A\nC\n")
        .assert()
        .success()
        .stdout("A B C\n");
}

#[test]
fn test_bfs_fewest_hops() {
    citygraph()
        .arg(fixture("triangle.json"))
        .arg("bfs")
        .write_stdin("A\nC\n")
        .assert()
        .success()
        .stdout("A C\n");
}

#[test]
fn test_dfs_reads_only_start() {
    citygraph()
        .arg(fixture("triangle.json"))
        .arg("dfs")
        .write_stdin("A\n")
        .assert()
        .success()
        .stdout("A B C\n");
}

#[test]
fn test_node_names_with_spaces() {
    citygraph()
        .arg(fixture("cities.json"))
        .arg("dijkstra")
        .write_stdin("Moscow\nKazan\n")
        .assert()
        .success()
        .stdout("Moscow Vladimir Nizhny Novgorod Kazan\n");
}

#[test]
fn test_cities_dfs_declared_order() {
    citygraph()
        .arg(fixture("cities.json"))
        .arg("dfs")
        .write_stdin("Moscow\n")
        .assert()
        .success()
        .stdout(
            "Moscow Tver Novgorod Saint Petersburg Vladimir Nizhny Novgorod Kazan Ryazan\n",
        );
}

#[test]
fn test_bfs_start_is_target() {
    citygraph()
        .arg(fixture("cities.json"))
        .arg("bfs")
        .write_stdin("Kazan\nKazan\n")
        .assert()
        .success()
        .stdout("Kazan\n");
}

#[test]
fn test_bfs_no_path_prints_empty_line() {
    citygraph()
        .arg(fixture("cities.json"))
        .arg("bfs")
        .write_stdin("Moscow\nKaliningrad\n")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_start_and_target_flags() {
    citygraph()
        .arg(fixture("triangle.json"))
        .arg("dijkstra")
        .args(["--start", "A", "--target", "C"])
        .assert()
        .success()
        .stdout("A B C\n");
}

#[test]
fn test_json_output() {
    let output = citygraph()
        .arg(fixture("triangle.json"))
        .arg("dijkstra")
        .args(["--format", "json"])
        .write_stdin("A\nC\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["algorithm"], "dijkstra");
    assert_eq!(value["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(value["cost"], 7);
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_missing_arguments() {
    citygraph()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Command is incorrect"))
        .stderr(predicate::str::contains("<FILENAME>"))
        .stderr(predicate::str::contains("<ALGORITHM>"));

    citygraph()
        .arg(fixture("triangle.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Command is incorrect"))
        .stderr(predicate::str::contains("<ALGORITHM>"));
}

#[test]
fn test_unknown_algorithm() {
    citygraph()
        .arg(fixture("triangle.json"))
        .arg("astar")
        .write_stdin("A\nC\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Command is incorrect"));
}

#[test]
fn test_usage_error_json_envelope() {
    citygraph()
        .args(["--format", "json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"bad_arguments\""));
}

#[test]
fn test_file_not_found() {
    let dir = tempdir().unwrap();
    citygraph()
        .arg(dir.path().join("missing.json"))
        .arg("bfs")
        .write_stdin("A\nB\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_malformed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"Distances\": {\"A\": ").unwrap();

    citygraph()
        .arg(&path)
        .arg("dfs")
        .write_stdin("A\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("JSON Deserialization error"));
}

#[test]
fn test_unknown_start_node() {
    citygraph()
        .arg(fixture("triangle.json"))
        .arg("dfs")
        .write_stdin("Z\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Vertex not found in dictionary: Z"));
}

#[test]
fn test_dijkstra_unreachable_target_fails() {
    citygraph()
        .arg(fixture("triangle.json"))
        .arg("dijkstra")
        .write_stdin("C\nA\n")
        .assert()
        .code(4)
        .stdout("")
        .stderr(predicate::str::contains("no parent recorded for A"));
}

#[test]
fn test_dijkstra_unreachable_target_empty_policy() {
    citygraph()
        .arg(fixture("triangle.json"))
        .arg("dijkstra")
        .args(["--unreached-target", "empty"])
        .write_stdin("C\nA\n")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_missing_stdin_target() {
    citygraph()
        .arg(fixture("triangle.json"))
        .arg("bfs")
        .write_stdin("A\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("target node"));
}

#[test]
fn test_target_flag_rejected_for_dfs() {
    citygraph()
        .arg(fixture("triangle.json"))
        .arg("dfs")
        .args(["--target", "C"])
        .write_stdin("A\n")
        .assert()
        .code(2);
}

#[test]
fn test_quiet_suppresses_error_message() {
    citygraph()
        .arg(fixture("triangle.json"))
        .arg("dfs")
        .arg("--quiet")
        .write_stdin("Z\n")
        .assert()
        .code(4)
        .stderr("");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_sets_neighbor_order() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("citygraph.toml");
    fs::write(&config, "[traversal]\nneighbor_order = \"lexical\"\n").unwrap();

    citygraph()
        .arg(fixture("cities.json"))
        .arg("dfs")
        .arg("--config")
        .arg(&config)
        .write_stdin("Moscow\n")
        .assert()
        .success()
        .stdout(
            "Moscow Ryazan Nizhny Novgorod Kazan Vladimir Tver Novgorod Saint Petersburg\n",
        );
}

#[test]
fn test_flag_overrides_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("citygraph.toml");
    fs::write(&config, "[traversal]\nunreached_target = \"empty\"\n").unwrap();

    citygraph()
        .arg(fixture("triangle.json"))
        .arg("dijkstra")
        .arg("--config")
        .arg(&config)
        .args(["--unreached-target", "fail"])
        .write_stdin("C\nA\n")
        .assert()
        .code(4);
}

#[test]
fn test_config_from_env() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("citygraph.toml");
    fs::write(&config, "[traversal]\nunreached_target = \"empty\"\n").unwrap();

    citygraph()
        .env("CITYGRAPH_CONFIG", &config)
        .arg(fixture("triangle.json"))
        .arg("dijkstra")
        .write_stdin("C\nA\n")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_lenient_nodes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dangling.json");
    fs::write(&path, r#"{"Distances": {"A": {"X": 1, "B": 2}, "B": {}}}"#).unwrap();

    citygraph()
        .arg(&path)
        .arg("dfs")
        .write_stdin("A\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Vertex not found in dictionary: X"));

    citygraph()
        .arg(&path)
        .arg("dfs")
        .arg("--lenient-nodes")
        .write_stdin("A\n")
        .assert()
        .success()
        .stdout("A X B\n");
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr() {
    citygraph()
        .arg(fixture("triangle.json"))
        .arg("bfs")
        .arg("--verbose")
        .write_stdin("A\nC\n")
        .assert()
        .success()
        .stdout("A C\n")
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_log_level_is_quiet() {
    citygraph()
        .arg(fixture("triangle.json"))
        .arg("bfs")
        .write_stdin("A\nC\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}
