use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/logistica.txt")
        .canonicalize()
        .expect("fixture edge list present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("logistics-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("LOGISTICS_GRAPH_PATH");
    cmd
}

fn prepare_command() -> Command {
    let mut cmd = cli();
    cmd.arg("--graph").arg(fixture_path());
    cmd
}

#[test]
fn route_reports_path_and_length() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Guatemala", "--to", "Quetzaltenango"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Shortest route from Guatemala to Quetzaltenango under normal weather: 220",
        ))
        .stdout(predicate::str::contains(
            "Guatemala -> Escuintla -> Mazatenango -> Quetzaltenango",
        ));
}

#[test]
fn storm_condition_changes_route() {
    let mut cmd = prepare_command();
    cmd.args([
        "--condition",
        "storm",
        "route",
        "--from",
        "Guatemala",
        "--to",
        "Quetzaltenango",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("under storm weather: 425"))
        .stdout(predicate::str::contains("Guatemala -> Antigua -> Quetzaltenango"));
}

#[test]
fn condition_accepts_menu_numbers() {
    let mut cmd = prepare_command();
    cmd.args(["--condition", "3", "edges"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Edges (8, undirected, snow):"));
}

#[test]
fn invalid_condition_is_rejected_by_parser() {
    let mut cmd = prepare_command();
    cmd.args(["--condition", "hail", "edges"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown weather condition: hail"));
}

#[test]
fn unknown_node_fails_with_message() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Guatemala", "--to", "Atlantis"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown node: Atlantis"));
}

#[test]
fn center_prints_matrix_and_center() {
    let mut cmd = prepare_command();
    cmd.arg("center");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Shortest travel times between every pair of nodes (normal):"))
        .stdout(predicate::str::contains("Graph center: Coban (eccentricity 430)"));
}

#[test]
fn center_json_has_matrix() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "center"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["center"], "Coban");
    assert_eq!(value["condition"], "normal");
    assert_eq!(value["matrix"]["nodes"].as_array().map(Vec::len), Some(7));
}

#[test]
fn directed_graph_without_return_edges_is_disconnected() {
    let mut cmd = prepare_command();
    cmd.args(["--directed", "center"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("graph is disconnected"));
}

#[test]
fn graph_path_can_come_from_environment() {
    let mut cmd = cli();
    cmd.env("LOGISTICS_GRAPH_PATH", fixture_path())
        .args(["route", "--from", "Coban", "--to", "Peten"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("under normal weather: 240"));
}

#[test]
fn missing_graph_file_is_reported() {
    let temp = tempdir().expect("create temp dir");
    let mut cmd = cli();
    cmd.current_dir(temp.path())
        .arg("--graph")
        .arg(temp.path().join("missing.txt"))
        .arg("edges");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load the logistics graph"))
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn malformed_edge_list_reports_line() {
    let temp = tempdir().expect("create temp dir");
    let path = temp.path().join("logistica.txt");
    fs::write(&path, "A B 1 2 3 4\nB C 1 2\n").expect("write edge list");

    let mut cmd = cli();
    cmd.arg("--graph").arg(temp.path()).arg("edges");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid edge record on line 2"));
}
