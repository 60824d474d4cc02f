//! Snapshot tests for generated Mermaid output
//!
//! These tests compare generated diagrams against golden files in tests/fixtures/.
//! To update fixtures after an intentional output change, run the tests with UPDATE_FIXTURES=1

use std::fs;
use std::path::{Path, PathBuf};

use tfmermaid::plugins::MermaidGenerator;
use tfmermaid::{parse_state_file, DiagramKind, ResourceDatabase};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load(name: &str) -> ResourceDatabase {
    parse_state_file(fixture_path(name)).expect("fixture should parse")
}

/// Compare generated output to a fixture file
fn assert_fixture(name: &str, output: &str) {
    let path = fixture_path(&format!("{}.mmd", name));

    if std::env::var("UPDATE_FIXTURES").is_ok() {
        fs::write(&path, output).expect("failed to write fixture");
        println!("Updated fixture: {}", path.display());
        return;
    }

    let expected = fs::read_to_string(&path).unwrap_or_else(|_| {
        panic!(
            "Fixture not found: {}\nRun with UPDATE_FIXTURES=1 to create it.\n\nActual output:\n{}",
            path.display(),
            output
        )
    });

    if output != expected {
        panic!(
            "Snapshot mismatch for '{}'!\n\n=== Expected ===\n{}\n=== Actual ===\n{}\n=== Diff ===\nRun with UPDATE_FIXTURES=1 to update.",
            name, expected, output
        );
    }
}

#[test]
fn test_state_architecture() {
    let db = load("state.json");
    let output = MermaidGenerator::new(&db)
        .generate_architecture_diagram()
        .unwrap();
    assert_fixture("state_architecture", &output);
}

#[test]
fn test_plan_architecture() {
    let db = load("plan.json");
    let output = MermaidGenerator::new(&db)
        .generate_architecture_diagram()
        .unwrap();
    assert_fixture("plan_architecture", &output);
}

#[test]
fn test_legacy_architecture() {
    let db = load("legacy.tfstate");
    let output = MermaidGenerator::new(&db)
        .generate_architecture_diagram()
        .unwrap();
    assert_fixture("legacy_architecture", &output);
}

#[test]
fn test_empty_architecture() {
    let db = ResourceDatabase::new();
    let output = MermaidGenerator::new(&db)
        .generate_architecture_diagram()
        .unwrap();
    assert_fixture("empty_architecture", &output);
}

#[test]
fn test_network_is_static() {
    for db in [ResourceDatabase::new(), load("legacy.tfstate")] {
        let output = MermaidGenerator::new(&db)
            .generate(DiagramKind::Network)
            .unwrap();
        assert_fixture("network", &output);
    }
}

#[test]
fn test_dataflow_is_static() {
    for db in [ResourceDatabase::new(), load("state.json")] {
        let output = MermaidGenerator::new(&db)
            .generate(DiagramKind::DataFlow)
            .unwrap();
        assert_fixture("dataflow", &output);
    }
}
