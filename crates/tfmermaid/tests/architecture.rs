//! Integration tests for the architecture diagram

use serde_json::json;
use tfmermaid::plugins::{ArchitectureRenderer, CloudRunSqlRule, MermaidGenerator};
use tfmermaid::{parse_state, Renderer, ResourceDatabase};

fn legacy(resources: serde_json::Value) -> ResourceDatabase {
    parse_state(&json!({ "version": 4, "resources": resources }).to_string()).unwrap()
}

fn dashed_edges(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.contains("-.->|connects to|"))
        .map(|line| line.trim().to_string())
        .collect()
}

#[test]
fn test_cloud_run_with_sql_dependency_gets_one_dashed_edge() {
    let db = legacy(json!([
        { "type": "google_sql_database_instance", "name": "pg", "instances": [{}] },
        { "type": "google_cloud_run_service", "name": "web", "instances": [{
            "dependencies": ["google_sql_database_instance.pg"]
        }] }
    ]));
    let output = MermaidGenerator::new(&db)
        .generate_architecture_diagram()
        .unwrap();

    assert_eq!(
        dashed_edges(&output),
        vec!["google_cloud_run_service_web -.->|connects to| google_sql_database_instance_pg"]
    );
    assert!(output.contains("    google_cloud_run_service_web --> google_sql_database_instance_pg"));
}

#[test]
fn test_cloud_run_without_sql_dependency_gets_none() {
    let db = legacy(json!([
        { "type": "google_storage_bucket", "name": "assets", "instances": [{}] },
        { "type": "google_cloud_run_service", "name": "web", "instances": [{
            "dependencies": ["google_storage_bucket.assets"]
        }] }
    ]));
    let output = MermaidGenerator::new(&db)
        .generate_architecture_diagram()
        .unwrap();
    assert!(dashed_edges(&output).is_empty());
}

#[test]
fn test_dangling_dependencies_are_silently_dropped() {
    let db = legacy(json!([
        { "type": "google_storage_bucket", "name": "assets", "instances": [{
            "dependencies": ["google_kms_crypto_key.key", "module.x.google_project.p"]
        }] }
    ]));
    let output = MermaidGenerator::new(&db)
        .generate_architecture_diagram()
        .unwrap();
    assert!(!output.contains("-->"));
    assert!(!output.contains("kms"));
}

#[test]
fn test_iam_members_have_no_inferred_edges() {
    let db = legacy(json!([
        { "type": "google_cloud_run_service", "name": "web", "instances": [{}] },
        { "type": "google_cloud_run_service_iam_member", "name": "public", "instances": [{
            "dependencies": ["google_cloud_run_service.web"]
        }] }
    ]));
    let output = MermaidGenerator::new(&db)
        .generate_architecture_diagram()
        .unwrap();
    assert!(dashed_edges(&output).is_empty());
    assert!(output.contains("google_cloud_run_service_iam_member_public --> google_cloud_run_service_web"));
}

#[test]
fn test_styles_emitted_for_unconnected_resources() {
    let db = legacy(json!([
        { "type": "google_compute_network", "name": "vpc", "instances": [{}] }
    ]));
    let output = MermaidGenerator::new(&db)
        .generate_architecture_diagram()
        .unwrap();
    assert!(output.contains("subgraph Other"));
    assert!(output.contains("google_compute_network_vpc[🔧 Vpc]"));
    assert!(output.ends_with("    style google_compute_network_vpc fill:#607d8b,stroke:#333,color:#fff"));
}

#[test]
fn test_for_each_instances_get_distinct_nodes() {
    let db = parse_state(
        &json!({ "planned_values": { "root_module": { "resources": [
            { "address": "google_project_service.apis[\"run.googleapis.com\"]",
              "type": "google_project_service", "name": "apis", "values": {} },
            { "address": "google_project_service.apis[\"iam.googleapis.com\"]",
              "type": "google_project_service", "name": "apis", "values": {} }
        ] } } })
        .to_string(),
    )
    .unwrap();
    let chart = ArchitectureRenderer::new().build(&db).unwrap();
    let ids: Vec<&str> = chart.declared_ids().into_iter().collect();
    assert_eq!(
        ids,
        vec!["google_project_service_apis_iam", "google_project_service_apis_run"]
    );
}

#[test]
fn test_renderer_without_rules_emits_only_declared_edges() {
    let db = legacy(json!([
        { "type": "google_sql_database_instance", "name": "pg", "instances": [{}] },
        { "type": "google_cloud_run_service", "name": "web", "instances": [{
            "dependencies": ["google_sql_database_instance.pg"]
        }] }
    ]));
    let bare = ArchitectureRenderer::with_rules(Vec::new());
    let with_sql = ArchitectureRenderer::with_rules(vec![Box::new(CloudRunSqlRule)]);

    assert_eq!(bare.build(&db).unwrap().edge_count(), 1);
    assert_eq!(with_sql.build(&db).unwrap().edge_count(), 2);
}
