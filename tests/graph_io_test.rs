//! Integration tests for graph (de)serialization

use std::fs;

use configuration_report::common::ConfigBuilder;
use configuration_report::error::ConfigurationReportError;
use configuration_report::graph::{ConfigurationGraph, ConfigurationNode};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SAMPLE_GRAPH_JSON: &str = r#"{
    "name": "sample-project",
    "nodes": [
        { "name": "api", "extends_from": [] },
        { "name": "implementation", "extends_from": ["api"] },
        { "name": "runtimeOnly", "extends_from": ["implementation"] }
    ]
}"#;

fn sample_graph() -> ConfigurationGraph {
    ConfigurationGraph::new(
        "sample-project",
        vec![
            ConfigurationNode::builder()
                .with_name("api".to_string())
                .with_extends_from(vec![])
                .build()
                .unwrap(),
            ConfigurationNode::builder()
                .with_name("implementation".to_string())
                .with_extends_from(vec!["api".to_string()])
                .build()
                .unwrap(),
            ConfigurationNode::builder()
                .with_name("runtimeOnly".to_string())
                .with_extends_from(vec!["implementation".to_string()])
                .build()
                .unwrap(),
        ],
    )
}

#[test]
fn load_deserializes_sample_graph_file() {
    let work_dir = TempDir::new().unwrap();
    let graph_file = work_dir.path().join("sample_graph.json");
    fs::write(&graph_file, SAMPLE_GRAPH_JSON).unwrap();

    let graph = ConfigurationGraph::load(&graph_file).unwrap();

    assert_eq!(graph, sample_graph());
}

#[test]
fn save_then_load_round_trips() {
    let work_dir = TempDir::new().unwrap();
    let graph_file = work_dir.path().join("round_trip.json");

    let graph = sample_graph();
    graph.save(&graph_file).unwrap();
    let loaded = ConfigurationGraph::load(&graph_file).unwrap();

    assert_eq!(graph, loaded);
}

#[test]
fn load_missing_file_is_read_error() {
    let work_dir = TempDir::new().unwrap();
    let missing = work_dir.path().join("does_not_exist.json");

    let result = ConfigurationGraph::load(&missing);

    match result {
        Err(ConfigurationReportError::FileReadError { path, .. }) => {
            assert_eq!(path, missing);
        }
        other => panic!("Expected FileReadError, got {other:?}"),
    }
}

#[test]
fn load_malformed_file_is_parse_error() {
    let work_dir = TempDir::new().unwrap();
    let graph_file = work_dir.path().join("broken.json");
    fs::write(&graph_file, "{ \"name\": \"oops\", \"nodes\": [ { ]").unwrap();

    let result = ConfigurationGraph::load(&graph_file);

    match result {
        Err(ConfigurationReportError::GraphParseError(parse_error)) => {
            assert!(parse_error.file.ends_with("broken.json"));
        }
        other => panic!("Expected GraphParseError, got {other:?}"),
    }
}

#[test]
fn load_rejects_wrong_shape() {
    let work_dir = TempDir::new().unwrap();
    let graph_file = work_dir.path().join("wrong_shape.json");
    fs::write(&graph_file, r#"{ "title": "not a graph" }"#).unwrap();

    let result = ConfigurationGraph::load(&graph_file);

    assert!(matches!(
        result,
        Err(ConfigurationReportError::GraphParseError(_))
    ));
}

#[test]
fn separately_constructed_empty_graphs_are_equal() {
    let first = ConfigurationGraph::new("Empty", vec![]);
    let second = ConfigurationGraph::new("Empty", vec![]);

    assert_eq!(first, second);
}
