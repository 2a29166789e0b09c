//! Integration tests for the report pipeline using the library interface

use std::fs;

use configuration_report::common::ConfigBuilder;
use configuration_report::error::ConfigurationReportError;
use configuration_report::graph::{ConfigurationGraph, ConfigurationNode};
use configuration_report::render::{GraphRenderer, RenderOptions};
use configuration_report::report::{ConfigurationReportGenerator, GraphvizReportGenerator};
use predicates::prelude::*;
use tempfile::TempDir;

/// In-process renderer stand-in so the pipeline runs without Graphviz
struct StubRenderer;

impl GraphRenderer for StubRenderer {
    fn render(
        &self,
        dot_source: &str,
        _options: &RenderOptions,
    ) -> Result<Vec<u8>, ConfigurationReportError> {
        // A real backend would lay out the dot text; echoing it back is
        // enough to give the pipeline non-empty image bytes
        Ok(dot_source.as_bytes().to_vec())
    }
}

fn build_project_graph() -> ConfigurationGraph {
    ConfigurationGraph::new(
        "my-project",
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
                .with_name("testImplementation".to_string())
                .with_extends_from(vec!["implementation".to_string()])
                .build()
                .unwrap(),
        ],
    )
}

#[test]
fn generate_for_empty_graph_succeeds() {
    let output_dir = TempDir::new().unwrap();
    let generator = GraphvizReportGenerator::with_renderer(output_dir.path(), StubRenderer);

    let graph = ConfigurationGraph::new("Empty", vec![]);
    let report_path = generator.generate(&graph).unwrap();

    assert_eq!(
        report_path,
        output_dir.path().join("configuration_report.html")
    );

    // All three artifacts exist and are non-empty
    for name in [
        "configuration_graph.dot",
        "configuration_graph.png",
        "configuration_report.html",
    ] {
        let artifact = output_dir.path().join(name);
        assert!(artifact.exists(), "missing artifact {name}");
        assert!(fs::metadata(&artifact).unwrap().len() > 0, "empty {name}");
    }

    let html = fs::read_to_string(&report_path).unwrap();
    assert!(predicate::str::contains("Project Configurations").eval(&html));
}

#[test]
fn generate_from_serialized_graph_file() {
    let work_dir = TempDir::new().unwrap();
    let graph_file = work_dir.path().join("configuration_graph.json");

    build_project_graph().save(&graph_file).unwrap();
    let loaded = ConfigurationGraph::load(&graph_file).unwrap();
    assert_eq!(loaded, build_project_graph());

    let generator = GraphvizReportGenerator::with_renderer(work_dir.path(), StubRenderer);
    let report_path = generator.generate(&loaded).unwrap();

    let html = fs::read_to_string(report_path).unwrap();
    assert!(predicate::str::contains("configuration_graph.png").eval(&html));

    // The dot artifact carries every configuration and extends edge
    let dot = fs::read_to_string(work_dir.path().join("configuration_graph.dot")).unwrap();
    assert!(dot.contains(r#""api""#));
    assert!(dot.contains(r#""implementation" -> "api""#));
    assert!(dot.contains(r#""testImplementation" -> "implementation""#));
}

#[test]
fn generate_twice_overwrites_artifacts() {
    let output_dir = TempDir::new().unwrap();
    let generator = GraphvizReportGenerator::with_renderer(output_dir.path(), StubRenderer);

    generator.generate(&build_project_graph()).unwrap();
    let first_dot = fs::read_to_string(generator.dot_file()).unwrap();

    generator
        .generate(&ConfigurationGraph::new("Empty", vec![]))
        .unwrap();
    let second_dot = fs::read_to_string(generator.dot_file()).unwrap();

    assert_ne!(first_dot, second_dot);
    assert!(second_dot.starts_with("digraph \"Empty\""));
}

#[test]
fn report_footer_carries_build_metadata() {
    let output_dir = TempDir::new().unwrap();
    let generator = GraphvizReportGenerator::with_renderer(output_dir.path(), StubRenderer);

    let report_path = generator.generate(&build_project_graph()).unwrap();
    let html = fs::read_to_string(report_path).unwrap();

    let build_info = configuration_report::build_info::BuildInfo::get();
    assert!(html.contains(&build_info.version));
    assert!(html.contains(&build_info.homepage));
    assert!(html.contains(&build_info.commit));
}

#[test]
fn render_failure_propagates_and_leaves_partial_artifacts() {
    struct BrokenRenderer;

    impl GraphRenderer for BrokenRenderer {
        fn render(
            &self,
            _dot_source: &str,
            _options: &RenderOptions,
        ) -> Result<Vec<u8>, ConfigurationReportError> {
            Err(ConfigurationReportError::ConfigurationError {
                message: "layout engine failure".to_string(),
            })
        }
    }

    let output_dir = TempDir::new().unwrap();
    let generator = GraphvizReportGenerator::with_renderer(output_dir.path(), BrokenRenderer);

    let result = generator.generate(&build_project_graph());
    assert!(result.is_err());

    // No rollback: the dot file written before the failure stays on disk
    assert!(generator.dot_file().exists());
    assert!(!generator.image_file().exists());
    assert!(!generator.report_file().exists());
}
