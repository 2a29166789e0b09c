//! # Configuration Report - Visual Reports for Build Configuration Graphs
//!
//! configuration-report turns a serialized description of a build project's
//! configuration graph into a visual + HTML report. It loads the graph,
//! formats it as dot-language text, renders the text to an image through an
//! external Graphviz layout program, and embeds the image in a templated
//! HTML report.
//!
//! ## Main Components
//!
//! - **Graph**: the [`graph::ConfigurationGraph`] value object and its
//!   deterministic dot formatter
//! - **Render**: the [`render::GraphRenderer`] process boundary with the
//!   Graphviz-backed default implementation
//! - **Report**: the [`report::GraphvizReportGenerator`] pipeline writing the
//!   dot, image, and HTML artifacts
//! - **BuildInfo**: packaged build metadata surfaced in the report footer
//!
//! ## Usage
//!
//! ### Example: Formatting a Graph as Dot Text
//!
//! ```
//! use configuration_report::common::ConfigBuilder;
//! use configuration_report::graph::{
//!     ConfigurationGraph, ConfigurationGraphDotFormatter, ConfigurationNode,
//! };
//!
//! # fn main() -> miette::Result<()> {
//! let graph = ConfigurationGraph::new(
//!     "main",
//!     vec![
//!         ConfigurationNode::builder()
//!             .with_name("api".to_string())
//!             .with_extends_from(vec![])
//!             .build()?,
//!         ConfigurationNode::builder()
//!             .with_name("implementation".to_string())
//!             .with_extends_from(vec!["api".to_string()])
//!             .build()?,
//!     ],
//! );
//!
//! let dot = ConfigurationGraphDotFormatter::new().format(&graph)?;
//! assert!(dot.contains(r#""implementation" -> "api""#));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Generating the Full Report
//!
//! ```no_run
//! use std::path::Path;
//!
//! use configuration_report::graph::ConfigurationGraph;
//! use configuration_report::report::{
//!     ConfigurationReportGenerator, GraphvizReportGenerator,
//! };
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Load the graph the build tool serialized
//! let graph = ConfigurationGraph::load(Path::new("build/configuration_graph.json"))?;
//!
//! // Step 2: Run the pipeline; requires Graphviz `dot` on the PATH
//! let generator = GraphvizReportGenerator::new("build/reports");
//! let report_path = generator.generate(&graph)?;
//!
//! println!("Report available at {}", report_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Swapping the Rendering Backend
//!
//! ```no_run
//! use configuration_report::graph::ConfigurationGraph;
//! use configuration_report::render::GraphvizRenderer;
//! use configuration_report::report::{
//!     ConfigurationReportGenerator, GraphvizReportGenerator,
//! };
//!
//! # fn main() -> miette::Result<()> {
//! # let graph = ConfigurationGraph::new("Empty", vec![]);
//! // Any GraphRenderer implementation plugs into the pipeline; here the
//! // external program is swapped for another Graphviz layout engine
//! let renderer = GraphvizRenderer::with_program("neato");
//! let generator = GraphvizReportGenerator::with_renderer("build/reports", renderer);
//! generator.generate(&graph)?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod build_info;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod render;
pub mod report;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
