//! # Report Generation Module
//!
//! Drives the report pipeline: format the configuration graph as dot text,
//! render it to an image through a [`GraphRenderer`](crate::render::GraphRenderer),
//! and wrap the image in an HTML report.
//!
//! Artifacts land in the generator's output directory under fixed names and
//! are overwritten on every `generate` call. A failure mid-pipeline aborts
//! the remaining steps and leaves the artifacts written so far in place;
//! rerunning `generate` simply overwrites them.

pub mod html;

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::artifacts::{
    DEFAULT_DOT_FILE_NAME, DEFAULT_IMAGE_FILE_NAME, DEFAULT_REPORT_FILE_NAME,
};
use crate::error::ConfigurationReportError;
use crate::graph::{ConfigurationGraph, ConfigurationGraphDotFormatter};
use crate::render::{GraphRenderer, GraphvizRenderer, RenderOptions};

pub use html::HtmlReportFormatter;

/// Common trait for configuration report generators
pub trait ConfigurationReportGenerator {
    /// Generate the report for a graph, returning the report file path
    fn generate(&self, graph: &ConfigurationGraph) -> Result<PathBuf, ConfigurationReportError>;

    /// Path the report will be written to
    fn report_file(&self) -> &Path;
}

/// Report generator backed by an external graph-layout engine
///
/// Writes three artifacts into the output directory: the dot source, the
/// rendered image, and the final HTML report. Concurrent `generate` calls
/// into the same output directory race on those paths; callers serialize or
/// use distinct directories.
pub struct GraphvizReportGenerator<R: GraphRenderer = GraphvizRenderer> {
    output_dir: PathBuf,
    dot_file: PathBuf,
    image_file: PathBuf,
    report_file: PathBuf,
    render_options: RenderOptions,
    renderer: R,
    graph_formatter: ConfigurationGraphDotFormatter,
}

impl GraphvizReportGenerator {
    /// Generator rendering through the default Graphviz `dot` program
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_renderer(output_dir, GraphvizRenderer::new())
    }
}

impl<R: GraphRenderer> GraphvizReportGenerator<R> {
    /// Generator rendering through a specific backend
    pub fn with_renderer(output_dir: impl Into<PathBuf>, renderer: R) -> Self {
        let output_dir = output_dir.into();
        let dot_file = output_dir.join(DEFAULT_DOT_FILE_NAME);
        let image_file = output_dir.join(DEFAULT_IMAGE_FILE_NAME);
        let report_file = output_dir.join(DEFAULT_REPORT_FILE_NAME);

        Self {
            output_dir,
            dot_file,
            image_file,
            report_file,
            render_options: RenderOptions::default(),
            renderer,
            graph_formatter: ConfigurationGraphDotFormatter::new(),
        }
    }

    /// Override the rendered image dimensions/format
    pub fn with_render_options(mut self, render_options: RenderOptions) -> Self {
        self.render_options = render_options;
        self
    }

    pub fn dot_file(&self) -> &Path {
        &self.dot_file
    }

    pub fn image_file(&self) -> &Path {
        &self.image_file
    }

    fn write_dot_file(&self, dot_source: &str) -> Result<(), ConfigurationReportError> {
        write_artifact(&self.dot_file, dot_source.as_bytes())
    }

    fn write_image_file(&self, image: &[u8]) -> Result<(), ConfigurationReportError> {
        write_artifact(&self.image_file, image)
    }

    fn write_report(&self) -> Result<(), ConfigurationReportError> {
        let formatter = HtmlReportFormatter::new(&self.image_file, &self.output_dir);
        let html = formatter.format()?;
        write_artifact(&self.report_file, html.as_bytes())
    }
}

impl<R: GraphRenderer> ConfigurationReportGenerator for GraphvizReportGenerator<R> {
    fn generate(
        &self,
        graph: &ConfigurationGraph,
    ) -> Result<PathBuf, ConfigurationReportError> {
        let dot_source = self.graph_formatter.format(graph)?;
        self.write_dot_file(&dot_source)?;

        let image = self.renderer.render(&dot_source, &self.render_options)?;
        self.write_image_file(&image)?;

        self.write_report()?;

        Ok(self.report_file.clone())
    }

    fn report_file(&self) -> &Path {
        &self.report_file
    }
}

/// Each artifact is written and closed before the next pipeline step begins
fn write_artifact(path: &Path, contents: &[u8]) -> Result<(), ConfigurationReportError> {
    fs::write(path, contents).map_err(|source| ConfigurationReportError::FileWriteError {
        path: path.to_path_buf(),
        source,
    })
}
