//! Generate command configuration

use std::path::PathBuf;

use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub graph_file: PathBuf,
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub renderer: String,
}

impl GenerateConfig {
    pub fn builder() -> GenerateConfigBuilder {
        GenerateConfigBuilder::new()
    }
}

impl_builder! {
    GenerateConfigBuilder => GenerateConfig {
        with_graph_file => graph_file: PathBuf,
        with_output_dir => output_dir: PathBuf,
        with_width => width: u32,
        with_height => height: u32,
        with_renderer => renderer: String,
    }
}
