//! Dot command configuration

use std::path::PathBuf;

use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct DotConfig {
    pub graph_file: PathBuf,
    pub output: Option<PathBuf>,
}

impl DotConfig {
    pub fn builder() -> DotConfigBuilder {
        DotConfigBuilder::new()
    }
}

impl_builder! {
    DotConfigBuilder => DotConfig {
        with_graph_file => graph_file: PathBuf,
        with_output => output: Option<PathBuf>,
    }
}
