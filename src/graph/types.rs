//! Core graph types
//!
//! This module contains the fundamental data structures describing a build
//! project's configuration graph.

use std::fs;
use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationReportError, GraphParseError};
use crate::impl_builder;

/// A vertex representing one configuration in the dependency graph
///
/// A configuration is a named set of dependencies/artifacts scoped to a
/// purpose (e.g. compile, runtime). Its edges point at the configurations it
/// extends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationNode {
    pub name: String,
    #[serde(default)]
    pub extends_from: Vec<String>,
}

impl ConfigurationNode {
    pub fn builder() -> ConfigurationNodeBuilder {
        ConfigurationNodeBuilder::new()
    }
}

impl_builder! {
    ConfigurationNodeBuilder => ConfigurationNode {
        with_name => name: String,
        with_extends_from => extends_from: Vec<String>,
    }
}

/// In-memory representation of a project's configuration graph
///
/// Node order is insertion order and is preserved through serialization, so
/// rendering the same graph always produces the same output. The graph is a
/// value object: constructed once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationGraph {
    name: String,
    nodes: Vec<ConfigurationNode>,
}

impl ConfigurationGraph {
    pub fn new(name: impl Into<String>, nodes: Vec<ConfigurationNode>) -> Self {
        Self {
            name: name.into(),
            nodes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[ConfigurationNode] {
        &self.nodes
    }

    /// Deserialize a graph from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigurationReportError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigurationReportError::FileReadError {
                path: path.to_path_buf(),
                source,
            })?;

        serde_json::from_str(&contents).map_err(|source| {
            let file = path.display().to_string();
            let span = error_span(&contents, &source);
            ConfigurationReportError::GraphParseError(Box::new(GraphParseError {
                file: file.clone(),
                source_code: NamedSource::new(file, contents),
                span,
                source,
            }))
        })
    }

    /// Serialize the graph to a JSON file, overwriting any existing file
    pub fn save(&self, path: &Path) -> Result<(), ConfigurationReportError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ConfigurationReportError::FileWriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Translate serde_json's line/column position into a byte-offset span
fn error_span(contents: &str, err: &serde_json::Error) -> Option<SourceSpan> {
    if err.line() == 0 {
        return None;
    }
    let offset: usize = contents
        .lines()
        .take(err.line() - 1)
        .map(|line| line.len() + 1)
        .sum::<usize>()
        + err.column().saturating_sub(1);
    Some((offset.min(contents.len()), 1).into())
}
