//! Dot-language formatting for configuration graphs

use std::fmt::Write;

use crate::error::ConfigurationReportError;
use crate::graph::ConfigurationGraph;
use crate::utils::string::quote_dot_id;

// Blue-Grey palette matching the report's styling
mod colors {
    pub const NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const EXTENDS_EDGE: &str = "#64B5F6"; // Soft blue
}

/// Formats a [`ConfigurationGraph`] as dot-language source text
///
/// The output is deterministic: nodes appear in insertion order and edges in
/// declaration order, so the same graph always produces identical text.
pub struct ConfigurationGraphDotFormatter;

impl Default for ConfigurationGraphDotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationGraphDotFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, graph: &ConfigurationGraph) -> Result<String, ConfigurationReportError> {
        let mut output = String::new();

        writeln!(output, "digraph {} {{", quote_dot_id(graph.name()))?;
        writeln!(output, "    rankdir=LR;")?;
        writeln!(
            output,
            r#"    node [shape=box, style="rounded,filled", fillcolor="{}", color="{}", penwidth=2];"#,
            colors::NODE_FILL,
            colors::NODE_STROKE
        )?;

        if !graph.nodes().is_empty() {
            writeln!(output)?;
            for node in graph.nodes() {
                writeln!(
                    output,
                    "    {} [label={}];",
                    quote_dot_id(&node.name),
                    quote_dot_id(&node.name)
                )?;
            }

            writeln!(output)?;
            for node in graph.nodes() {
                for parent in &node.extends_from {
                    writeln!(
                        output,
                        r#"    {} -> {} [label="extends", color="{}"];"#,
                        quote_dot_id(&node.name),
                        quote_dot_id(parent),
                        colors::EXTENDS_EDGE
                    )?;
                }
            }
        }

        writeln!(output, "}}")?;
        Ok(output)
    }
}
