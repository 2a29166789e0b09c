//! Dot command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::DotConfig;
use crate::executors::CommandExecutor;
use crate::graph::{ConfigurationGraph, ConfigurationGraphDotFormatter};

pub struct DotExecutor;

impl CommandExecutor for DotExecutor {
    type Config = DotConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let graph = ConfigurationGraph::load(&config.graph_file)
            .wrap_err("Failed to load configuration graph")?;

        let dot_source = ConfigurationGraphDotFormatter::new()
            .format(&graph)
            .wrap_err("Failed to format dot source")?;

        // Determine output destination
        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        output_writer
            .write_all(dot_source.as_bytes())
            .into_diagnostic()
            .wrap_err("Failed to write dot output")?;
        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush dot output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Dot source written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
