//! Generate command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::GenerateConfig;
use crate::executors::CommandExecutor;
use crate::graph::ConfigurationGraph;
use crate::progress::ProgressReporter;
use crate::render::{GraphvizRenderer, ImageFormat, RenderOptions};
use crate::report::{ConfigurationReportGenerator, GraphvizReportGenerator};

pub struct GenerateExecutor;

impl CommandExecutor for GenerateExecutor {
    type Config = GenerateConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating configuration report...",
            style("📊").cyan()
        );

        let mut progress = ProgressReporter::new();

        let graph = ConfigurationGraph::load(&config.graph_file)
            .wrap_err("Failed to load configuration graph")?;
        progress.graph_loaded(graph.name(), graph.nodes().len());

        let renderer = GraphvizRenderer::with_program(&config.renderer);
        let generator = GraphvizReportGenerator::with_renderer(&config.output_dir, renderer)
            .with_render_options(RenderOptions::new(
                config.width,
                config.height,
                ImageFormat::Png,
            ));

        progress.start_render(&config.renderer);
        let result = generator.generate(&graph);
        progress.finish_render();

        let report_path = result.wrap_err("Failed to generate configuration report")?;
        progress.report_written(&report_path);

        // The report path on stdout is the machine-consumable output
        println!("{}", report_path.display());

        Ok(())
    }
}
