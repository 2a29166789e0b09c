use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{DimensionArgs, GraphSourceArgs};

#[derive(Parser)]
#[command(
    name = "configuration-report",
    about = "Generate visual + HTML reports of a build project's configuration graph",
    long_about = "configuration-report loads a serialized configuration graph, lays it out with \
                  an external Graphviz program, and embeds the rendered image in an HTML report. \
                  The build tool that produced the graph file consumes the returned report path.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the full HTML report for a configuration graph
    ///
    /// Runs the whole pipeline: formats the graph as dot text, renders it to
    /// an image via the external layout program, and writes an HTML report
    /// referencing the image. All three artifacts land in the output
    /// directory and are overwritten if present.
    #[command(
        long_about = "Generate the full HTML report for a serialized configuration graph. The \
                      pipeline writes three artifacts into the output directory: the dot source \
                      (configuration_graph.dot), the rendered image (configuration_graph.png), \
                      and the report itself (configuration_report.html). Artifacts from a \
                      previous run are overwritten. The report path is printed on success."
    )]
    Generate {
        #[command(flatten)]
        graph: GraphSourceArgs,

        /// Directory the report artifacts are written to
        #[arg(
            short,
            long,
            default_value = ".",
            env = "CONFIGURATION_REPORT_OUTPUT_DIR"
        )]
        output_dir: PathBuf,

        #[command(flatten)]
        dimensions: DimensionArgs,

        /// Graphviz layout program to render with
        #[arg(
            long,
            default_value = crate::constants::renderer::DEFAULT_PROGRAM,
            env = "CONFIGURATION_REPORT_RENDERER"
        )]
        renderer: String,
    },

    /// Write the graph's dot-language source without rendering it
    ///
    /// Useful for inspecting the renderer input or feeding the graph into
    /// other Graphviz tooling directly.
    #[command(
        long_about = "Format a serialized configuration graph as dot-language text without \
                      invoking the external renderer. Output goes to stdout unless --output \
                      names a file."
    )]
    Dot {
        #[command(flatten)]
        graph: GraphSourceArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "CONFIGURATION_REPORT_OUTPUT")]
        output: Option<PathBuf>,
    },
}
