//! Generate command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GenerateConfig;
use crate::error::ConfigurationReportError;

impl FromCommand for GenerateConfig {
    fn from_command(command: Commands) -> Result<Self, ConfigurationReportError> {
        match command {
            Commands::Generate {
                graph,
                output_dir,
                dimensions,
                renderer,
            } => GenerateConfig::builder()
                .with_graph_file(graph.graph_file)
                .with_output_dir(output_dir)
                .with_width(dimensions.width)
                .with_height(dimensions.height)
                .with_renderer(renderer)
                .build(),
            _ => Err(ConfigurationReportError::ConfigurationError {
                message: "Invalid command type for GenerateConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GenerateConfig);

/// Execute the generate command producing the full HTML report
pub fn execute_generate_command(command: Commands) -> Result<()> {
    let config = GenerateConfig::from_command(command)
        .wrap_err("Failed to parse generate command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::generate::GenerateExecutor;
    GenerateExecutor::execute(config)
}
