//! Dot command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::DotConfig;
use crate::error::ConfigurationReportError;

impl FromCommand for DotConfig {
    fn from_command(command: Commands) -> Result<Self, ConfigurationReportError> {
        match command {
            Commands::Dot { graph, output } => DotConfig::builder()
                .with_graph_file(graph.graph_file)
                .with_output(output)
                .build(),
            _ => Err(ConfigurationReportError::ConfigurationError {
                message: "Invalid command type for DotConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(DotConfig);

/// Execute the dot command emitting dot source only
pub fn execute_dot_command(command: Commands) -> Result<()> {
    let config =
        DotConfig::from_command(command).wrap_err("Failed to parse dot command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::dot::DotExecutor;
    DotExecutor::execute(config)
}
