//! Command implementations for the configuration-report CLI
//!
//! This module contains the implementations for each CLI command:
//! - generate: Produce the full HTML report for a configuration graph
//! - dot: Emit the graph's dot-language source without rendering

pub mod dot;
pub mod generate;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Generate { .. } => generate::execute_generate_command(command),
        Commands::Dot { .. } => dot::execute_dot_command(command),
    }
}
