//! # Configuration Module
//!
//! This module provides configuration structures for all configuration-report
//! commands. Each command has its own config module with builder patterns for
//! easy construction.
//!
//! ## Command Configurations
//!
//! - **GenerateConfig**: Configuration for the `generate` command producing
//!   the full HTML report
//! - **DotConfig**: Configuration for the `dot` command emitting dot source
//!   only
//!
//! ## Example
//!
//! ```
//! use configuration_report::config::GenerateConfig;
//!
//! // Each configuration struct provides a builder pattern
//! // The builders are generated with the impl_builder! macro
//! // and provide with_* methods for each field
//! let builder = GenerateConfig::builder()
//!     .with_graph_file("graph.json".into())
//!     .with_output_dir("build/reports".into())
//!     .with_width(1200)
//!     .with_height(1200)
//!     .with_renderer("dot".to_string());
//! ```

pub mod dot;
pub mod generate;

pub use dot::DotConfig;
pub use generate::GenerateConfig;
