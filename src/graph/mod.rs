//! # Configuration Graph Module
//!
//! This module provides the in-memory representation of a project's
//! configuration graph and its dot-language formatting.
//!
//! ## Components
//!
//! - **ConfigurationGraph**: the graph value object; structural equality,
//!   JSON (de)serialization via [`ConfigurationGraph::load`] and
//!   [`ConfigurationGraph::save`]
//! - **ConfigurationNode**: one configuration and the configurations it
//!   extends
//! - **ConfigurationGraphDotFormatter**: deterministic dot-language output
//!
//! ## Example
//!
//! ```
//! use configuration_report::common::ConfigBuilder;
//! use configuration_report::graph::{
//!     ConfigurationGraph, ConfigurationGraphDotFormatter, ConfigurationNode,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = ConfigurationGraph::new(
//!     "main",
//!     vec![
//!         ConfigurationNode::builder()
//!             .with_name("api".to_string())
//!             .with_extends_from(vec![])
//!             .build()?,
//!         ConfigurationNode::builder()
//!             .with_name("implementation".to_string())
//!             .with_extends_from(vec!["api".to_string()])
//!             .build()?,
//!     ],
//! );
//!
//! let dot = ConfigurationGraphDotFormatter::new().format(&graph)?;
//! assert!(dot.contains(r#""implementation" -> "api""#));
//! # Ok(())
//! # }
//! ```

pub mod dot;
pub mod types;

pub use dot::ConfigurationGraphDotFormatter;
pub use types::{ConfigurationGraph, ConfigurationNode};
