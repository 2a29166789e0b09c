//! Configuration constants for configuration-report
//!
//! This module contains all configurable constants used throughout the
//! application. These values can be overridden through environment variables
//! where the CLI exposes them.

use std::time::Duration;

/// Report artifact configuration
pub mod artifacts {
    /// Graph description text written as the renderer input
    pub const DEFAULT_DOT_FILE_NAME: &str = "configuration_graph.dot";

    /// Rendered raster image referenced by the report
    pub const DEFAULT_IMAGE_FILE_NAME: &str = "configuration_graph.png";

    /// Final HTML report
    pub const DEFAULT_REPORT_FILE_NAME: &str = "configuration_report.html";
}

/// Rendered graph dimensions, in pixels
pub mod dimensions {
    pub const GRAPH_WIDTH: u32 = 1200;
    pub const GRAPH_HEIGHT: u32 = 1200;
}

/// External renderer configuration
pub mod renderer {
    /// Graphviz layout program invoked by default
    pub const DEFAULT_PROGRAM: &str = "dot";
}

/// Template resource configuration
pub mod templates {
    /// Template resource base name, without the .html extension
    pub const TEMPLATE_FILE_BASE_NAME: &str = "report_template";
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
}
