//! # Graph Rendering Module
//!
//! The rendering engine sits behind a process boundary: the pipeline hands
//! dot source text to a [`GraphRenderer`] and gets image bytes back, so the
//! backend is swappable without touching the report pipeline.
//!
//! - **GraphRenderer**: narrow rendering interface
//! - **GraphvizRenderer**: default backend invoking the external Graphviz
//!   `dot` program

pub mod graphviz;

use crate::error::ConfigurationReportError;

/// Raster/vector output format requested from the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// Format name as understood by the rendering engine
    pub fn as_renderer_arg(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Output dimensions and format for a render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

impl RenderOptions {
    pub fn new(width: u32, height: u32, format: ImageFormat) -> Self {
        Self {
            width,
            height,
            format,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: crate::constants::dimensions::GRAPH_WIDTH,
            height: crate::constants::dimensions::GRAPH_HEIGHT,
            format: ImageFormat::Png,
        }
    }
}

/// Narrow interface to a graph-layout engine
pub trait GraphRenderer {
    /// Render dot source text into image bytes
    fn render(
        &self,
        dot_source: &str,
        options: &RenderOptions,
    ) -> Result<Vec<u8>, ConfigurationReportError>;
}

pub use graphviz::GraphvizRenderer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_render_options() {
        let options = RenderOptions::default();
        assert_eq!(options.width, 1200);
        assert_eq!(options.height, 1200);
        assert_eq!(options.format, ImageFormat::Png);
    }

    #[test]
    fn test_image_format_renderer_args() {
        assert_eq!(ImageFormat::Png.as_renderer_arg(), "png");
        assert_eq!(ImageFormat::Svg.as_renderer_arg(), "svg");
    }
}
