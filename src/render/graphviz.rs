//! Graphviz rendering backend
//!
//! Invokes the external Graphviz layout program as a child process, feeding
//! dot source on stdin and collecting the rendered image from stdout.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::constants::renderer::DEFAULT_PROGRAM;
use crate::error::ConfigurationReportError;
use crate::render::{GraphRenderer, RenderOptions};

/// Graphviz `-Gsize` is measured in inches; pair it with a fixed dpi so the
/// requested pixel dimensions come out exact.
const RENDER_DPI: u32 = 72;

/// Renders graphs by invoking an external Graphviz layout program
pub struct GraphvizRenderer {
    program: String,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphvizRenderer {
    /// Renderer invoking the default `dot` program
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Renderer invoking a specific layout program (e.g. `neato`, or a
    /// non-PATH `dot` binary)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn geometry_args(options: &RenderOptions) -> Vec<String> {
        let width_in = f64::from(options.width) / f64::from(RENDER_DPI);
        let height_in = f64::from(options.height) / f64::from(RENDER_DPI);
        vec![
            format!("-T{}", options.format.as_renderer_arg()),
            format!("-Gdpi={RENDER_DPI}"),
            format!("-Gsize={width_in:.3},{height_in:.3}!"),
        ]
    }
}

impl GraphRenderer for GraphvizRenderer {
    fn render(
        &self,
        dot_source: &str,
        options: &RenderOptions,
    ) -> Result<Vec<u8>, ConfigurationReportError> {
        let mut child = Command::new(&self.program)
            .args(Self::geometry_args(options))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ConfigurationReportError::RendererUnavailable {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(dot_source.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(ConfigurationReportError::RenderFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output.stdout)
    }
}
