//! HTML report formatting
//!
//! Fills the packaged report template with build metadata and a reference to
//! the rendered graph image. The template environment is rebuilt on every
//! call rather than cached, so a patched binary resource never fights stale
//! parser state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Local;
use minijinja::{Environment, Value};

use crate::build_info::BuildInfo;
use crate::constants::templates::TEMPLATE_FILE_BASE_NAME;
use crate::error::ConfigurationReportError;

/// Packaged template resource, embedded at build time
const TEMPLATE_SOURCE: &str = include_str!("templates/report_template.html");

/// Formatter which fills the packaged HTML template to produce pretty
/// configuration reports
pub struct HtmlReportFormatter {
    image_file: PathBuf,
    report_dir: PathBuf,
}

impl HtmlReportFormatter {
    pub fn new(image_file: impl Into<PathBuf>, report_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_file: image_file.into(),
            report_dir: report_dir.into(),
        }
    }

    /// Render the report with the default variables: static header/body text,
    /// the current date, build metadata, and the relative image path
    pub fn format(&self) -> Result<String, ConfigurationReportError> {
        let build_info = BuildInfo::get();

        let mut variables = HashMap::new();
        variables.insert(
            "header".to_string(),
            Value::from("Project Configurations"),
        );
        variables.insert(
            "main".to_string(),
            Value::from(
                "This report shows the dependency relationships between this project's \
                 configurations. Each box is a configuration; an arrow points at the \
                 configuration it extends.",
            ),
        );
        variables.insert(
            "today".to_string(),
            Value::from(Local::now().format("%Y-%m-%d %H:%M:%S").to_string()),
        );
        variables.insert("version".to_string(), Value::from(&*build_info.version));
        variables.insert("homepage".to_string(), Value::from(&*build_info.homepage));
        variables.insert("commit".to_string(), Value::from(&*build_info.commit));
        variables.insert(
            "image".to_string(),
            Value::from(self.relative_image_path().display().to_string()),
        );

        self.format_with(&variables)
    }

    /// Render the report template with an explicit variable mapping
    ///
    /// Recognized keys: `header`, `main`, `today`, `version`, `homepage`,
    /// `commit`, `image`. Missing keys render as empty text.
    pub fn format_with(
        &self,
        variables: &HashMap<String, Value>,
    ) -> Result<String, ConfigurationReportError> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_FILE_BASE_NAME, TEMPLATE_SOURCE)?;
        let template = env.get_template(TEMPLATE_FILE_BASE_NAME)?;
        let rendered = template.render(Value::from_serialize(variables))?;
        Ok(rendered)
    }

    /// Path to the image as referenced from the report document
    ///
    /// Both artifacts live in the output directory, so this is normally just
    /// the image file name; an image outside the report directory is
    /// referenced by its full path.
    fn relative_image_path(&self) -> &Path {
        self.image_file
            .strip_prefix(&self.report_dir)
            .unwrap_or(&self.image_file)
    }
}
