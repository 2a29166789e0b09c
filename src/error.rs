use std::path::PathBuf;
use std::process::ExitStatus;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Malformed configuration graph in '{file}'")]
#[diagnostic(
    code(configuration_report::deserialization_error),
    help("Check the graph JSON near the highlighted position")
)]
pub struct GraphParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("invalid here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigurationReportError {
    #[error("Failed to read graph file '{path}'")]
    #[diagnostic(
        code(configuration_report::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    GraphParseError(Box<GraphParseError>),

    #[error("Failed to write '{path}'")]
    #[diagnostic(
        code(configuration_report::io_error),
        help("Check that the output directory exists and is writable")
    )]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch graph renderer '{program}'")]
    #[diagnostic(
        code(configuration_report::render_error),
        help("Check that Graphviz is installed and '{program}' is on the PATH")
    )]
    RendererUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Graph renderer '{program}' exited with {status}")]
    #[diagnostic(
        code(configuration_report::render_error),
        help("The renderer rejected the dot input; stderr output follows:\n{stderr}")
    )]
    RenderFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to render report template")]
    #[diagnostic(
        code(configuration_report::template_error),
        help("This is likely an internal error - please report it")
    )]
    Template(#[from] minijinja::Error),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(configuration_report::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(configuration_report::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(configuration_report::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(configuration_report::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_graph_parse_error_display() {
        let source_code = "{ not valid json";
        let json_err = serde_json::from_str::<serde_json::Value>(source_code).unwrap_err();

        let error = GraphParseError {
            file: "graph.json".to_string(),
            source_code: NamedSource::new("graph.json", source_code.to_string()),
            span: Some((2, 3).into()),
            source: json_err,
        };

        let error_str = error.to_string();
        assert_eq!(error_str, "Malformed configuration graph in 'graph.json'");
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = ConfigurationReportError::FileReadError {
            path: PathBuf::from("/tmp/missing.json"),
            source: io_err,
        };

        let error_str = error.to_string();
        assert_eq!(error_str, "Failed to read graph file '/tmp/missing.json'");
    }

    #[test]
    fn test_renderer_unavailable_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let error = ConfigurationReportError::RendererUnavailable {
            program: "dot".to_string(),
            source: io_err,
        };

        let error_str = error.to_string();
        assert_eq!(error_str, "Failed to launch graph renderer 'dot'");
    }

    #[test]
    fn test_configuration_error() {
        let error = ConfigurationReportError::ConfigurationError {
            message: "Invalid configuration value".to_string(),
        };

        let error_str = error.to_string();
        assert_eq!(
            error_str,
            "Configuration error: Invalid configuration value"
        );
    }

    #[test]
    fn test_error_codes() {
        // Error variants must carry diagnostic codes and help text
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let file_err = ConfigurationReportError::FileWriteError {
            path: PathBuf::from("report.html"),
            source: io_err,
        };

        use miette::Diagnostic;
        assert!(file_err.code().is_some());
        assert!(file_err.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let report_err: ConfigurationReportError = io_err.into();

        match report_err {
            ConfigurationReportError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_str = "{invalid json}";
        let json_err = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let report_err: ConfigurationReportError = json_err.into();

        match report_err {
            ConfigurationReportError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
