//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Arguments shared by commands that consume a serialized graph
#[derive(Args, Debug, Clone)]
pub struct GraphSourceArgs {
    /// Path to the serialized configuration graph
    #[arg(value_name = "GRAPH_FILE", env = "CONFIGURATION_REPORT_GRAPH_FILE")]
    pub graph_file: PathBuf,
}

/// Rendered image dimension arguments
#[derive(Args, Debug, Clone)]
pub struct DimensionArgs {
    /// Width of the rendered graph image, in pixels
    #[arg(
        long,
        default_value_t = crate::constants::dimensions::GRAPH_WIDTH,
        env = "CONFIGURATION_REPORT_GRAPH_WIDTH"
    )]
    pub width: u32,

    /// Height of the rendered graph image, in pixels
    #[arg(
        long,
        default_value_t = crate::constants::dimensions::GRAPH_HEIGHT,
        env = "CONFIGURATION_REPORT_GRAPH_HEIGHT"
    )]
    pub height: u32,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::ConfigurationReportError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(
        command: crate::cli::Commands,
    ) -> Result<Self, crate::error::ConfigurationReportError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::ConfigurationReportError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Macro to generate a `with_*` builder struct and its [`ConfigBuilder`] impl
/// for a configuration type where every field is required
#[macro_export]
macro_rules! impl_builder {
    ($builder:ident => $config:ident { $($setter:ident => $field:ident: $ty:ty),+ $(,)? }) => {
        #[derive(Default)]
        pub struct $builder {
            $($field: Option<$ty>,)+
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )+
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $config;

            fn build(self) -> Result<Self::Config, $crate::error::ConfigurationReportError> {
                Ok($config {
                    $(
                        $field: self.$field.ok_or_else(|| {
                            $crate::error::ConfigurationReportError::ConfigurationError {
                                message: concat!(
                                    "Missing required field: ",
                                    stringify!($field)
                                )
                                .to_string(),
                            }
                        })?,
                    )+
                })
            }
        }
    };
}
