//! Build metadata packaged with the binary
//!
//! The metadata file is embedded at compile time and parsed once, on first
//! access. It records which build of the tool produced a given report and
//! feeds the version/homepage/commit variables of the HTML template.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Packaged metadata resource, embedded at build time
const BUILD_INFO_TOML: &str = include_str!("build_info.toml");

static BUILD_INFO: LazyLock<BuildInfo> = LazyLock::new(|| {
    toml::from_str(BUILD_INFO_TOML).expect("embedded build_info.toml must be well-formed")
});

/// Immutable build metadata for the running binary
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BuildInfo {
    /// Human-readable project name
    pub name: String,

    /// Release version of this build
    pub version: String,

    /// Project homepage URL
    pub homepage: String,

    /// Git commit hash the build was produced from
    pub commit: String,

    /// Timestamp of the build
    pub build_time: DateTime<Utc>,
}

impl BuildInfo {
    /// Process-wide build metadata, parsed on first access
    ///
    /// # Panics
    ///
    /// Panics if the embedded metadata resource is malformed, which is a
    /// packaging error rather than a runtime condition.
    pub fn get() -> &'static BuildInfo {
        &BUILD_INFO
    }
}
