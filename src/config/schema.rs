use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::report::DEFAULT_TOP_N;

/// Configuration file contents.
///
/// Scoring tables are fixed; only where data comes from and how the report
/// is shaped can be configured.
///
/// Example YAML:
/// ```yaml
/// input: inventory/applications.json
/// report:
///   top_n: 10
/// export: out/results.json
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the inventory JSON (default: applications.json)
    #[serde(default = "default_input")]
    pub input: PathBuf,

    #[serde(default)]
    pub report: ReportConfig,

    /// Write results and report as JSON here after rating
    #[serde(default)]
    pub export: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            report: ReportConfig::default(),
            export: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Number of riskiest applications to list (default: 5)
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("applications.json")
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}
