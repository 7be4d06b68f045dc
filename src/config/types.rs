use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    /// Project directories, relative to the working directory
    #[serde(default = "default_projects")]
    pub projects: Vec<String>,

    /// First line of the pull request comment owned by this tool
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Login whose comments are searched for the marker
    #[serde(default = "default_author")]
    pub author: String,

    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct AnalyzerConfig {
    #[serde(default = "default_analyzer_binary")]
    pub binary: PathBuf,

    #[serde(default = "default_analyzer_args")]
    pub args: Vec<String>,

    /// Kill the analyzer after this many seconds (no limit when unset)
    #[serde(default)]
    pub timeout_sec: Option<u64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            binary: default_analyzer_binary(),
            args: default_analyzer_args(),
            timeout_sec: None,
        }
    }
}
