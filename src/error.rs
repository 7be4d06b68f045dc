use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Runner error: {0}")]
    Runner(#[from] RunnerError),

    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("No projects configured")]
    NoProjects,

    #[error("per_page must be between 1 and 100, got {0}")]
    InvalidPageSize(u32),

    #[error("Comment marker must not be empty")]
    EmptyMarker,

    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error("Invalid repository '{0}', expected owner/repo")]
    InvalidRepository(String),

    #[error("Failed to read event payload '{path}': {source}")]
    ReadEvent {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse event payload '{path}': {source}")]
    ParseEvent {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Execution timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Failed to launch '{binary}': {source}")]
    Spawn {
        binary: String,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Analysis of '{directory}' failed: {source}")]
    Provider {
        directory: String,
        #[source]
        source: ProviderError,
    },
}

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("gh CLI failed: {0}")]
    GhCli(String),

    #[error("Failed to parse gh output: {0}")]
    ParseOutput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write report: {0}")]
    WriteReport(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
