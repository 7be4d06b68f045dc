pub mod report;
pub mod run;
pub mod schema;

use crate::config::Config;
use crate::error::ConfigError;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "unimported-report")]
#[command(
    author,
    version,
    about = "Run unimported across projects and keep a pull request report comment up to date"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze projects and post the report to the current pull request
    Run(RunArgs),

    /// Analyze projects and print the report locally
    Report(ReportArgs),

    /// Print JSON Schema for the unimported.yaml config
    Schema(SchemaArgs),
}

#[derive(Parser, Clone)]
pub struct RunArgs {
    /// Path to config file (default: unimported.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Comma-separated project directories
    #[arg(long, env = "INPUT_PROJECTS")]
    pub projects: Option<String>,

    /// Token used to call the GitHub API
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository (owner/repo)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: Option<String>,

    /// Pull request number (default: taken from the event payload)
    #[arg(long)]
    pub pr: Option<u64>,

    /// Workflow event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Directory project paths are relative to (default: current dir)
    #[arg(long)]
    pub working_dir: Option<PathBuf>,

    /// Also write the report as markdown and JSON into this directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Print the comment body instead of posting it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Clone)]
pub struct ReportArgs {
    /// Path to config file (default: unimported.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Comma-separated project directories
    #[arg(long)]
    pub projects: Option<String>,

    /// Directory project paths are relative to (default: current dir)
    #[arg(long)]
    pub working_dir: Option<PathBuf>,

    /// Also write the report as markdown and JSON into this directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Exit 1 if any project has findings (CI mode)
    #[arg(long)]
    pub fail_on_findings: bool,
}

#[derive(Parser, Clone)]
pub struct SchemaArgs {
    /// Write the schema to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Load config, apply the project override and validate
fn load_config(path: Option<&Path>, projects: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = Config::resolve(path)?;
    config.apply_projects(projects);
    config.validate()?;
    Ok(config)
}

fn working_dir(arg: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match arg {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}
