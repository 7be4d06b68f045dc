use crate::error::RunnerError;
use crate::parser::ProjectResult;
use crate::provider::Analyzer;
use futures::future::try_join_all;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::executor::analyze_project;

#[derive(Debug)]
pub struct RunReport {
    pub results: Vec<ProjectResult>,
    pub total_duration: Duration,
}

impl RunReport {
    pub fn flagged_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_flagged()).count()
    }
}

pub struct Orchestrator {
    analyzer: Arc<dyn Analyzer>,
    working_dir: PathBuf,
}

impl Orchestrator {
    pub fn new(analyzer: Arc<dyn Analyzer>, working_dir: PathBuf) -> Self {
        Self {
            analyzer,
            working_dir,
        }
    }

    /// Analyze every project at once. Results keep the order of `projects`;
    /// the first fatal error aborts the whole run.
    pub async fn run(&self, projects: &[String]) -> Result<RunReport, RunnerError> {
        let start = std::time::Instant::now();
        info!("Analyzing {} projects", projects.len());

        let results = try_join_all(
            projects
                .iter()
                .map(|dir| analyze_project(self.analyzer.as_ref(), &self.working_dir, dir)),
        )
        .await?;

        let report = RunReport {
            results,
            total_duration: start.elapsed(),
        };
        info!(
            "Analysis finished in {:.1}s: {} of {} projects flagged",
            report.total_duration.as_secs_f64(),
            report.flagged_count(),
            projects.len()
        );
        Ok(report)
    }
}
