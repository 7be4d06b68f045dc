use crate::error::RunnerError;
use crate::parser::{parse_report, ProjectResult};
use crate::provider::{Analyzer, AnalyzerOutput};
use std::path::Path;
use tracing::{debug, info, warn};

/// Analyze one project directory, resolved against `working_dir`.
///
/// Findings are an expected outcome and come back as a flagged
/// [`ProjectResult`]; only a failure to run the analyzer at all is an error.
pub async fn analyze_project(
    analyzer: &dyn Analyzer,
    working_dir: &Path,
    directory: &str,
) -> Result<ProjectResult, RunnerError> {
    let path = working_dir.join(directory);
    debug!(
        "Running {} for '{}' in {}",
        analyzer.name(),
        directory,
        path.display()
    );

    let output = analyzer
        .analyze(&path)
        .await
        .map_err(|source| RunnerError::Provider {
            directory: directory.to_string(),
            source,
        })?;

    match output {
        AnalyzerOutput::Clean => {
            info!("{}: clean", directory);
            Ok(ProjectResult::clean(directory))
        }
        AnalyzerOutput::Flagged {
            stdout,
            stderr,
            exit_code,
        } => {
            if stdout.is_empty() {
                warn!(
                    "{}: {} exited with {:?} but printed no report; treating as clean. stderr: {}",
                    directory,
                    analyzer.name(),
                    exit_code,
                    stderr.trim()
                );
                return Ok(ProjectResult::clean(directory));
            }

            let result = parse_report(directory, &stdout);
            if !result.is_flagged() {
                warn!(
                    "{}: {} exited with {:?} but no report section was recognised; treating as clean",
                    directory,
                    analyzer.name(),
                    exit_code
                );
            }
            info!(
                "{}: {} unused deps, {} unresolved imports, {} unimported files",
                directory,
                result.unused_count(),
                result.unresolved_count(),
                result.unimported_count()
            );
            Ok(result)
        }
    }
}
