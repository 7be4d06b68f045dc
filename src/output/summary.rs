use crate::error::OutputError;
use crate::parser::ProjectResult;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::report::AggregateReport;

pub const MARKDOWN_FILE: &str = "unimported-report.md";
pub const JSON_FILE: &str = "unimported-report.json";

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryReport {
    pub timestamp: String,
    pub error_count: usize,
    pub total: usize,
    pub projects: Vec<ProjectResult>,
}

/// Write the rendered report and its JSON counterpart into `report_dir`
pub fn write_summary(
    report_dir: &Path,
    results: &[ProjectResult],
    report: &AggregateReport,
) -> Result<(), OutputError> {
    fs::create_dir_all(report_dir).map_err(OutputError::CreateDir)?;

    let md_path = report_dir.join(MARKDOWN_FILE);
    fs::write(&md_path, format!("{}\n", report.document)).map_err(OutputError::WriteReport)?;

    let summary = SummaryReport {
        timestamp: Utc::now().to_rfc3339(),
        error_count: report.error_count,
        total: results.len(),
        projects: results.to_vec(),
    };
    let json_path = report_dir.join(JSON_FILE);
    let json = serde_json::to_string_pretty(&summary)?;
    fs::write(&json_path, json).map_err(OutputError::WriteReport)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::render_final;

    #[test]
    fn test_write_summary() {
        let dir = tempfile::tempdir().unwrap();
        let report_dir = dir.path().join("nested/reports");
        let results = vec![
            ProjectResult::clean("web"),
            ProjectResult {
                unused_dependencies: Some(vec!["lodash".to_string()]),
                ..ProjectResult::clean("api")
            },
        ];
        let report = render_final(&results);

        write_summary(&report_dir, &results, &report).unwrap();

        let md = fs::read_to_string(report_dir.join(MARKDOWN_FILE)).unwrap();
        assert!(md.contains("| api | ❌ | 1 | 0 | 0 |"));

        let json = fs::read_to_string(report_dir.join(JSON_FILE)).unwrap();
        let summary: SummaryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(summary.error_count, 1);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.projects, results);
    }
}
