use crate::parser::ProjectResult;

pub const REPORT_TITLE: &str = "## Unimported Action report";

const STATUS_PENDING: &str = "🔄";
const STATUS_CLEAN: &str = "✅";
const STATUS_FLAGGED: &str = "❌";
const MISSING: &str = "-";

/// Rendered comment document plus the number of flagged projects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateReport {
    pub error_count: usize,
    pub document: String,
}

struct TableRow<'a> {
    project: &'a str,
    status: &'a str,
    unused: Option<usize>,
    unresolved: Option<usize>,
    unimported: Option<usize>,
}

/// Report shown while analysis is still running
pub fn render_placeholder(projects: &[String]) -> String {
    let rows: Vec<TableRow> = projects
        .iter()
        .map(|project| TableRow {
            project,
            status: STATUS_PENDING,
            unused: None,
            unresolved: None,
            unimported: None,
        })
        .collect();

    format!("{}\n### Summary\n{}", REPORT_TITLE, render_table(&rows))
}

/// Final report: summary table, then details for every flagged project
pub fn render_final(results: &[ProjectResult]) -> AggregateReport {
    let rows: Vec<TableRow> = results
        .iter()
        .map(|result| {
            if result.is_flagged() {
                TableRow {
                    project: &result.directory,
                    status: STATUS_FLAGGED,
                    unused: Some(result.unused_count()),
                    unresolved: Some(result.unresolved_count()),
                    unimported: Some(result.unimported_count()),
                }
            } else {
                TableRow {
                    project: &result.directory,
                    status: STATUS_CLEAN,
                    unused: None,
                    unresolved: None,
                    unimported: None,
                }
            }
        })
        .collect();

    let flagged: Vec<&ProjectResult> = results.iter().filter(|r| r.is_flagged()).collect();

    let mut document = format!("{}\n### Summary\n{}", REPORT_TITLE, render_table(&rows));
    if !flagged.is_empty() {
        document.push_str("\n### Error Details\n");
        document.push_str(
            &flagged
                .iter()
                .map(|result| render_project_details(result))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    AggregateReport {
        error_count: flagged.len(),
        document,
    }
}

/// Prefix a document with the marker line that identifies our comment
pub fn with_marker(marker: &str, document: &str) -> String {
    format!("{}\n{}", marker, document).trim().to_string()
}

fn render_table(rows: &[TableRow]) -> String {
    let mut table = String::new();
    table.push_str("| Project | Status | Unused Deps | Unresolved Deps | Unimported Files |\n");
    table.push_str("| :--- | :----- | :------ | :------- | :------ |");

    for row in rows {
        table.push_str(&format!(
            "\n| {} | {} | {} | {} | {} |",
            row.project,
            row.status,
            count_cell(row.unused),
            count_cell(row.unresolved),
            count_cell(row.unimported),
        ));
    }

    table
}

fn count_cell(count: Option<usize>) -> String {
    count.map_or_else(|| MISSING.to_string(), |c| c.to_string())
}

fn render_list(title: &str, items: &[String]) -> String {
    let mut block = format!("<details><summary>{} ({})</summary>\n<ul>\n", title, items.len());
    for item in items {
        block.push_str(&format!("<li>{}</li>\n", item));
    }
    block.push_str("</ul>\n</details>");
    block
}

fn render_project_details(result: &ProjectResult) -> String {
    let mut blocks = vec![render_list("Entrypoints", &result.entry_points)];

    let categories = [
        ("Unused dependencies", &result.unused_dependencies),
        ("Unresolved imports", &result.unresolved_imports),
        ("Unimported files", &result.unimported_files),
    ];
    for (title, items) in categories {
        if let Some(items) = items {
            blocks.push(render_list(title, items));
        }
    }

    format!(
        "<details><summary>{}</summary>\n<ul>\n<br>\n{}\n</ul>\n</details>",
        result.directory,
        blocks.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn table_rows(document: &str) -> Vec<&str> {
        document
            .lines()
            .filter(|l| l.starts_with("| ") && !l.starts_with("| Project") && !l.starts_with("| :"))
            .collect()
    }

    #[test]
    fn test_placeholder_has_pending_row_per_project() {
        let doc = render_placeholder(&strings(&["web", "api", "shared"]));

        assert!(doc.starts_with("## Unimported Action report\n### Summary\n"));
        assert_eq!(
            table_rows(&doc),
            vec![
                "| web | 🔄 | - | - | - |",
                "| api | 🔄 | - | - | - |",
                "| shared | 🔄 | - | - | - |",
            ]
        );
        assert!(!doc.contains("Error Details"));
    }

    #[test]
    fn test_all_clean_has_no_details() {
        let report = render_final(&[ProjectResult::clean("web"), ProjectResult::clean("api")]);

        assert_eq!(report.error_count, 0);
        assert_eq!(
            table_rows(&report.document),
            vec!["| web | ✅ | - | - | - |", "| api | ✅ | - | - | - |"]
        );
        assert!(!report.document.contains("Error Details"));
        assert!(!report.document.contains("<details>"));
    }

    #[test]
    fn test_empty_section_renders_zero_and_details() {
        let result = ProjectResult {
            unimported_files: Some(Vec::new()),
            ..ProjectResult::clean("web")
        };
        let report = render_final(&[result]);

        assert_eq!(report.error_count, 1);
        assert_eq!(table_rows(&report.document), vec!["| web | ❌ | 0 | 0 | 0 |"]);
        assert!(report.document.contains("### Error Details"));
        assert!(report
            .document
            .contains("<details><summary>Unimported files (0)</summary>"));
        assert!(!report.document.contains("Unused dependencies"));
    }

    #[test]
    fn test_mixed_projects() {
        let pkg_b = ProjectResult {
            directory: "pkg-b".to_string(),
            entry_points: strings(&["./src/index.ts"]),
            unused_dependencies: Some(strings(&["lodash", "left-pad"])),
            unresolved_imports: Some(strings(&["./gone"])),
            unimported_files: None,
        };
        let report = render_final(&[ProjectResult::clean("pkg-a"), pkg_b]);

        assert_eq!(report.error_count, 1);
        assert_eq!(
            table_rows(&report.document),
            vec!["| pkg-a | ✅ | - | - | - |", "| pkg-b | ❌ | 2 | 1 | 0 |"]
        );

        let details = report
            .document
            .split("### Error Details\n")
            .nth(1)
            .unwrap();
        assert!(details.starts_with("<details><summary>pkg-b</summary>"));
        assert!(!details.contains("pkg-a"));
        assert!(details.contains("<details><summary>Entrypoints (1)</summary>\n<ul>\n<li>./src/index.ts</li>\n</ul>\n</details>"));
        assert!(details.contains("<summary>Unused dependencies (2)</summary>"));
        assert!(details.contains("<li>left-pad</li>"));
        assert!(details.contains("<summary>Unresolved imports (1)</summary>"));
        assert!(!details.contains("Unimported files"));
    }

    #[test]
    fn test_with_marker() {
        let body = with_marker("[unimported]:report-comment", "## Title\n");
        assert_eq!(body, "[unimported]:report-comment\n## Title");
    }
}
