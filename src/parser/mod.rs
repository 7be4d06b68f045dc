mod items;
mod result;

pub use items::parse_items;
pub use result::ProjectResult;

use regex::Regex;
use tracing::{debug, warn};

const SECTION_DELIMITER: &str = "\n\n\n";

const UNIMPORTED_FILES: &str = "unimported files";
const UNUSED_DEPENDENCIES: &str = "unused dependencies";
const UNRESOLVED_IMPORTS: &str = "unresolved imports";

/// Parse the human-readable output of `unimported` for one project.
///
/// The output is a summary block followed by one table per category, separated
/// by two blank lines. Anything that does not look like that is skipped rather
/// than reported, so sections that cannot be recognised simply stay `None`.
pub fn parse_report(directory: &str, raw: &str) -> ProjectResult {
    let mut sections = raw.split(SECTION_DELIMITER);
    let entry_section = sections.next().unwrap_or_default();

    let mut result = ProjectResult {
        entry_points: parse_entry_points(entry_section),
        ..ProjectResult::clean(directory)
    };

    for section in sections {
        let lines: Vec<&str> = section.split('\n').collect();
        let Some(title) = lines.get(1) else {
            debug!("Skipping section without a title line in {}", directory);
            continue;
        };
        let items = || parse_items(lines.iter().skip(3).copied());

        if title.contains(UNIMPORTED_FILES) {
            result.unimported_files = Some(items());
        } else if title.contains(UNUSED_DEPENDENCIES) {
            result.unused_dependencies = Some(items());
        } else if title.contains(UNRESOLVED_IMPORTS) {
            result.unresolved_imports = Some(items());
        } else {
            warn!("Ignoring unknown section '{}' in {}", title.trim(), directory);
        }
    }

    result
}

fn parse_entry_points(section: &str) -> Vec<String> {
    let Ok(entry_re) = Regex::new(r"^\s*entry file \d+\s*:") else {
        return Vec::new();
    };

    section
        .split('\n')
        .filter(|line| entry_re.is_match(line))
        .filter_map(|line| line.split_once(':'))
        .map(|(_, path)| path.trim().to_string())
        .collect()
}
