use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "unimported.yaml";

pub fn default_projects() -> Vec<String> {
    vec![".".to_string()]
}

pub fn default_marker() -> String {
    "[unimported]:report-comment".to_string()
}

pub fn default_author() -> String {
    "github-actions[bot]".to_string()
}

pub fn default_per_page() -> u32 {
    100
}

pub fn default_analyzer_binary() -> PathBuf {
    PathBuf::from("npx")
}

pub fn default_analyzer_args() -> Vec<String> {
    vec!["unimported".to_string()]
}
