mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;
use tracing::debug;

impl Default for Config {
    fn default() -> Self {
        Self {
            projects: default_projects(),
            marker: default_marker(),
            author: default_author(),
            per_page: default_per_page(),
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file if given, falling back to defaults when the
    /// default file is absent. An explicitly named file must exist.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load(path)
                } else {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Override projects with a raw comma-delimited list.
    /// Entries are not trimmed, so paths must not contain commas.
    pub fn apply_projects(&mut self, raw: Option<&str>) {
        if let Some(raw) = raw {
            self.projects = split_projects(raw);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.projects.is_empty() {
            return Err(ConfigError::NoProjects);
        }

        if !(1..=100).contains(&self.per_page) {
            return Err(ConfigError::InvalidPageSize(self.per_page));
        }

        if self.marker.trim().is_empty() {
            return Err(ConfigError::EmptyMarker);
        }

        Ok(())
    }
}

pub fn split_projects(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_projects_keeps_whitespace() {
        assert_eq!(
            split_projects("pkg-a, pkg-b"),
            vec!["pkg-a".to_string(), " pkg-b".to_string()]
        );
        assert_eq!(split_projects(""), vec![String::new()]);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "projects: [web, api]\nanalyzer:\n  timeout_sec: 60").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.projects, vec!["web", "api"]);
        assert_eq!(config.marker, "[unimported]:report-comment");
        assert_eq!(config.author, "github-actions[bot]");
        assert_eq!(config.per_page, 100);
        assert_eq!(config.analyzer.binary, Path::new("npx"));
        assert_eq!(config.analyzer.args, vec!["unimported"]);
        assert_eq!(config.analyzer.timeout_sec, Some(60));
    }

    #[test]
    fn test_resolve_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            Config::resolve(Some(&missing)),
            Err(ConfigError::ReadFile { .. })
        ));
    }

    #[test]
    fn test_apply_projects_overrides() {
        let mut config = Config::default();
        config.apply_projects(None);
        assert_eq!(config.projects, vec!["."]);

        config.apply_projects(Some("pkg-a,pkg-b"));
        assert_eq!(config.projects, vec!["pkg-a", "pkg-b"]);
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let config = Config {
            per_page: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPageSize(0))
        ));

        let config = Config {
            projects: Vec::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoProjects)));

        let config = Config {
            marker: "  ".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyMarker)));
    }
}
