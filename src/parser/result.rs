use serde::{Deserialize, Serialize};

/// Findings for a single project directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectResult {
    pub directory: String,

    #[serde(default)]
    pub entry_points: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unused_dependencies: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unimported_files: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unresolved_imports: Option<Vec<String>>,
}

impl ProjectResult {
    pub fn clean(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// A project is flagged once any category section was reported,
    /// even if that section listed nothing.
    pub fn is_flagged(&self) -> bool {
        self.unused_dependencies.is_some()
            || self.unimported_files.is_some()
            || self.unresolved_imports.is_some()
    }

    pub fn unused_count(&self) -> usize {
        self.unused_dependencies.as_ref().map_or(0, Vec::len)
    }

    pub fn unresolved_count(&self) -> usize {
        self.unresolved_imports.as_ref().map_or(0, Vec::len)
    }

    pub fn unimported_count(&self) -> usize {
        self.unimported_files.as_ref().map_or(0, Vec::len)
    }
}
