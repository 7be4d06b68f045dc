mod unimported;

pub use unimported::UnimportedRunner;

use crate::config::Config;
use crate::error::ProviderError;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Outcome of one analyzer invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerOutput {
    /// Exited successfully; nothing to report
    Clean,
    /// Exited unsuccessfully, which is how the tool reports findings
    Flagged {
        stdout: String,
        stderr: String,
        exit_code: Option<i32>,
    },
}

#[async_trait]
pub trait Analyzer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn analyze(&self, dir: &Path) -> Result<AnalyzerOutput, ProviderError>;
}

/// Create the analyzer described by the configuration
pub fn create_analyzer(config: &Config) -> Arc<dyn Analyzer> {
    Arc::new(UnimportedRunner {
        binary: config.analyzer.binary.clone(),
        args: config.analyzer.args.clone(),
        timeout: config.analyzer.timeout_sec.map(Duration::from_secs),
    })
}
