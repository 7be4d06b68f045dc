use super::{Analyzer, AnalyzerOutput};
use crate::error::ProviderError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout as tokio_timeout;
use tracing::debug;

pub struct UnimportedRunner {
    pub binary: PathBuf,
    pub args: Vec<String>,
    pub timeout: Option<Duration>,
}

#[async_trait]
impl Analyzer for UnimportedRunner {
    fn name(&self) -> &'static str {
        "unimported"
    }

    async fn analyze(&self, dir: &Path) -> Result<AnalyzerOutput, ProviderError> {
        // Use string for PATH lookup if not an absolute/relative path
        let binary_str = self.binary.to_string_lossy();
        let mut cmd = if binary_str.contains('/') || binary_str.contains('\\') {
            Command::new(&self.binary)
        } else {
            Command::new(binary_str.as_ref())
        };

        cmd.current_dir(dir)
            .args(&self.args)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        debug!("Running {} {:?} in {}", binary_str, self.args, dir.display());

        let spawn_err = |source| ProviderError::Spawn {
            binary: binary_str.to_string(),
            source,
        };

        let output = match self.timeout {
            Some(limit) => tokio_timeout(limit, cmd.output())
                .await
                .map_err(|_| ProviderError::Timeout(limit))?
                .map_err(spawn_err)?,
            None => cmd.output().await.map_err(spawn_err)?,
        };

        if output.status.success() {
            return Ok(AnalyzerOutput::Clean);
        }

        Ok(AnalyzerOutput::Flagged {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
        })
    }
}
