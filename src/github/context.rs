use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Pull request a run reports on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestContext {
    pub repo: String,
    pub number: u64,
}

#[derive(Deserialize)]
struct EventPayload {
    #[serde(default)]
    pull_request: Option<PullRequestPayload>,
}

#[derive(Deserialize)]
struct PullRequestPayload {
    number: u64,
}

/// Read the pull request number from a workflow event payload.
/// Events without a pull request (pushes, schedules) yield `None`.
pub fn pull_request_number(event_path: &Path) -> Result<Option<u64>, ConfigError> {
    let content = std::fs::read_to_string(event_path).map_err(|e| ConfigError::ReadEvent {
        path: event_path.to_path_buf(),
        source: e,
    })?;

    let payload: EventPayload =
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseEvent {
            path: event_path.to_path_buf(),
            source: e,
        })?;

    Ok(payload.pull_request.map(|pr| pr.number))
}

pub fn validate_repo(repo: &str) -> Result<(), ConfigError> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(())
        }
        _ => Err(ConfigError::InvalidRepository(repo.to_string())),
    }
}

/// Work out which pull request to report on. An explicit number wins over the
/// event payload; with neither there is nothing to do. The repository is only
/// required once a pull request was found.
pub fn resolve(
    repo: Option<&str>,
    pr: Option<u64>,
    event_path: Option<&Path>,
) -> Result<Option<PullRequestContext>, ConfigError> {
    let number = match (pr, event_path) {
        (Some(number), _) => Some(number),
        (None, Some(path)) => pull_request_number(path)?,
        (None, None) => None,
    };

    let Some(number) = number else {
        return Ok(None);
    };

    let repo = repo.ok_or(ConfigError::MissingInput("repo"))?;
    validate_repo(repo)?;

    Ok(Some(PullRequestContext {
        repo: repo.to_string(),
        number,
    }))
}
