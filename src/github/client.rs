use crate::error::GitHubError;
use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
pub struct IssueComment {
    pub id: u64,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user: Option<CommentUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentUser {
    pub login: String,
}

impl IssueComment {
    pub fn author(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }
}

/// The slice of the issue comment API the reconciler needs
#[async_trait]
pub trait CommentApi: Send + Sync {
    /// Fetch one page (1-based) of comments on the pull request
    async fn list_comments(&self, page: u32, per_page: u32)
        -> Result<Vec<IssueComment>, GitHubError>;

    /// Create a comment and return its id
    async fn create_comment(&self, body: &str) -> Result<u64, GitHubError>;

    async fn update_comment(&self, comment_id: u64, body: &str) -> Result<(), GitHubError>;
}

/// [`CommentApi`] backed by `gh api`
pub struct GhClient {
    repo: String,
    issue_number: u64,
    token: String,
}

#[derive(Deserialize)]
struct CreatedComment {
    id: u64,
}

impl GhClient {
    pub fn new(repo: String, issue_number: u64, token: String) -> Self {
        Self {
            repo,
            issue_number,
            token,
        }
    }

    fn api(&self, method: &str, endpoint: &str) -> Command {
        let mut cmd = Command::new("gh");
        cmd.env("GH_TOKEN", &self.token)
            .arg("api")
            .arg("--method")
            .arg(method)
            .arg("-H")
            .arg("Accept: application/vnd.github+json")
            .arg(endpoint);
        cmd
    }

    async fn send(mut cmd: Command) -> Result<Vec<u8>, GitHubError> {
        let output = cmd.output().await.map_err(GitHubError::Io)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitHubError::GhCli(stderr.trim().to_string()));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl CommentApi for GhClient {
    async fn list_comments(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<IssueComment>, GitHubError> {
        let endpoint = format!("repos/{}/issues/{}/comments", self.repo, self.issue_number);
        debug!("Listing comments page {} of {}", page, endpoint);

        let mut cmd = self.api("GET", &endpoint);
        cmd.arg("-f")
            .arg(format!("per_page={}", per_page))
            .arg("-f")
            .arg(format!("page={}", page));

        let stdout = Self::send(cmd).await?;
        serde_json::from_slice(&stdout).map_err(|e| GitHubError::ParseOutput(e.to_string()))
    }

    async fn create_comment(&self, body: &str) -> Result<u64, GitHubError> {
        let endpoint = format!("repos/{}/issues/{}/comments", self.repo, self.issue_number);

        let mut cmd = self.api("POST", &endpoint);
        cmd.arg("-f").arg(format!("body={}", body));

        let stdout = Self::send(cmd).await?;
        let created: CreatedComment = serde_json::from_slice(&stdout)
            .map_err(|e| GitHubError::ParseOutput(e.to_string()))?;
        Ok(created.id)
    }

    async fn update_comment(&self, comment_id: u64, body: &str) -> Result<(), GitHubError> {
        let endpoint = format!("repos/{}/issues/comments/{}", self.repo, comment_id);

        let mut cmd = self.api("PATCH", &endpoint);
        cmd.arg("-f").arg(format!("body={}", body));

        Self::send(cmd).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_comment_page() {
        let json = r#"[
            {"id": 1, "body": "hello", "user": {"login": "octocat", "id": 5}},
            {"id": 2, "body": null, "user": null}
        ]"#;

        let comments: Vec<IssueComment> = serde_json::from_str(json).unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].author(), Some("octocat"));
        assert_eq!(comments[0].body.as_deref(), Some("hello"));
        assert_eq!(comments[1].author(), None);
        assert!(comments[1].body.is_none());
    }
}
