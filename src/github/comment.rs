use super::client::CommentApi;
use crate::error::{GitHubError, ReportError, RunnerError};
use crate::output::{render_final, render_placeholder, with_marker, AggregateReport};
use crate::parser::ProjectResult;
use crate::runner::RunReport;
use std::future::Future;
use tracing::{debug, info};

/// Keeps a single marker-tagged comment per pull request up to date
pub struct CommentReconciler<'a> {
    api: &'a dyn CommentApi,
    marker: String,
    author: String,
    per_page: u32,
}

#[derive(Debug)]
pub struct PublishOutcome {
    pub comment_id: u64,
    pub report: AggregateReport,
    pub results: Vec<ProjectResult>,
}

impl PublishOutcome {
    /// Failure message for the CI step, if any project was flagged
    pub fn failure_message(&self) -> Option<String> {
        failure_message(self.report.error_count, self.results.len())
    }
}

pub fn failure_message(errors: usize, total: usize) -> Option<String> {
    (errors > 0).then(|| format!("{} out of {} had errors.", errors, total))
}

impl<'a> CommentReconciler<'a> {
    pub fn new(api: &'a dyn CommentApi, marker: String, author: String, per_page: u32) -> Self {
        Self {
            api,
            marker,
            author,
            per_page,
        }
    }

    fn is_ours(&self, author: Option<&str>, body: Option<&str>) -> bool {
        author == Some(self.author.as_str())
            && body.is_some_and(|body| body.starts_with(&self.marker))
    }

    /// Page through the pull request comments and return the id of the first
    /// one we own. Stops fetching as soon as it is found.
    pub async fn find_existing(&self) -> Result<Option<u64>, GitHubError> {
        let mut page = 1;

        loop {
            let comments = self.api.list_comments(page, self.per_page).await?;
            debug!("Comment page {} returned {} comments", page, comments.len());

            if let Some(comment) = comments
                .iter()
                .find(|c| self.is_ours(c.author(), c.body.as_deref()))
            {
                info!("Found existing report comment {}", comment.id);
                return Ok(Some(comment.id));
            }

            // A short page is the last page
            if comments.len() < self.per_page as usize {
                info!("No existing report comment found");
                return Ok(None);
            }

            page += 1;
        }
    }

    /// Write `document` into the existing comment, or create one.
    /// Returns the id every later update must target.
    pub async fn upsert(&self, existing: Option<u64>, document: &str) -> Result<u64, GitHubError> {
        let body = with_marker(&self.marker, document);

        match existing {
            Some(comment_id) => {
                self.api.update_comment(comment_id, &body).await?;
                Ok(comment_id)
            }
            None => {
                let comment_id = self.api.create_comment(&body).await?;
                info!("Created report comment {}", comment_id);
                Ok(comment_id)
            }
        }
    }

    /// Run the full reconciliation: search for our comment while `analysis`
    /// runs, post the pending report as soon as the search is done, then
    /// overwrite it with the final report.
    pub async fn publish<F>(
        &self,
        projects: &[String],
        analysis: F,
    ) -> Result<PublishOutcome, ReportError>
    where
        F: Future<Output = Result<RunReport, RunnerError>>,
    {
        let placeholder = async {
            let existing = self.find_existing().await?;
            let comment_id = self.upsert(existing, &render_placeholder(projects)).await?;
            info!("Posted pending report to comment {}", comment_id);
            Ok::<_, ReportError>(comment_id)
        };
        let analysis = async { analysis.await.map_err(ReportError::from) };

        let (comment_id, run) = tokio::try_join!(placeholder, analysis)?;

        let report = render_final(&run.results);
        self.upsert(Some(comment_id), &report.document).await?;
        info!("Posted final report to comment {}", comment_id);

        Ok(PublishOutcome {
            comment_id,
            report,
            results: run.results,
        })
    }
}
