//! GitHub Issues API endpoint implementations.

use tracing::{debug, info, instrument, trace};

use crate::client::GitHubClient;
use crate::consts::PER_PAGE;
use crate::error::GitHubError;
use crate::models::{GitHubIssue, IssueFilter, IssuePage};
use crate::pagination::next_page;
use crate::repo::RepoRef;

impl GitHubClient {
  /// Fetch one page of open issues, filtered server-side.
  ///
  /// The result may contain pull requests; GitHub lists them alongside
  /// issues.
  ///
  /// # Errors
  ///
  /// Returns an error if the request cannot be sent, GitHub answers with a
  /// non-success status, or the body cannot be parsed.
  #[instrument(skip(self, filter), level = "debug")]
  pub async fn list_issues_page(
    &self,
    repo: &RepoRef,
    filter: &IssueFilter,
    page: u32,
  ) -> Result<IssuePage, GitHubError> {
    let url = format!("{}/repos/{}/{}/issues", self.base_url, repo.org, repo.repo);

    let mut query = vec![
      ("state", "open".to_string()),
      ("per_page", PER_PAGE.to_string()),
      ("page", page.to_string()),
    ];
    if !filter.milestone.is_empty() {
      query.push(("milestone", filter.milestone.clone()));
    }
    if !filter.assignee.is_empty() {
      query.push(("assignee", filter.assignee.clone()));
    }
    if !filter.labels.is_empty() {
      query.push(("labels", filter.labels.join(",")));
    }

    trace!("GitHub API URL: {} {:?}", url, query);

    let (headers, body) = self.fetch(&url, &query).await?;
    let issues =
      serde_json::from_str::<Vec<GitHubIssue>>(&body).map_err(|source| GitHubError::Decode { url, source })?;
    let next_page = next_page(&headers);

    debug!("Received {} issues on page {}, next page: {:?}", issues.len(), page, next_page);

    Ok(IssuePage { issues, next_page })
  }

  /// Get a specific issue by number.
  ///
  /// # Errors
  ///
  /// Returns an error if the issue is not found, authentication fails,
  /// the request cannot be sent, or the response cannot be parsed.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue(&self, repo: &RepoRef, issue_number: u64) -> Result<GitHubIssue, GitHubError> {
    info!("Fetching issue #{} for {}", issue_number, repo);

    let url = format!("{}/repos/{}/{}/issues/{}", self.base_url, repo.org, repo.repo, issue_number);

    trace!("GitHub API URL: {}", url);

    let (_, body) = self.fetch(&url, &[]).await?;
    let issue = serde_json::from_str::<GitHubIssue>(&body).map_err(|source| GitHubError::Decode { url, source })?;

    trace!("Issue: {:?}", issue);
    Ok(issue)
  }
}
