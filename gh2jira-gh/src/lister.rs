//! # Issue Lister
//!
//! Lists every open issue of a repository that matches the configured
//! milestone, assignee, and label filters, following pagination until GitHub
//! reports no further page.

use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::models::{GitHubIssue, IssueFilter};
use crate::repo::RepoRef;

/// Settings for a [`Lister`].
///
/// Every setter overwrites the previous value of its field; apply them in any
/// order and finish with [`ListerConfig::validate`].
#[derive(Default, Clone)]
pub struct ListerConfig {
  client: Option<Client>,
  token: Option<String>,
  base_url: Option<String>,
  milestone: String,
  assignee: String,
  labels: Vec<String>,
  repository: String,
}

impl ListerConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Use a pre-built HTTP client instead of token authentication
  pub fn with_client(mut self, client: Client) -> Self {
    self.client = Some(client);
    self
  }

  pub fn with_token(mut self, token: impl Into<String>) -> Self {
    self.token = Some(token.into());
    self
  }

  /// Override the GitHub API root (GitHub Enterprise, tests)
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = Some(base_url.into());
    self
  }

  /// Milestone number as it appears in the milestone URL
  pub fn with_milestone(mut self, milestone: impl Into<String>) -> Self {
    self.milestone = milestone.into();
    self
  }

  pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
    self.assignee = assignee.into();
    self
  }

  pub fn with_labels<I, S>(mut self, labels: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.labels = labels.into_iter().map(Into::into).collect();
    self
  }

  /// Repository to list, as `org/repo`
  pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
    self.repository = repository.into();
    self
  }

  /// Apply defaults and build the lister.
  ///
  /// An injected client wins over a token. Without either this fails with
  /// [`GitHubError::MissingToken`] before any request is made.
  pub fn validate(self) -> Result<Lister, GitHubError> {
    let client = match (self.client, self.token) {
      (Some(client), _) => GitHubClient::with_http_client(client),
      (None, Some(token)) if !token.is_empty() => GitHubClient::new(&token),
      _ => return Err(GitHubError::MissingToken),
    };
    let client = match self.base_url {
      Some(base_url) => client.with_base_url(&base_url),
      None => client,
    };

    Ok(Lister {
      client,
      repo: RepoRef::parse(&self.repository),
      filter: IssueFilter {
        milestone: self.milestone,
        assignee: self.assignee,
        labels: self.labels,
      },
    })
  }
}

/// Lists and fetches issues of one repository
pub struct Lister {
  client: GitHubClient,
  repo: RepoRef,
  filter: IssueFilter,
}

impl Lister {
  pub fn repo(&self) -> &RepoRef {
    &self.repo
  }

  pub fn filter(&self) -> &IssueFilter {
    &self.filter
  }

  /// Fetch all matching open issues across every page.
  ///
  /// Pages are appended in the order GitHub serves them. Pull requests are
  /// included; check [`GitHubIssue::is_pull_request`] to skip them.
  ///
  /// # Errors
  ///
  /// The first failing page aborts the whole listing; issues collected from
  /// earlier pages are dropped. A `next` link that does not move past the
  /// current page fails with [`GitHubError::StalledPagination`].
  #[instrument(skip(self), fields(repo = %self.repo), level = "debug")]
  pub async fn list_issues(&self) -> Result<Vec<GitHubIssue>, GitHubError> {
    let mut all_issues = Vec::new();
    let mut page = 1;

    loop {
      let result = self.client.list_issues_page(&self.repo, &self.filter, page).await?;
      all_issues.extend(result.issues);

      match result.next_page {
        Some(next) if next <= page => {
          return Err(GitHubError::StalledPagination { page, next });
        }
        Some(next) => {
          debug!("Continuing with page {}", next);
          page = next;
        }
        None => break,
      }
    }

    info!("Listed {} issues for {}", all_issues.len(), self.repo);
    Ok(all_issues)
  }

  /// Fetch a single issue of the configured repository
  pub async fn get_issue(&self, issue_number: u64) -> Result<GitHubIssue, GitHubError> {
    self.client.get_issue(&self.repo, issue_number).await
  }
}
