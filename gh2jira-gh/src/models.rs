use serde::{Deserialize, Serialize};

/// Represents a GitHub user
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubUser {
  pub login: String,
  pub id: u64,
}

/// Represents a GitHub issue label
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubLabel {
  pub name: String,
}

/// Marker GitHub attaches to issues that are really pull requests
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PullRequestRef {
  #[serde(default)]
  pub url: Option<String>,
  #[serde(default)]
  pub html_url: Option<String>,
}

/// Represents a GitHub issue as returned by the issues API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubIssue {
  pub number: u64,
  pub title: String,
  #[serde(default)]
  pub body: Option<String>,
  /// API URL of the issue (`https://api.github.com/repos/...`)
  #[serde(default)]
  pub url: String,
  #[serde(default)]
  pub html_url: String,
  #[serde(default)]
  pub state: String,
  #[serde(default)]
  pub user: Option<GitHubUser>,
  #[serde(default)]
  pub labels: Vec<GitHubLabel>,
  #[serde(default)]
  pub pull_request: Option<PullRequestRef>,
}

impl GitHubIssue {
  /// Whether this entry is a pull request rather than a plain issue
  pub fn is_pull_request(&self) -> bool {
    self.pull_request.is_some()
  }

  /// Issue body, empty when GitHub returned none
  pub fn body(&self) -> &str {
    self.body.as_deref().unwrap_or_default()
  }

  /// Names of the labels attached to the issue
  pub fn label_names(&self) -> Vec<String> {
    self.labels.iter().map(|label| label.name.clone()).collect()
  }
}

/// Server-side filters applied when listing issues.
///
/// Empty values leave the corresponding dimension unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
  /// Milestone number from the milestone URL, not its display name
  pub milestone: String,
  pub assignee: String,
  /// All listed labels must be present on a matching issue
  pub labels: Vec<String>,
}

/// One page of listed issues
#[derive(Debug)]
pub struct IssuePage {
  pub issues: Vec<GitHubIssue>,
  /// Page number to request next, `None` on the last page
  pub next_page: Option<u32>,
}
