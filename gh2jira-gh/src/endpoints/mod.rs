//! # GitHub API Endpoints
//!
//! Endpoint implementations for the GitHub resources gh2jira reads.

pub mod issues;

use reqwest::header::HeaderMap;
use tracing::{debug, warn};

use crate::client::GitHubClient;
use crate::error::GitHubError;

impl GitHubClient {
  /// Send a GET request and return headers and body of a successful response.
  ///
  /// Non-success statuses become [`GitHubError::Status`]; decoding is left to
  /// the caller.
  pub(crate) async fn fetch(&self, url: &str, query: &[(&str, String)]) -> Result<(HeaderMap, String), GitHubError> {
    let transport = |source: reqwest::Error| GitHubError::Transport {
      url: url.to_string(),
      source,
    };

    let response = self.get(url).query(query).send().await.map_err(transport)?;

    let status = response.status();
    debug!("GitHub API response status: {}", status);

    let headers = response.headers().clone();
    let body = response.text().await.map_err(transport)?;

    if !status.is_success() {
      warn!("GitHub API error: HTTP {} - {}", status, body);
      return Err(GitHubError::from_status(status, &body));
    }

    Ok((headers, body))
  }
}
