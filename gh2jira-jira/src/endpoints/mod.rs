//! # Jira API Endpoints
//!
//! Endpoint implementations for the Jira resources gh2jira touches: the
//! current user and issue creation.

pub mod issues;
pub mod users;

use reqwest::RequestBuilder;
use tracing::debug;

use crate::client::JiraClient;
use crate::error::JiraError;

impl JiraClient {
  /// Send an authorized request and return the body of a successful response.
  pub(crate) async fn send(&self, request: RequestBuilder, url: &str) -> Result<String, JiraError> {
    let transport = |source: reqwest::Error| JiraError::Transport {
      url: url.to_string(),
      source,
    };

    let response = self.authorize(request).send().await.map_err(transport)?;

    let status = response.status();
    debug!("Jira API response status: {}", status);

    let body = response.text().await.map_err(transport)?;

    if !status.is_success() {
      return Err(JiraError::Status { status, body });
    }

    Ok(body)
  }
}
