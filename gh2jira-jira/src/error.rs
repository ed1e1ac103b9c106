//! Errors returned by the Jira client and the cloner.

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::CreatedIssue;

/// Errors produced while talking to the Jira REST API.
#[derive(Debug, Error)]
pub enum JiraError {
  /// The request never produced a response.
  #[error("request to {url} failed")]
  Transport {
    url: String,
    #[source]
    source: reqwest::Error,
  },
  /// Jira answered with a non-success status; `body` is passed on untouched.
  #[error("Jira API error: HTTP status {status} - {body}")]
  Status { status: StatusCode, body: String },
  /// The response body did not match the expected shape.
  #[error("Failed to decode Jira response from {url}")]
  Decode {
    url: String,
    #[source]
    source: serde_json::Error,
  },
}

impl JiraError {
  /// HTTP status of a service-side rejection, if that is what this is.
  pub fn status(&self) -> Option<StatusCode> {
    match self {
      Self::Status { status, .. } => Some(*status),
      _ => None,
    }
  }
}

/// Errors produced by [`crate::Cloner`].
#[derive(Debug, Error)]
pub enum CloneError {
  /// Neither a token nor a pre-built HTTP client was configured.
  #[error("cannot create jira client without a token")]
  MissingToken,
  /// The `myself` lookup for the reporter account failed.
  #[error("failed to resolve Jira account ID")]
  AccountLookup(#[source] JiraError),
  /// Issue creation failed. `partial` holds whatever issue Jira still
  /// returned, if any.
  #[error("Error cloning issue")]
  Create {
    #[source]
    source: JiraError,
    partial: Option<CreatedIssue>,
  },
  /// Writing progress output failed.
  #[error("failed to write clone output")]
  Output(#[from] std::io::Error),
}
