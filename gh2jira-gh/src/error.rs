//! Errors returned by the GitHub client and the lister.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while talking to the GitHub REST API.
#[derive(Debug, Error)]
pub enum GitHubError {
  /// Neither a token nor a pre-built HTTP client was configured.
  #[error("cannot create github client without a token")]
  MissingToken,
  /// The request never produced a response.
  #[error("GET {url} failed")]
  Transport {
    url: String,
    #[source]
    source: reqwest::Error,
  },
  /// GitHub answered with a non-success status. `body` is the response body
  /// as received; `message` is its JSON `message` member, when present.
  #[error("GitHub API error: HTTP {status} - {body}")]
  Status {
    status: StatusCode,
    message: Option<String>,
    body: String,
  },
  /// The response body did not match the expected shape.
  #[error("Failed to parse GitHub response from {url}")]
  Decode {
    url: String,
    #[source]
    source: serde_json::Error,
  },
  /// A `Link` header pointed back at a page that was already fetched.
  #[error("GitHub pagination did not advance: page {page} links to page {next}")]
  StalledPagination { page: u32, next: u32 },
}

impl GitHubError {
  /// HTTP status of a service-side rejection, if that is what this is.
  pub fn status(&self) -> Option<StatusCode> {
    match self {
      Self::Status { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// The `message` member of a JSON error body, if GitHub sent one.
  pub fn message(&self) -> Option<&str> {
    match self {
      Self::Status { message, .. } => message.as_deref(),
      _ => None,
    }
  }

  /// Build a [`GitHubError::Status`] keeping the whole response body.
  pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
    let message = serde_json::from_str::<serde_json::Value>(body)
      .ok()
      .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_string));

    Self::Status {
      status,
      message,
      body: body.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_status_extracts_message() {
    let error = GitHubError::from_status(
      StatusCode::UNAUTHORIZED,
      r#"{"message":"Bad credentials","documentation_url":"https://docs.github.com/rest"}"#,
    );

    assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
    assert_eq!(error.message(), Some("Bad credentials"));
    assert!(error.to_string().starts_with("GitHub API error: HTTP 401 Unauthorized - "));
    assert!(error.to_string().contains("documentation_url"));
  }

  #[test]
  fn test_from_status_keeps_validation_errors() {
    let body = r#"{"message":"Validation Failed","errors":[{"field":"milestone","code":"invalid"}]}"#;
    let error = GitHubError::from_status(StatusCode::UNPROCESSABLE_ENTITY, body);

    assert_eq!(error.message(), Some("Validation Failed"));
    assert!(error.to_string().contains(r#""field":"milestone""#));
    match error {
      GitHubError::Status { body: kept, .. } => assert_eq!(kept, body),
      other => panic!("unexpected error: {other:?}"),
    }
  }

  #[test]
  fn test_from_status_plain_text_body() {
    let error = GitHubError::from_status(StatusCode::BAD_GATEWAY, "upstream down");

    assert_eq!(error.message(), None);
    assert!(error.to_string().contains("upstream down"));
  }

  #[test]
  fn test_missing_token_has_no_status() {
    assert_eq!(GitHubError::MissingToken.status(), None);
  }
}
