//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue creation.

use tracing::{info, instrument};

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::{CreatedIssue, NewIssue};

impl JiraClient {
  /// Create a Jira issue.
  ///
  /// # Errors
  ///
  /// A rejected request yields [`JiraError::Status`] with the untouched
  /// response body, which may still describe a partially created issue. A
  /// success response without an issue key is a [`JiraError::Decode`].
  #[instrument(skip(self, issue), fields(project = %issue.fields.project.key), level = "debug")]
  pub async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue, JiraError> {
    let url = format!("{}/rest/api/2/issue", self.base_url);

    let body = self.send(self.client.post(&url).json(issue), &url).await?;
    let created = serde_json::from_str::<CreatedIssue>(&body)
      .and_then(|created| {
        if created.key.is_empty() {
          Err(<serde_json::Error as serde::de::Error>::missing_field("key"))
        } else {
          Ok(created)
        }
      })
      .map_err(|source| JiraError::Decode { url, source })?;

    info!("Created Jira issue {}", created.key);
    Ok(created)
  }
}

#[cfg(test)]
mod tests {
  use reqwest::StatusCode;
  use wiremock::matchers::{basic_auth, body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::JiraClient;
  use crate::error::JiraError;
  use crate::models::{IssueTypeRef, JiraAuth, NewIssue, NewIssueFields, ProjectRef};

  fn new_issue() -> NewIssue {
    NewIssue {
      fields: NewIssueFields {
        project: ProjectRef { key: "TEST".to_string() },
        summary: "[UPSTREAM] Test issue #1".to_string(),
        description: "This is a test issue".to_string(),
        issue_type: IssueTypeRef {
          name: "Story".to_string(),
        },
        reporter: None,
      },
    }
  }

  fn client_for(mock_server: &MockServer) -> JiraClient {
    let auth = JiraAuth {
      username: "test_user".to_string(),
      api_token: "test_token".to_string(),
    };
    JiraClient::new(&mock_server.uri(), auth)
  }

  #[tokio::test]
  async fn test_create_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue"))
      .and(basic_auth("test_user", "test_token"))
      .and(body_json(serde_json::to_value(new_issue())?))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
          "id": "10000",
          "key": "TEST-123",
          "self": "https://example.atlassian.net/rest/api/2/issue/10000"
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let created = client_for(&mock_server).create_issue(&new_issue()).await?;
    assert_eq!(created.key, "TEST-123");
    assert_eq!(created.id, "10000");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_without_key_is_decode_error() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue"))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
      .expect(1)
      .mount(&mock_server)
      .await;

    let error = client_for(&mock_server).create_issue(&new_issue()).await.unwrap_err();

    assert!(matches!(error, JiraError::Decode { .. }));
    assert_eq!(error.status(), None);
    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_rejected() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue"))
      .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
          "errorMessages": [],
          "errors": { "project": "valid project is required" }
      })))
      .mount(&mock_server)
      .await;

    let error = client_for(&mock_server).create_issue(&new_issue()).await.unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    assert!(error.to_string().contains("valid project is required"));
    match error {
      JiraError::Status { body, .. } => assert!(body.contains("errors")),
      other => panic!("unexpected error: {other:?}"),
    }

    Ok(())
  }
}
