use tracing::{instrument, trace};

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::JiraUser;

impl JiraClient {
  /// Get the user the client authenticates as
  #[instrument(skip(self), level = "debug")]
  pub async fn get_current_user(&self) -> Result<JiraUser, JiraError> {
    let url = format!("{}/rest/api/latest/myself", self.base_url);

    let body = self.send(self.client.get(&url), &url).await?;
    let user = serde_json::from_str::<JiraUser>(&body).map_err(|source| JiraError::Decode { url, source })?;

    trace!("Current Jira user: {:?}", user);
    Ok(user)
  }

  /// Account ID of the user the client authenticates as
  pub async fn get_account_id(&self) -> Result<String, JiraError> {
    Ok(self.get_current_user().await?.account_id)
  }
}

#[cfg(test)]
mod tests {
  use reqwest::StatusCode;
  use wiremock::matchers::{basic_auth, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::JiraClient;
  use crate::error::JiraError;
  use crate::models::JiraAuth;

  fn client_for(mock_server: &MockServer) -> JiraClient {
    let auth = JiraAuth {
      username: "test_user".to_string(),
      api_token: "test_token".to_string(),
    };
    JiraClient::new(&mock_server.uri(), auth)
  }

  #[tokio::test]
  async fn test_get_account_id() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/latest/myself"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "accountId": "abc123",
          "displayName": "Test User"
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let account_id = client_for(&mock_server).get_account_id().await?;
    assert_eq!(account_id, "abc123");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_account_id_reports_status() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/latest/myself"))
      .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
      .mount(&mock_server)
      .await;

    let error = client_for(&mock_server).get_account_id().await.unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
    assert!(error.to_string().contains("401"));
    Ok(())
  }

  #[tokio::test]
  async fn test_get_account_id_decode_failure() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/latest/myself"))
      .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
      .mount(&mock_server)
      .await;

    let error = client_for(&mock_server).get_account_id().await.unwrap_err();

    assert!(matches!(error, JiraError::Decode { .. }));
    assert_eq!(error.status(), None);
    Ok(())
  }

  #[tokio::test]
  async fn test_get_account_id_transport_failure() {
    // Nothing listens on the discard port
    let auth = JiraAuth {
      username: "test_user".to_string(),
      api_token: "test_token".to_string(),
    };
    let client = JiraClient::new("http://127.0.0.1:9", auth);

    let error = client.get_account_id().await.unwrap_err();

    assert!(matches!(error, JiraError::Transport { .. }));
  }
}
