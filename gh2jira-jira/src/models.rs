use serde::{Deserialize, Serialize};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// The authenticated Jira user as returned by `myself`
#[derive(Debug, Deserialize)]
pub struct JiraUser {
  #[serde(rename = "accountId")]
  pub account_id: String,
  #[serde(rename = "displayName", default)]
  pub display_name: Option<String>,
  #[serde(rename = "emailAddress", default)]
  pub email_address: Option<String>,
}

/// Payload of an issue create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIssue {
  pub fields: NewIssueFields,
}

/// Fields of an issue create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIssueFields {
  pub project: ProjectRef,
  pub summary: String,
  pub description: String,
  #[serde(rename = "issuetype")]
  pub issue_type: IssueTypeRef,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub reporter: Option<AccountRef>,
}

/// Reference to a Jira project by key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
  pub key: String,
}

/// Reference to a Jira issue type by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTypeRef {
  pub name: String,
}

/// Reference to a Jira user by account ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
  #[serde(rename = "accountId")]
  pub account_id: String,
}

/// Issue handle Jira returns after a create request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedIssue {
  #[serde(default)]
  pub id: String,
  #[serde(default)]
  pub key: String,
  #[serde(rename = "self", default)]
  pub self_url: String,
}
