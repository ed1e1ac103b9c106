//! # Issue Cloner
//!
//! Mirrors one GitHub issue into a Jira project. In dry-run mode the would-be
//! issue is only rendered; otherwise the reporter account is resolved and the
//! issue is created. Every live call creates a new Jira issue, there is no
//! de-duplication against earlier clones.

use std::io::{self, Write};

use gh2jira_gh::GitHubIssue;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::client::JiraClient;
use crate::consts::{DRY_RUN_BANNER, ISSUE_TYPE, SUMMARY_PREFIX};
use crate::error::{CloneError, JiraError};
use crate::models::{AccountRef, CreatedIssue, IssueTypeRef, JiraAuth, NewIssue, NewIssueFields, ProjectRef};

/// Turn a GitHub API issue URL into the URL a browser can open.
///
/// `https://api.github.com/repos/acme/widgets/issues/7` becomes
/// `https://github.com/acme/widgets/issues/7`. Only the first occurrence of
/// each part is rewritten; an empty input stays empty.
pub fn web_url(api_url: &str) -> String {
  if api_url.is_empty() {
    return String::new();
  }
  api_url.replacen("api.github.com", "github.com", 1).replacen("repos/", "", 1)
}

/// Settings for a [`Cloner`].
///
/// Every setter overwrites the previous value of its field; finish with
/// [`ClonerConfig::validate`].
#[derive(Default, Clone)]
pub struct ClonerConfig {
  client: Option<Client>,
  token: Option<String>,
  dry_run: bool,
  project: String,
  jira_base_url: String,
  jira_username: String,
}

impl ClonerConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Use a pre-built HTTP client instead of basic authentication
  pub fn with_client(mut self, client: Client) -> Self {
    self.client = Some(client);
    self
  }

  /// Jira API token
  pub fn with_token(mut self, token: impl Into<String>) -> Self {
    self.token = Some(token.into());
    self
  }

  pub fn with_dry_run(mut self, dry_run: bool) -> Self {
    self.dry_run = dry_run;
    self
  }

  /// Key of the Jira project issues are created in
  pub fn with_project(mut self, project: impl Into<String>) -> Self {
    self.project = project.into();
    self
  }

  pub fn with_jira_base_url(mut self, jira_base_url: impl Into<String>) -> Self {
    self.jira_base_url = jira_base_url.into();
    self
  }

  pub fn with_jira_username(mut self, jira_username: impl Into<String>) -> Self {
    self.jira_username = jira_username.into();
    self
  }

  /// Apply defaults and build the cloner.
  ///
  /// An injected client wins over a token. Without either this fails with
  /// [`CloneError::MissingToken`] before any request is made.
  pub fn validate(self) -> Result<Cloner, CloneError> {
    let client = match (self.client, self.token) {
      (Some(client), _) => JiraClient::with_http_client(&self.jira_base_url, client),
      (None, Some(token)) if !token.is_empty() => {
        debug!("Using Jira basic auth for user {}", self.jira_username);
        JiraClient::new(
          &self.jira_base_url,
          JiraAuth {
            username: self.jira_username,
            api_token: token,
          },
        )
      }
      _ => return Err(CloneError::MissingToken),
    };

    Ok(Cloner {
      client,
      dry_run: self.dry_run,
      project: self.project,
    })
  }
}

/// Creates Jira issues mirroring GitHub issues
pub struct Cloner {
  client: JiraClient,
  dry_run: bool,
  project: String,
}

impl Cloner {
  pub fn is_dry_run(&self) -> bool {
    self.dry_run
  }

  pub fn project(&self) -> &str {
    &self.project
  }

  /// Build the create payload for `issue`
  pub fn new_issue(&self, issue: &GitHubIssue, reporter: Option<String>) -> NewIssue {
    NewIssue {
      fields: NewIssueFields {
        project: ProjectRef {
          key: self.project.clone(),
        },
        summary: format!("{} {} #{}", SUMMARY_PREFIX, issue.title, issue.number),
        description: format!("{}\n\nUpstream Github issue: {}\n", issue.body(), web_url(&issue.url)),
        issue_type: IssueTypeRef {
          name: ISSUE_TYPE.to_string(),
        },
        reporter: reporter.map(|account_id| AccountRef { account_id }),
      },
    }
  }

  /// Clone `issue`, writing progress to stdout.
  pub async fn clone_issue(&self, issue: &GitHubIssue) -> Result<Option<CreatedIssue>, CloneError> {
    let mut stdout = io::stdout();
    self.clone_issue_to(issue, &mut stdout).await
  }

  /// Clone `issue`, writing the preview or progress text to `out`.
  ///
  /// Returns `Ok(None)` in dry-run mode, which makes no requests at all.
  ///
  /// # Errors
  ///
  /// Fails when the reporter account cannot be resolved or Jira rejects the
  /// create request. Nothing is retried.
  #[instrument(skip(self, issue, out), fields(issue = issue.number, project = %self.project))]
  pub async fn clone_issue_to<W: Write>(
    &self,
    issue: &GitHubIssue,
    out: &mut W,
  ) -> Result<Option<CreatedIssue>, CloneError> {
    if self.dry_run {
      let preview = self.new_issue(issue, None);
      self.write_preview(issue, &preview, out)?;
      return Ok(None);
    }

    let account_id = match self.client.get_account_id().await {
      Ok(account_id) => account_id,
      Err(e) => {
        warn!("Failed to resolve Jira account ID: {}", e);
        writeln!(out, "Error cloning issue: failed to get account ID: {e}")?;
        return Err(CloneError::AccountLookup(e));
      }
    };
    debug!("Resolved reporter account ID {}", account_id);

    let new_issue = self.new_issue(issue, Some(account_id));

    writeln!(out, "Creating new issue")?;
    writeln!(
      out,
      "Cloning issue #{} to jira project board: {}\n",
      issue.number, new_issue.fields.project.key
    )?;

    match self.client.create_issue(&new_issue).await {
      Ok(created) => {
        let browse_url = self.client.browse_url(&created.key);
        info!("Cloned issue #{} as {}", issue.number, created.key);
        writeln!(out, "Issue cloned; see {browse_url}")?;
        Ok(Some(created))
      }
      Err(e) => {
        warn!("Failed to create Jira issue: {}", e);
        writeln!(out, "Error cloning issue: {e}")?;
        let partial = partial_issue(&e);
        Err(CloneError::Create { source: e, partial })
      }
    }
  }

  fn write_preview<W: Write>(&self, issue: &GitHubIssue, preview: &NewIssue, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{DRY_RUN_BANNER}")?;
    writeln!(
      out,
      "Cloning issue #{} to jira project board: {}\n",
      issue.number, preview.fields.project.key
    )?;
    writeln!(out, "Summary: {}", preview.fields.summary)?;
    writeln!(out, "Type: {}", preview.fields.issue_type.name)?;
    writeln!(out, "Description:")?;
    writeln!(out, "{}", preview.fields.description)?;
    writeln!(out, "\n{DRY_RUN_BANNER}")
  }
}

/// Issue Jira handed back alongside a rejection, if the body names one.
fn partial_issue(error: &JiraError) -> Option<CreatedIssue> {
  match error {
    JiraError::Status { body, .. } => serde_json::from_str::<CreatedIssue>(body)
      .ok()
      .filter(|issue| !issue.key.is_empty()),
    _ => None,
  }
}
