//! # List Command
//!
//! Lists open GitHub issues matching milestone, assignee, and label filters.

use anyhow::{Context, Result};
use clap::Args;
use gh2jira_core::Config;
use gh2jira_core::output::{format_issue_number, format_labels, format_url, print_info};
use gh2jira_gh::{GitHubIssue, ListerConfig};
use gh2jira_jira::web_url;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tokio::runtime::Runtime;
use tracing::info;

/// GitHub repository used when `--project` is not given
pub const DEFAULT_GITHUB_PROJECT: &str = "operator-framework/operator-sdk";

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
  /// The milestone number from the milestone URL, not the display name
  #[arg(long, default_value = "")]
  pub milestone: String,

  /// Username the issues are assigned to
  #[arg(long, default_value = "")]
  pub assignee: String,

  /// GitHub repository to list, e.g. ORG/REPO
  #[arg(long, default_value = DEFAULT_GITHUB_PROJECT)]
  pub project: String,

  /// Labels the issues must carry, e.g. --label "documentation,bug" or --label doc --label bug
  #[arg(long = "label", value_delimiter = ',')]
  pub labels: Vec<String>,
}

/// One row of the issue table
#[derive(Tabled)]
struct IssueRow {
  #[tabled(rename = "Issue")]
  number: String,
  #[tabled(rename = "Title")]
  title: String,
  #[tabled(rename = "Labels")]
  labels: String,
  #[tabled(rename = "URL")]
  url: String,
}

/// Table rows for every issue that is not a pull request
fn issue_rows(issues: &[GitHubIssue]) -> Vec<IssueRow> {
  issues
    .iter()
    .filter(|issue| !issue.is_pull_request())
    .map(|issue| IssueRow {
      number: format_issue_number(issue.number),
      title: issue.title.clone(),
      labels: format_labels(&issue.label_names()),
      url: format_url(&web_url(&issue.url)),
    })
    .collect()
}

/// Handle the list command
pub fn handle_list_command(args: ListArgs, config: &Config) -> Result<()> {
  let rt = Runtime::new().context("Failed to create async runtime")?;

  let lister = ListerConfig::new()
    .with_token(config.tokens.github.as_str())
    .with_milestone(args.milestone)
    .with_assignee(args.assignee)
    .with_repository(args.project)
    .with_labels(args.labels.into_iter().map(|label| label.trim().to_string()))
    .validate()?;

  let issues = rt
    .block_on(lister.list_issues())
    .with_context(|| format!("Failed to list issues for {}", lister.repo()))?;

  let rows = issue_rows(&issues);
  info!("{} of {} listed entries are issues", rows.len(), issues.len());

  if rows.is_empty() {
    print_info(&format!("No matching issues in {}", lister.repo()));
    return Ok(());
  }

  let mut table = Table::new(rows);
  table.with(Style::rounded());
  println!("{table}");

  Ok(())
}

#[cfg(test)]
mod tests {
  use clap::Parser;
  use gh2jira_test_utils::fixtures::{issue_json, pull_request_json};

  use super::*;
  use crate::cli::{Cli, Commands};

  fn parse_list(args: &[&str]) -> ListArgs {
    let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
    match cli.command {
      Commands::List(list) => list,
      Commands::Clone(_) => panic!("expected list command"),
    }
  }

  #[test]
  fn test_list_defaults() {
    let args = parse_list(&["gh2jira", "list"]);

    assert_eq!(args.project, DEFAULT_GITHUB_PROJECT);
    assert_eq!(args.milestone, "");
    assert_eq!(args.assignee, "");
    assert!(args.labels.is_empty());
  }

  #[test]
  fn test_labels_repeatable_and_comma_separated() {
    let args = parse_list(&["gh2jira", "list", "--label", "documentation,bug", "--label", "help wanted"]);

    assert_eq!(args.labels, vec!["documentation", "bug", "help wanted"]);
  }

  #[test]
  fn test_issue_rows_skip_pull_requests() {
    let issues: Vec<GitHubIssue> = vec![
      serde_json::from_value(issue_json("acme", "widgets", 1, "First")).unwrap(),
      serde_json::from_value(pull_request_json("acme", "widgets", 2, "A PR")).unwrap(),
      serde_json::from_value(issue_json("acme", "widgets", 3, "Third")).unwrap(),
    ];

    let rows = issue_rows(&issues);

    let titles: Vec<&str> = rows.iter().map(|row| row.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Third"]);
    assert!(rows[0].url.contains("https://github.com/acme/widgets/issues/1"));
  }
}
