//! # Clone Command
//!
//! Fetches GitHub issues by number and clones each one into a Jira project.

use anyhow::{Context, Result};
use clap::Args;
use gh2jira_core::Config;
use gh2jira_core::output::{print_success, print_warning};
use gh2jira_gh::ListerConfig;
use gh2jira_jira::ClonerConfig;
use tokio::runtime::Runtime;
use tracing::debug;

use super::list::DEFAULT_GITHUB_PROJECT;

/// Arguments for the clone command
#[derive(Args, Debug)]
pub struct CloneArgs {
  /// GitHub issue numbers to clone
  #[arg(required = true, value_name = "ISSUE")]
  pub issues: Vec<u64>,

  /// GitHub repository the issues live in, e.g. ORG/REPO
  #[arg(long, default_value = DEFAULT_GITHUB_PROJECT)]
  pub project: String,

  /// Key of the Jira project to create the stories in
  #[arg(long = "jira-project", required = true)]
  pub jira_project: String,

  /// Print the stories that would be created without creating them
  #[arg(long = "dryrun", alias = "dry-run")]
  pub dry_run: bool,
}

/// Handle the clone command
///
/// Issues are cloned one after another; the first failure stops the run.
pub fn handle_clone_command(args: CloneArgs, config: &Config) -> Result<()> {
  let rt = Runtime::new().context("Failed to create async runtime")?;

  let lister = ListerConfig::new()
    .with_token(config.tokens.github.as_str())
    .with_repository(args.project)
    .validate()?;

  let cloner = ClonerConfig::new()
    .with_token(config.tokens.jira.as_str())
    .with_jira_username(config.jira_username.as_str())
    .with_jira_base_url(config.jira_base_url.as_str())
    .with_project(args.jira_project)
    .with_dry_run(args.dry_run)
    .validate()?;

  let mut cloned = 0;
  for number in args.issues {
    let issue = rt
      .block_on(lister.get_issue(number))
      .with_context(|| format!("Failed to fetch issue #{number} from {}", lister.repo()))?;

    if issue.is_pull_request() {
      print_warning(&format!("#{number} is a pull request, skipping"));
      continue;
    }

    let created = rt
      .block_on(cloner.clone_issue(&issue))
      .with_context(|| format!("Failed to clone issue #{number}"))?;
    debug!("Clone result for #{}: {:?}", number, created);

    if created.is_some() {
      cloned += 1;
    }
  }

  if !cloner.is_dry_run() {
    print_success(&format!("Cloned {cloned} issue(s) into {}", cloner.project()));
  }

  Ok(())
}
