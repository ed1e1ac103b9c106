//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for gh2jira.

mod clone;
mod list;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use gh2jira_core::{ColorMode, Config, default_config_path};
use tracing::debug;

/// Top-level CLI command for gh2jira
#[derive(Parser)]
#[command(name = "gh2jira")]
#[command(about = "Mirror GitHub issues into a Jira project board")]
#[command(
  long_about = "gh2jira lists GitHub issues by milestone, assignee, or label and clones\n\
        them into a Jira project as stories linking back to the upstream issue."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(long, value_enum, ignore_case = true, global = true, default_value_t = ColorMode::Auto)]
  pub colors: ColorMode,

  /// Config file holding the Jira location and the GitHub/Jira tokens
  #[arg(long, global = true, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for gh2jira
#[derive(Subcommand)]
pub enum Commands {
  /// List GitHub issues
  #[command(long_about = "List open GitHub issues filtered by milestone, assignee, or label.\n\n\
            Pull requests are left out of the listing.")]
  #[command(alias = "ls")]
  List(list::ListArgs),

  /// Clone GitHub issues into Jira
  #[command(long_about = "Create a Jira story for each given GitHub issue.\n\n\
            The story summary is '[UPSTREAM] <title> #<number>' and its description\n\
            carries the issue body and a link back to the GitHub issue. Use --dryrun\n\
            to preview the stories without creating them.")]
  Clone(clone::CloneArgs),
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  let config_path = match cli.config {
    Some(path) => path,
    None => default_config_path()?,
  };
  debug!("Loading config from {}", config_path.display());
  let config = Config::read_file(&config_path).context("Failed to load gh2jira config")?;

  match cli.command {
    Commands::List(args) => list::handle_list_command(args, &config),
    Commands::Clone(args) => clone::handle_clone_command(args, &config),
  }
}
