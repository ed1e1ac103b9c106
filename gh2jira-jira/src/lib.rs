//! # Jira API Client
//!
//! Provides Jira REST API integration for resolving the current account and
//! creating issues, plus the [`Cloner`] that mirrors a GitHub issue into a
//! Jira project.

mod client;
mod endpoints;
pub mod cloner;
pub mod consts;
pub mod error;
pub mod models;

// Re-export the client
pub use client::JiraClient;
pub use cloner::{Cloner, ClonerConfig, web_url};
pub use error::{CloneError, JiraError};
// Re-export models
pub use models::{AccountRef, CreatedIssue, IssueTypeRef, JiraAuth, JiraUser, NewIssue, NewIssueFields, ProjectRef};
