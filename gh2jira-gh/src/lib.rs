//! # GitHub API Client
//!
//! Provides GitHub REST API integration for listing and fetching repository
//! issues, including transparent pagination and server-side filtering by
//! milestone, assignee, and labels.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod lister;
pub mod models;
pub mod pagination;
pub mod repo;

// Re-export the client
pub use client::GitHubClient;
// Re-export the lister
pub use error::GitHubError;
pub use lister::{Lister, ListerConfig};
// Re-export models
pub use models::{GitHubIssue, GitHubLabel, GitHubUser, IssueFilter, IssuePage, PullRequestRef};
pub use repo::RepoRef;
