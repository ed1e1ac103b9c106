//! Constants for the gh2jira-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("gh2jira/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Issue type every cloned issue is created with
pub const ISSUE_TYPE: &str = "Story";

/// Prefix of the summary of every cloned issue
pub const SUMMARY_PREFIX: &str = "[UPSTREAM]";

/// Banner framing the dry-run preview
pub const DRY_RUN_BANNER: &str = "############# DRY RUN MODE #############";
