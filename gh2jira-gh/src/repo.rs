//! Repository references in `org/repo` form.

use std::fmt;

/// A GitHub repository split into its organisation and repository parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoRef {
  pub org: String,
  pub repo: String,
}

impl RepoRef {
  /// Parse an `org/repo` reference.
  ///
  /// Anything after a second `/` is ignored. A reference without any `/`
  /// yields an empty org and uses the whole string as the repository name.
  pub fn parse(reference: &str) -> Self {
    match reference.split_once('/') {
      Some((org, rest)) => Self {
        org: org.to_string(),
        repo: rest.split('/').next().unwrap_or_default().to_string(),
      },
      None => Self {
        org: String::new(),
        repo: reference.to_string(),
      },
    }
  }
}

impl From<&str> for RepoRef {
  fn from(reference: &str) -> Self {
    Self::parse(reference)
  }
}

impl fmt::Display for RepoRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.org, self.repo)
  }
}
