//! # Configuration Management
//!
//! Loads the gh2jira YAML configuration file holding the Jira location, the
//! Jira username, and the GitHub/Jira API tokens.
//!
//! ```yaml
//! schema: gh2jira.config
//! jiraBaseURL: https://example.atlassian.net/
//! jiraUsername: someone@example.com
//! authTokens:
//!   github: ghp_xxx
//!   jira: xxx
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::url::normalize_base_url;

/// Value the `schema` key must carry.
pub const SCHEMA_NAME: &str = "gh2jira.config";

/// Jira instance used when the file does not name one.
pub const DEFAULT_JIRA_BASE_URL: &str = "https://gh2jiratest.atlassian.net/";

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "gh2jira.yaml";

/// API tokens for both services
#[derive(Clone, Default, Deserialize)]
pub struct AuthTokens {
  #[serde(default)]
  pub github: String,
  #[serde(default)]
  pub jira: String,
}

impl fmt::Debug for AuthTokens {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AuthTokens")
      .field("github", &"<redacted>")
      .field("jira", &"<redacted>")
      .finish()
  }
}

/// Parsed and validated gh2jira configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub schema: String,
  #[serde(rename = "jiraBaseURL", alias = "jiraBaseUrl", default)]
  pub jira_base_url: String,
  #[serde(rename = "jiraUsername", default)]
  pub jira_username: String,
  #[serde(rename = "authTokens", default)]
  pub tokens: AuthTokens,
}

impl Config {
  /// Read and validate the configuration file at `path`.
  pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;

    Self::from_yaml_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
  }

  /// Parse configuration text, validate required fields and apply defaults.
  pub fn from_yaml_str(content: &str) -> Result<Self> {
    let mut config: Config = serde_yaml::from_str(content).context("Failed to parse config YAML")?;
    config.validate()?;
    config.set_defaults()?;
    Ok(config)
  }

  fn validate(&self) -> Result<()> {
    if self.schema != SCHEMA_NAME {
      return Err(anyhow::anyhow!(
        "invalid schema: {:?} should be {:?}",
        self.schema,
        SCHEMA_NAME
      ));
    }
    if self.tokens.github.is_empty() {
      return Err(anyhow::anyhow!("missing required github token"));
    }
    if self.tokens.jira.is_empty() {
      return Err(anyhow::anyhow!("missing required jira token"));
    }
    if self.jira_username.is_empty() {
      return Err(anyhow::anyhow!("missing required jira username"));
    }
    Ok(())
  }

  fn set_defaults(&mut self) -> Result<()> {
    let base = if self.jira_base_url.trim().is_empty() {
      DEFAULT_JIRA_BASE_URL
    } else {
      self.jira_base_url.as_str()
    };
    self.jira_base_url = normalize_base_url(base).context("Invalid jiraBaseURL")?;
    Ok(())
  }
}

/// Default location of the config file in the platform config directory.
pub fn default_config_path() -> Result<PathBuf> {
  let proj_dirs = ProjectDirs::from("", "", "gh2jira").context("Failed to determine project directories")?;
  Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}
