use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// RAII guard for a temporary gh2jira config file
///
/// Creates a temporary directory holding a `gh2jira.yaml` with the given
/// content. The directory and file are removed when the guard is dropped.
pub struct ConfigFileGuard {
  temp_dir: TempDir,
  path: PathBuf,
}

impl ConfigFileGuard {
  /// Create a new ConfigFileGuard with the given content
  pub fn new(content: &str) -> Self {
    Self::try_new(content).expect("Failed to create test config file")
  }

  /// Fallible variant of [`ConfigFileGuard::new`]
  pub fn try_new(content: &str) -> Result<Self> {
    let temp_dir = TempDir::new().context("Failed to create temp directory")?;
    let path = temp_dir.path().join("gh2jira.yaml");

    let mut file = fs::File::create(&path).context("Failed to create test config file")?;
    file
      .write_all(content.as_bytes())
      .context("Failed to write test config file")?;

    Ok(Self { temp_dir, path })
  }

  /// Get the path to the config file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Get the path to the temporary directory
  pub fn dir(&self) -> &Path {
    self.temp_dir.path()
  }
}
