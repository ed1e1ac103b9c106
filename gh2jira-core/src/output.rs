//! # Output Formatting
//!
//! Formatted output functions with colors and emojis for user-facing messages
//! and terminal output.

use owo_colors::OwoColorize;
use {clap, emojis};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Always emit colored output
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  Never,
}

impl ColorMode {
  /// Apply this mode as the process-wide color override.
  pub fn apply(self) {
    match self {
      ColorMode::Always => owo_colors::set_override(true),
      ColorMode::Never => owo_colors::set_override(false),
      // Leave owo-colors to its own terminal detection
      ColorMode::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", check.green().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", warning.yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", info.blue().bold(), message);
}

/// Format a GitHub issue number, e.g. `#42`
pub fn format_issue_number(number: u64) -> String {
  format!("#{number}").bright_cyan().bold().to_string()
}

/// Format a comma separated label list
pub fn format_labels(labels: &[String]) -> String {
  labels.join(", ").yellow().to_string()
}

/// Format a URL
pub fn format_url(url: &str) -> String {
  url.bright_green().to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_emoji_or_default() {
    let result = get_emoji_or_default("check_mark", "✓");
    assert!(!result.is_empty());

    let result = get_emoji_or_default("nonexistent_emoji", "fallback");
    assert_eq!(result, "fallback");
  }

  #[test]
  fn test_format_functions() {
    assert!(format_issue_number(42).contains("#42"));
    assert!(format_labels(&["bug".to_string(), "docs".to_string()]).contains("bug, docs"));
    assert!(format_url("https://github.com/acme/widgets").contains("github.com"));
  }
}
