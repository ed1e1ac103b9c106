//! URL helpers shared across crates.

use anyhow::{Context, Result};
use url::{Position, Url};

/// Normalize a service base URL.
///
/// Adds `https://` when no http(s) scheme is present and strips trailing
/// slashes from the path, so callers can append `/rest/...` or `/browse/...`
/// without producing `//`. Query strings and fragments are dropped.
pub fn normalize_base_url(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Base URL cannot be empty"));
  }

  let candidate = if has_http_scheme(trimmed) {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).with_context(|| format!("Failed to parse URL: '{input}'"))?;
  if url.host().is_none() {
    return Err(anyhow::anyhow!("URL '{input}' has no host"));
  }

  let mut result = url[..Position::BeforePath].to_string();
  result.push_str(url.path().trim_end_matches('/'));
  Ok(result)
}

fn has_http_scheme(input: &str) -> bool {
  let lowered = input.to_ascii_lowercase();
  lowered.starts_with("http://") || lowered.starts_with("https://")
}
