//! # GitHub HTTP Client
//!
//! HTTP client for GitHub API interactions, handling authentication and
//! request building for the GitHub REST API.

use reqwest::{Client, RequestBuilder, header};

use crate::consts::{ACCEPT, API_BASE_URL, USER_AGENT};

/// Represents a GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  /// Bearer token; `None` when an injected client carries its own auth
  pub(crate) token: Option<String>,
}

impl GitHubClient {
  /// Create a new GitHub client authenticating with a bearer token
  pub fn new(token: &str) -> Self {
    Self {
      client: Client::new(),
      base_url: API_BASE_URL.to_string(),
      token: Some(token.to_string()),
    }
  }

  /// Wrap a pre-built HTTP client; no auth header is added to requests
  pub fn with_http_client(client: Client) -> Self {
    Self {
      client,
      base_url: API_BASE_URL.to_string(),
      token: None,
    }
  }

  /// Point the client at another API root, e.g. GitHub Enterprise
  pub fn with_base_url(mut self, base_url: &str) -> Self {
    self.base_url = base_url.trim_end_matches('/').to_string();
    self
  }

  /// Base URL requests are issued against
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Start a GET request with the standard GitHub headers and credentials
  pub(crate) fn get(&self, url: &str) -> RequestBuilder {
    let request = self
      .client
      .get(url)
      .header(header::ACCEPT, ACCEPT)
      .header(header::USER_AGENT, USER_AGENT);

    match &self.token {
      Some(token) => request.bearer_auth(token),
      None => request,
    }
  }
}
