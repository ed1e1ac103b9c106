//! Canned GitHub API payloads for mock servers.

use serde_json::{Value, json};

/// JSON body of a GitHub issue as returned by the REST API.
pub fn issue_json(org: &str, repo: &str, number: u64, title: &str) -> Value {
  json!({
    "id": 1000 + number,
    "number": number,
    "title": title,
    "body": format!("Body of issue {number}"),
    "state": "open",
    "url": format!("https://api.github.com/repos/{org}/{repo}/issues/{number}"),
    "html_url": format!("https://github.com/{org}/{repo}/issues/{number}"),
    "user": {
      "login": "octocat",
      "id": 1
    },
    "labels": [
      { "name": "bug" }
    ],
    "assignees": []
  })
}

/// JSON body of a pull request as returned by the issues API.
pub fn pull_request_json(org: &str, repo: &str, number: u64, title: &str) -> Value {
  let mut value = issue_json(org, repo, number, title);
  value["pull_request"] = json!({
    "url": format!("https://api.github.com/repos/{org}/{repo}/pulls/{number}"),
    "html_url": format!("https://github.com/{org}/{repo}/pull/{number}")
  });
  value
}

/// A page of issues numbered `start..start + count`.
pub fn issue_page(org: &str, repo: &str, start: u64, count: u64) -> Value {
  Value::Array(
    (start..start + count)
      .map(|number| issue_json(org, repo, number, &format!("Issue {number}")))
      .collect(),
  )
}
