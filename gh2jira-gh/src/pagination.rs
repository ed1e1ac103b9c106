//! Link header handling for paginated GitHub responses.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::{HeaderMap, LINK};
use url::Url;

static NEXT_LINK_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r#"<([^>]+)>\s*;\s*rel="next""#).expect("Failed to compile Link header regex"));

/// Extract the `page` number of the `rel="next"` entry of a `Link` header.
///
/// Returns `None` on the last page, i.e. when there is no next link or it
/// carries no usable `page` parameter.
pub fn next_page(headers: &HeaderMap) -> Option<u32> {
  let link = headers.get(LINK)?.to_str().ok()?;
  parse_next_page(link)
}

fn parse_next_page(link: &str) -> Option<u32> {
  let captures = NEXT_LINK_REGEX.captures(link)?;
  let next = Url::parse(captures.get(1)?.as_str()).ok()?;

  next
    .query_pairs()
    .find(|(key, _)| key == "page")
    .and_then(|(_, value)| value.parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
  use reqwest::header::HeaderValue;

  use super::*;

  #[test]
  fn test_next_page_middle_page() {
    let link = r#"<https://api.github.com/repositories/1/issues?state=open&per_page=50&page=3>; rel="next", <https://api.github.com/repositories/1/issues?state=open&per_page=50&page=7>; rel="last", <https://api.github.com/repositories/1/issues?state=open&per_page=50&page=1>; rel="first""#;
    assert_eq!(parse_next_page(link), Some(3));
  }

  #[test]
  fn test_next_page_last_page() {
    let link = r#"<https://api.github.com/repositories/1/issues?page=1>; rel="first", <https://api.github.com/repositories/1/issues?page=6>; rel="prev""#;
    assert_eq!(parse_next_page(link), None);
  }

  #[test]
  fn test_next_page_without_link_header() {
    assert_eq!(next_page(&HeaderMap::new()), None);
  }

  #[test]
  fn test_next_page_from_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(
      LINK,
      HeaderValue::from_static(r#"<http://127.0.0.1:4000/repos/acme/widgets/issues?page=2>; rel="next""#),
    );
    assert_eq!(next_page(&headers), Some(2));
  }
}
