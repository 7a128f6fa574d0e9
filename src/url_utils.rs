//! URL validation.
//!
//! A URL is accepted for fetching when it is absolute, uses `http` or
//! `https`, and names a host. The check runs before any network call.

use url::Url;

use crate::error::{Error, Result};

/// Parse `s` as an absolute http(s) URL with a host.
///
/// # Returns
/// * `Some(url)` when `s` is fetchable, `None` otherwise
#[must_use]
pub fn parse_http_url(s: &str) -> Option<Url> {
    let s = s.trim();

    if s.is_empty() {
        return None;
    }

    let url = Url::parse(s).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    url.host().is_some().then_some(url)
}

/// Validate `s`, failing with [`Error::InvalidUrl`].
///
/// # Example
///
/// ```
/// use html_crawler::url_utils::validate_url;
///
/// assert!(validate_url("https://example.com/page").is_ok());
/// assert!(validate_url("not a url").is_err());
/// ```
pub fn validate_url(s: &str) -> Result<Url> {
    parse_http_url(s).ok_or_else(|| Error::InvalidUrl(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(parse_http_url("http://example.com").is_some());
        assert!(parse_http_url("  https://example.com/a?b=c#d  ").is_some());
        assert!(parse_http_url("http://127.0.0.1:8080/x").is_some());
    }

    #[test]
    fn rejects_relative_and_empty() {
        assert!(parse_http_url("").is_none());
        assert!(parse_http_url("/relative/path").is_none());
        assert!(parse_http_url("example.com").is_none());
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(parse_http_url("ftp://example.com/file").is_none());
        assert!(parse_http_url("file:///etc/hosts").is_none());
        assert!(parse_http_url("javascript:alert(1)").is_none());
    }

    #[test]
    fn invalid_url_error_carries_input() {
        let err = validate_url("http://").expect_err("no host");
        assert!(matches!(&err, Error::InvalidUrl(url) if url == "http://"));
        assert_eq!(err.to_string(), "Invalid URL provided: http://");
    }
}
