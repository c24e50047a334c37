// src/normalize.rs
// =============================================================================
// Turns an address into the key we deduplicate pages on.
//
// The key is host + path, lower-cased, with one trailing '/' removed:
//   https://Example.com/Path/  ->  example.com/path
//   http://example.com/path    ->  example.com/path
//
// Scheme, port, query and fragment never take part in the key, so
// http://x.com/p?a=1 and http://x.com/p?a=2 count as the same page.
// =============================================================================

use std::fmt;

use url::Url;

use crate::error::CrawlError;

/// Canonical identity of a crawled page
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes a raw address string.
///
/// Fails with `InvalidAddress` when the string does not parse as an absolute
/// URL or has no host (bare paths, `mailto:` links, `file:///...`).
pub fn normalize(address: &str) -> Result<NormalizedKey, CrawlError> {
    let url = Url::parse(address).map_err(|e| CrawlError::invalid_address(address, e))?;
    normalize_url(&url).ok_or_else(|| CrawlError::invalid_address(address, "missing host"))
}

// `None` means the URL has no host
fn normalize_url(url: &Url) -> Option<NormalizedKey> {
    let host = url.host_str().filter(|host| !host.is_empty())?;

    let mut key = format!("{}{}", host, url.path()).to_lowercase();
    if key.ends_with('/') {
        key.pop();
    }

    Some(NormalizedKey(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(address: &str) -> String {
        normalize(address).unwrap().as_str().to_string()
    }

    #[test]
    fn test_remove_scheme_https() {
        assert_eq!(key("https://example.com/path"), "example.com/path");
    }

    #[test]
    fn test_remove_scheme_http() {
        assert_eq!(key("http://example.com/path"), "example.com/path");
    }

    #[test]
    fn test_remove_trailing_slash() {
        assert_eq!(key("http://example.com/path/"), "example.com/path");
    }

    #[test]
    fn test_root_has_no_trailing_slash() {
        assert_eq!(key("https://example.com"), "example.com");
        assert_eq!(key("https://example.com/"), "example.com");
    }

    #[test]
    fn test_scheme_case_and_slash_invariant() {
        assert_eq!(
            normalize("HTTP://Example.com/Path/").unwrap(),
            normalize("http://example.com/path").unwrap()
        );
    }

    #[test]
    fn test_query_fragment_and_port_ignored() {
        assert_eq!(key("http://x.com/p?a=1"), key("http://x.com/p?a=2"));
        assert_eq!(key("http://x.com/p#top"), "x.com/p");
        assert_eq!(key("http://x.com:8080/p"), "x.com/p");
    }

    // Only one trailing '/' is stripped, so "http://x.com//" gives "x.com/" and
    // that normalizes again to "x.com". Idempotence holds for paths without a
    // doubled trailing slash.
    #[test]
    fn test_idempotent_when_rendered_back_to_address() {
        for address in [
            "https://Example.com/Blog/Post/",
            "http://example.com",
            "https://docs.example.com/a/b?c=d#e",
        ] {
            let first = normalize(address).unwrap();
            let again = normalize(&format!("https://{}", first)).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_only_one_trailing_slash_is_stripped() {
        assert_eq!(key("http://x.com//"), "x.com/");
        assert_eq!(key("http://x.com/a//"), "x.com/a/");
    }

    #[test]
    fn test_bare_path_is_invalid() {
        let err = normalize("/just/a/path").unwrap_err();
        assert!(matches!(err, CrawlError::InvalidAddress { .. }));
    }

    #[test]
    fn test_malformed_url_is_invalid() {
        assert!(normalize(r":\\invalidURL").is_err());
    }

    #[test]
    fn test_hostless_scheme_is_invalid() {
        assert!(normalize("mailto:someone@example.com").is_err());
        assert!(normalize("file:///etc/passwd").is_err());
    }
}
