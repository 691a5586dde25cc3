//! URL Utility Functions
//!
//! Derives the base location and hostname from a document's source URL,
//! and joins relative image references onto that base.
//!
//! Joining is a plain string operation, not RFC 3986 resolution: `..`
//! segments are kept, query strings and fragments are not touched, and the
//! result is not validated.

use url::Url;

use crate::error::{Error, Result};
use crate::patterns::ABSOLUTE_REF_PREFIX;

/// Check whether a reference already carries an absolute scheme prefix
/// (`http://`, `https://`, `file:///`, any case).
#[must_use]
pub fn has_absolute_prefix(reference: &str) -> bool {
    ABSOLUTE_REF_PREFIX.is_match(reference)
}

/// Join a reference onto a base with exactly the separator needed.
///
/// If the base ends with `/` or the reference starts with `/`, the two are
/// concatenated as-is, otherwise a single `/` is inserted. A base ending in
/// `/` joined with a reference starting with `/` keeps both slashes.
///
/// # Examples
/// ```
/// use metascrape::url_utils::join_uri;
///
/// assert_eq!(join_uri("http://a.com", "x.png"), "http://a.com/x.png");
/// assert_eq!(join_uri("http://a.com/dir/", "../x.png"), "http://a.com/dir/../x.png");
/// ```
#[must_use]
pub fn join_uri(base: &str, reference: &str) -> String {
    if base.ends_with('/') || reference.starts_with('/') {
        format!("{base}{reference}")
    } else {
        format!("{base}/{reference}")
    }
}

/// Resolve a single image reference against a base location.
#[must_use]
pub fn resolve_ref(reference: &str, base: &str) -> String {
    if has_absolute_prefix(reference) {
        reference.to_string()
    } else {
        join_uri(base, reference)
    }
}

/// Rewrite image references in place against `base`.
///
/// With no base the references are left untouched. Order and length are
/// always preserved.
pub fn resolve_images(images: &mut [String], base: Option<&str>) {
    let Some(base) = base else {
        return;
    };

    for image in images.iter_mut() {
        *image = resolve_ref(image, base);
    }
}

/// Normalize a source URL the way a URL parser serializes it.
///
/// `http://pudim.com.br` becomes `http://pudim.com.br/`. Input that does
/// not parse is returned trimmed but otherwise unchanged.
#[must_use]
pub fn normalize_source_url(source_url: &str) -> String {
    let source_url = source_url.trim();
    match Url::parse(source_url) {
        Ok(url) => url.to_string(),
        Err(_) => source_url.to_string(),
    }
}

/// Directory part of a URL string.
///
/// A URL ending in `/` is already a directory and is returned unchanged.
/// Otherwise everything from the last `/` onwards is dropped, so
/// `http://x.com/a/b.html` gives `http://x.com/a`. A string without any
/// `/` is returned unchanged.
#[must_use]
pub fn uri_dir(url: &str) -> &str {
    if url.ends_with('/') {
        return url;
    }
    match url.rfind('/') {
        Some(0) => "/",
        Some(idx) => &url[..idx],
        None => url,
    }
}

/// Base location used for resolving image references found in the
/// document retrieved from `source_url`.
///
/// # Examples
/// ```
/// use metascrape::url_utils::base_location;
///
/// assert_eq!(base_location("http://pudim.com.br"), "http://pudim.com.br/");
/// assert_eq!(base_location("http://x.com/blog/post.html"), "http://x.com/blog");
/// ```
#[must_use]
pub fn base_location(source_url: &str) -> String {
    let normalized = normalize_source_url(source_url);
    uri_dir(&normalized).to_string()
}

/// Extract the hostname from a source URL.
///
/// # Returns
/// * The hostname, or `None` when the URL does not parse or has no host
#[must_use]
pub fn extract_hostname(source_url: &str) -> Option<String> {
    Url::parse(source_url.trim())
        .ok()
        .and_then(|url| url.host_str().map(ToString::to_string))
}

/// Parse a source URL strictly: it must be absolute and carry a host.
pub fn parse_source_url(source_url: &str) -> Result<Url> {
    let trimmed = source_url.trim();
    let url = Url::parse(trimmed).map_err(|e| Error::InvalidUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    if url.host_str().is_none() {
        return Err(Error::InvalidUrl {
            url: trimmed.to_string(),
            reason: "URL has no host".to_string(),
        });
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(refs: &[&str], base: Option<&str>) -> Vec<String> {
        let mut images: Vec<String> = refs.iter().map(ToString::to_string).collect();
        resolve_images(&mut images, base);
        images
    }

    #[test]
    fn test_join_inserts_single_separator() {
        assert_eq!(join_uri("http://pudim.com.br", "pudim.png"), "http://pudim.com.br/pudim.png");
        assert_eq!(join_uri("http://a.com/", "x.png"), "http://a.com/x.png");
        assert_eq!(join_uri("http://a.com", "/x.png"), "http://a.com/x.png");
        assert_eq!(join_uri("http://a.com/", "/x.png"), "http://a.com//x.png");
    }

    #[test]
    fn test_resolve_keeps_dot_segments() {
        assert_eq!(
            resolved(&["../x.png"], Some("http://a.com/dir/")),
            vec!["http://a.com/dir/../x.png"]
        );
    }

    #[test]
    fn test_resolve_leaves_absolute_refs_alone() {
        let refs = ["http://cdn.com/a.png", "HTTPS://cdn.com/b.png", "FILE:///tmp/c.png"];
        assert_eq!(resolved(&refs, Some("http://x.com/")), refs);
    }

    #[test]
    fn test_resolve_without_base_is_identity() {
        let refs = ["a.png", "/b.png", "../c.png"];
        assert_eq!(resolved(&refs, None), refs);
    }

    #[test]
    fn test_resolve_preserves_order_and_duplicates() {
        assert_eq!(
            resolved(&["a.png", "b.png", "a.png", ""], Some("http://x.com")),
            vec!["http://x.com/a.png", "http://x.com/b.png", "http://x.com/a.png", "http://x.com/"]
        );
    }

    #[test]
    fn test_protocol_relative_refs_are_joined() {
        assert_eq!(
            resolve_ref("//cdn.com/a.png", "http://x.com"),
            "http://x.com//cdn.com/a.png"
        );
    }

    #[test]
    fn test_uri_dir() {
        assert_eq!(uri_dir("http://x.com/"), "http://x.com/");
        assert_eq!(uri_dir("http://x.com/a/b.html"), "http://x.com/a");
        assert_eq!(uri_dir("/index.html"), "/");
        assert_eq!(uri_dir("page.html"), "page.html");
    }

    #[test]
    fn test_base_location_normalizes_host_only_url() {
        assert_eq!(base_location("http://pudim.com.br"), "http://pudim.com.br/");
        assert_eq!(base_location("  http://x.com/a/  "), "http://x.com/a/");
        assert_eq!(base_location("not a url/page"), "not a url");
    }

    #[test]
    fn test_extract_hostname() {
        assert_eq!(extract_hostname("http://x.com/a"), Some("x.com".to_string()));
        assert_eq!(extract_hostname("https://Sub.Example.ORG:8080/"), Some("sub.example.org".to_string()));
        assert_eq!(extract_hostname("/relative"), None);
        assert_eq!(extract_hostname("mailto:a@b.com"), None);
    }

    #[test]
    fn test_parse_source_url_rejects_invalid() {
        assert!(parse_source_url("http://x.com").is_ok());
        assert!(matches!(parse_source_url("x.com"), Err(Error::InvalidUrl { .. })));
        assert!(matches!(parse_source_url("data:text/plain,hi"), Err(Error::InvalidUrl { .. })));
    }
}
