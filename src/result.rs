//! Result type for scrape output.
//!
//! This is the public, normalized view of a document's metadata, built from
//! one strategy's raw fields by the merger.

use serde::{Deserialize, Serialize};

/// Metadata scraped from an HTML document.
///
/// Only `domain` is always present. Absent fields are omitted when
/// serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// Hostname of the source URL. Supplied by the caller, never read from
    /// the document; empty when no source URL is known.
    pub domain: String,

    /// Site name (`og:site_name`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sitename: Option<String>,

    /// Page title (`og:title`, then `<title>`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Page description (`og:description`, then meta description).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Meta author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Meta keywords, as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    /// Preview image: `og:image`, or the first raster image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Image references in document order, path-resolved. Never empty
    /// when present; duplicates are kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl ScrapeResult {
    /// A result carrying only the domain.
    #[must_use]
    pub fn for_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Whether nothing besides `domain` was found.
    #[must_use]
    pub fn has_only_domain(&self) -> bool {
        *self == Self::for_domain(self.domain.clone())
    }
}
