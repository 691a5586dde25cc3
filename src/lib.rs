//! # metascrape
//!
//! Extracts page metadata from an HTML document: title, description,
//! author, keywords, Open Graph fields, image references and a thumbnail.
//!
//! ## Quick Start
//!
//! ```rust
//! use metascrape::scrape;
//!
//! let html = r#"<html><head><title>Hi</title>
//! <meta name="description" content="D"></head>
//! <body><img src="p.png"></body></html>"#;
//!
//! let result = scrape(html, Some("http://x.com/"), None);
//! assert_eq!(result.domain, "x.com");
//! assert_eq!(result.title.as_deref(), Some("Hi"));
//! assert_eq!(result.thumbnail.as_deref(), Some("http://x.com/p.png"));
//! ```
//!
//! ## Strategies
//!
//! Three interchangeable parsers are available, chosen by [`Mode`]:
//!
//! - **Default** (`"parse5"`): full HTML5 tree, explicit `head`/`body` walks
//! - **Loose** (`"loose"`): single-pass token stream, no tree
//! - **SelectorBased** (`"cheerio"`): CSS selector queries over the tree
//!
//! Scraping never fails on malformed markup. Only [`scrape_strict`], which
//! validates the source URL and mode name first, returns errors.

mod error;
mod fields;
mod mode;
mod options;
mod patterns;
mod result;

/// Extraction strategies and the mode dispatcher.
pub mod extractor;

/// Merging raw fields into the public result.
pub mod merge;

/// Base location derivation and image path resolution.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use fields::{MetaField, RawExtraction, RawFields, NAME_FIELDS, PROPERTY_FIELDS};
pub use mode::Mode;
pub use options::Options;
pub use result::ScrapeResult;

/// Scrapes metadata with default options.
///
/// # Arguments
///
/// * `html` - The full document text
/// * `source_url` - URL the document was retrieved from. Supplies the
///   domain and the base for relative image references; without it,
///   references are returned as found and the domain is empty.
/// * `mode` - Strategy name; absent or unknown names use the default
///   strategy
#[must_use]
pub fn scrape(html: &str, source_url: Option<&str>, mode: Option<&str>) -> ScrapeResult {
    scrape_with_options(html, source_url, &Options::with_mode(Mode::from_name(mode)))
}

/// Scrapes metadata with custom options.
///
/// # Example
///
/// ```rust
/// use metascrape::{scrape_with_options, Mode, Options};
///
/// let options = Options {
///     mode: Mode::Loose,
///     resolve_images: false,
///     ..Options::default()
/// };
/// let result = scrape_with_options("<img src=a.png>", Some("http://x.com/"), &options);
/// assert_eq!(result.images, Some(vec!["a.png".to_string()]));
/// ```
#[must_use]
pub fn scrape_with_options(html: &str, source_url: Option<&str>, options: &Options) -> ScrapeResult {
    tracing::debug!(mode = %options.mode, html_len = html.len(), "scraping document");

    let mut raw = extractor::dispatch_mode(html, options.mode, options);
    tracing::debug!(fields = raw.fields.len(), images = raw.images.len(), "raw extraction done");

    if options.resolve_images {
        if let Some(url) = source_url {
            let base = url_utils::base_location(url);
            url_utils::resolve_images(&mut raw.images, Some(base.as_str()));
        }
    }

    let domain = source_url
        .and_then(url_utils::extract_hostname)
        .unwrap_or_default();

    merge::merge(raw, domain)
}

/// Scrapes metadata after validating the request.
///
/// The source URL must be absolute with a host, and a given mode must be
/// one of the known names. Nothing is extracted when validation fails.
///
/// # Errors
///
/// * [`Error::InvalidUrl`] - `source_url` does not parse or has no host
/// * [`Error::UnknownMode`] - `mode` is not `parse5`, `loose` or `cheerio`
pub fn scrape_strict(html: &str, source_url: &str, mode: Option<&str>) -> Result<ScrapeResult> {
    let url = url_utils::parse_source_url(source_url)?;
    let mode = mode.map(str::parse::<Mode>).transpose()?.unwrap_or_default();

    Ok(scrape_with_options(html, Some(url.as_str()), &Options::with_mode(mode)))
}
