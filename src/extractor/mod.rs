//! Extraction strategies.
//!
//! Three interchangeable strategies turn raw HTML text into a
//! [`RawExtraction`]. They agree on which fields exist but differ in how
//! they read the document:
//!
//! - `streaming`: single pass over the token stream, no tree; fastest and
//!   most tolerant. The last `<title>` wins.
//! - `tree`: full HTML5 tree, then explicit walks of `html > head` and
//!   `html > body`. The last `<title>` in `head` wins.
//! - `selector`: full tree queried with CSS selectors. All `<title>` texts
//!   are concatenated and meta queries take the first match.
//!
//! None of them fail: unparseable input just yields fewer fields.
//!
//! # Usage
//!
//! ```rust
//! use metascrape::extractor::{dispatch, Extractor, StreamingExtractor};
//! use metascrape::{MetaField, Mode};
//!
//! let html = "<title>Hi</title><img src=a.png>";
//! let raw = StreamingExtractor.extract(html);
//! assert_eq!(raw.fields.get(MetaField::Title), Some("Hi"));
//!
//! let raw = dispatch(html, Some("cheerio"));
//! assert_eq!(raw.images, vec!["a.png"]);
//! assert_eq!(Mode::from_name(Some("cheerio")), Mode::SelectorBased);
//! ```

pub mod selector;
pub mod streaming;
pub mod tree;

pub use selector::SelectorExtractor;
pub use streaming::{StreamingExtractor, TitleState};
pub use tree::{TraversalLimits, TreeExtractor};

use crate::fields::RawExtraction;
use crate::mode::Mode;
use crate::options::Options;

/// A strategy that reads HTML text into raw metadata fields and images.
///
/// Implementations hold no state across calls and perform no I/O.
pub trait Extractor {
    /// Parse `html` and collect fields and image references.
    fn extract(&self, html: &str) -> RawExtraction;
}

/// Run the strategy named by `mode`, falling back to the tree strategy for
/// absent or unknown names.
#[must_use]
pub fn dispatch(html: &str, mode: Option<&str>) -> RawExtraction {
    dispatch_mode(html, Mode::from_name(mode), &Options::default())
}

/// Run the strategy for an already-resolved [`Mode`].
#[must_use]
pub fn dispatch_mode(html: &str, mode: Mode, options: &Options) -> RawExtraction {
    match mode {
        Mode::Loose => StreamingExtractor.extract(html),
        Mode::SelectorBased => SelectorExtractor.extract(html),
        Mode::Default => TreeExtractor::new(TraversalLimits::from(options)).extract(html),
    }
}
