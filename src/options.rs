//! Configuration options for scraping.
//!
//! The `Options` struct selects the extraction strategy and bounds the
//! work the strict tree strategy may do on pathological input.

use crate::mode::Mode;

/// Configuration options for scraping.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use metascrape::{Mode, Options};
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     mode: Mode::Loose,
///     resolve_images: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Extraction strategy.
    ///
    /// Default: `Mode::Default`
    pub mode: Mode,

    /// Maximum element depth below `<body>` the tree strategy descends.
    ///
    /// Subtrees nested deeper than this are skipped when collecting images.
    ///
    /// Default: `512`
    pub max_tree_depth: usize,

    /// Maximum number of nodes the tree strategy visits below `<body>`.
    ///
    /// When reached, the walk stops and keeps the images found so far.
    ///
    /// Default: `1_000_000`
    pub max_tree_nodes: usize,

    /// Join relative image references onto the source URL's base location.
    ///
    /// Has no effect when no source URL is given.
    ///
    /// Default: `true`
    pub resolve_images: bool,
}

impl Options {
    /// Default options with the given strategy.
    #[must_use]
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: Mode::Default,
            max_tree_depth: 512,
            max_tree_nodes: 1_000_000,
            resolve_images: true,
        }
    }
}
