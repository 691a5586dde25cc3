//! Compiled regex patterns used while normalizing scrape results.
//!
//! All patterns are compiled once at startup using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches references that are already absolute: `http://`, `https://`
/// or `file:///`, in any letter case.
pub static ABSOLUTE_REF_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://|file:///)").expect("ABSOLUTE_REF_PREFIX regex")
});

/// Matches references ending in a raster image extension usable as a
/// thumbnail. SVG is deliberately absent.
pub static THUMBNAIL_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(png|jpg|jpeg|gif|bmp)$").expect("THUMBNAIL_EXTENSION regex")
});
