//! Normalization of raw strategy output into a [`ScrapeResult`].
//!
//! Several public fields can be fed by either an Open Graph property or a
//! classic meta tag. Candidates are tried in table order and the first one
//! that is not blank after trimming wins. A field whose candidates are all
//! blank stays absent.

use crate::fields::{MetaField, RawExtraction};
use crate::patterns::THUMBNAIL_EXTENSION;
use crate::result::ScrapeResult;

/// Public text fields fed from raw fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Sitename,
    Title,
    Description,
    Author,
    Keywords,
}

/// Raw field precedence, highest first within each target.
const PRECEDENCE: [(MetaField, Target); 7] = [
    (MetaField::OgSiteName, Target::Sitename),
    (MetaField::OgTitle, Target::Title),
    (MetaField::Title, Target::Title),
    (MetaField::OgDescription, Target::Description),
    (MetaField::Description, Target::Description),
    (MetaField::Author, Target::Author),
    (MetaField::Keywords, Target::Keywords),
];

impl Target {
    fn slot(self, result: &mut ScrapeResult) -> &mut Option<String> {
        match self {
            Target::Sitename => &mut result.sitename,
            Target::Title => &mut result.title,
            Target::Description => &mut result.description,
            Target::Author => &mut result.author,
            Target::Keywords => &mut result.keywords,
        }
    }
}

/// Build the public result from one strategy's output.
///
/// `raw.images` should already be path-resolved; it is moved into the
/// result unchanged. `domain` is copied as given.
#[must_use]
pub fn merge(raw: RawExtraction, domain: impl Into<String>) -> ScrapeResult {
    let mut result = ScrapeResult::for_domain(domain);

    for (field, target) in PRECEDENCE {
        let Some(value) = raw.fields.get(field).filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        let slot = target.slot(&mut result);
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    result.thumbnail = select_thumbnail(raw.fields.get(MetaField::OgImage), &raw.images);

    if !raw.images.is_empty() {
        result.images = Some(raw.images);
    }

    result
}

/// Pick the preview image.
///
/// A non-empty `og:image` wins outright. Otherwise the first image
/// reference ending in a raster extension (`png`, `jpg`, `jpeg`, `gif`,
/// `bmp`, any case) is used.
#[must_use]
pub fn select_thumbnail(og_image: Option<&str>, images: &[String]) -> Option<String> {
    if let Some(og_image) = og_image.filter(|v| !v.is_empty()) {
        return Some(og_image.to_string());
    }
    images
        .iter()
        .find(|src| THUMBNAIL_EXTENSION.is_match(src))
        .cloned()
}
