//! Selector-based extractor.
//!
//! Queries the parsed document with CSS selectors instead of walking it.
//! The shortest of the three strategies, with two behaviours of its own:
//! every matching `<title>` contributes its text (concatenated in document
//! order), and each meta query reads the *first* matching element.

use dom_query::Document;

use super::Extractor;
use crate::fields::{MetaField, RawExtraction};

/// One selector per meta field, evaluated in this order.
const META_QUERIES: [(&str, MetaField); 7] = [
    ("meta[name=description]", MetaField::Description),
    ("meta[name=keywords]", MetaField::Keywords),
    ("meta[name=author]", MetaField::Author),
    (r#"meta[property="og:title"]"#, MetaField::OgTitle),
    (r#"meta[property="og:description"]"#, MetaField::OgDescription),
    (r#"meta[property="og:site_name"]"#, MetaField::OgSiteName),
    (r#"meta[property="og:image"]"#, MetaField::OgImage),
];

/// CSS-selector extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorExtractor;

impl Extractor for SelectorExtractor {
    fn extract(&self, html: &str) -> RawExtraction {
        let doc = Document::from(html);
        let mut raw = RawExtraction::default();

        let titles = doc.select("title");
        if titles.exists() {
            raw.fields.set(MetaField::Title, titles.text().to_string());
        }

        for (query, field) in META_QUERIES {
            if let Some(content) = doc.select(query).attr("content") {
                raw.fields.set(field, content.to_string());
            }
        }

        for img in doc.select("img").nodes() {
            if let Some(src) = img.attr("src").filter(|s| !s.is_empty()) {
                raw.images.push(src.to_string());
            }
        }

        raw
    }
}
