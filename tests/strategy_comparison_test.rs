//! The three strategies share a field set but not every reading rule.
//! These tests pin down where they deliberately disagree.

use metascrape::extractor::{Extractor, SelectorExtractor, StreamingExtractor, TreeExtractor};
use metascrape::{scrape, MetaField, RawExtraction};

fn all_three(html: &str) -> (RawExtraction, RawExtraction, RawExtraction) {
    (
        StreamingExtractor.extract(html),
        TreeExtractor::default().extract(html),
        SelectorExtractor.extract(html),
    )
}

#[test]
fn duplicate_titles_last_wins_except_selector_concatenates() {
    let html = "<html><head><title>First</title><title>Second</title></head><body></body></html>";

    let (streaming, tree, selector) = all_three(html);

    assert_eq!(streaming.fields.get(MetaField::Title), Some("Second"));
    assert_eq!(tree.fields.get(MetaField::Title), Some("Second"));
    assert_eq!(selector.fields.get(MetaField::Title), Some("FirstSecond"));

    assert_eq!(scrape(html, None, Some("loose")).title.as_deref(), Some("Second"));
    assert_eq!(scrape(html, None, Some("parse5")).title.as_deref(), Some("Second"));
    assert_eq!(scrape(html, None, Some("cheerio")).title.as_deref(), Some("FirstSecond"));
}

#[test]
fn duplicate_meta_last_wins_except_selector_takes_first() {
    let html = r#"<html><head>
        <meta name="description" content="one">
        <meta name="description" content="two">
    </head></html>"#;

    let (streaming, tree, selector) = all_three(html);

    assert_eq!(streaming.fields.get(MetaField::Description), Some("two"));
    assert_eq!(tree.fields.get(MetaField::Description), Some("two"));
    assert_eq!(selector.fields.get(MetaField::Description), Some("one"));
}

#[test]
fn only_tree_strategy_ignores_meta_outside_head() {
    let html = r#"<html><head></head><body><div><meta name="author" content="Body Author"></div></body></html>"#;

    let (streaming, tree, selector) = all_three(html);

    assert_eq!(streaming.fields.get(MetaField::Author), Some("Body Author"));
    assert_eq!(tree.fields.get(MetaField::Author), None);
    assert_eq!(selector.fields.get(MetaField::Author), Some("Body Author"));
}

#[test]
fn empty_src_is_kept_except_by_selector() {
    let html = r#"<html><body><img src=""><img src="a.png"></body></html>"#;

    let (streaming, tree, selector) = all_three(html);

    assert_eq!(streaming.images, vec!["", "a.png"]);
    assert_eq!(tree.images, vec!["", "a.png"]);
    assert_eq!(selector.images, vec!["a.png"]);
}

#[test]
fn all_strategies_agree_on_image_order() {
    let html = r#"<html><body>
        <img src="3.png"><section><img src="1.png"><p><img src="2.png"></p></section><img src="3.png">
    </body></html>"#;

    let (streaming, tree, selector) = all_three(html);

    let expected = vec!["3.png", "1.png", "2.png", "3.png"];
    assert_eq!(streaming.images, expected);
    assert_eq!(tree.images, expected);
    assert_eq!(selector.images, expected);
}
