//! Strict tree extractor.
//!
//! Parses the whole document into an HTML5 tree, then looks only where the
//! fields are supposed to be: `title` and `meta` among the direct children
//! of `html > head`, and `img` anywhere below `html > body`. Elements
//! outside those two sections are never inspected.
//!
//! The body walk is an explicit depth-first stack rather than recursion and
//! is bounded by [`TraversalLimits`], so adversarially deep markup cannot
//! exhaust the call stack.

use dom_query::{Document, NodeRef};

use super::Extractor;
use crate::fields::{MetaField, RawExtraction};
use crate::options::Options;

/// Bounds on the body walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalLimits {
    /// Deepest element level below `body` whose children are visited.
    /// Direct children of `body` are at depth 1.
    pub max_depth: usize,
    /// Maximum number of nodes visited before the walk stops.
    pub max_nodes: usize,
}

impl Default for TraversalLimits {
    fn default() -> Self {
        Self::from(&Options::default())
    }
}

impl From<&Options> for TraversalLimits {
    fn from(options: &Options) -> Self {
        Self {
            max_depth: options.max_tree_depth,
            max_nodes: options.max_tree_nodes,
        }
    }
}

/// Tree-walking extractor; the default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeExtractor {
    limits: TraversalLimits,
}

impl TreeExtractor {
    /// Create an extractor with explicit traversal bounds.
    #[must_use]
    pub fn new(limits: TraversalLimits) -> Self {
        Self { limits }
    }
}

impl Extractor for TreeExtractor {
    fn extract(&self, html: &str) -> RawExtraction {
        let doc = Document::from(html);
        let mut raw = RawExtraction::default();

        for root in doc.root().children() {
            if !is_tag(&root, "html") {
                continue;
            }
            for section in root.children() {
                if is_tag(&section, "head") {
                    scan_head(&section, &mut raw);
                } else if is_tag(&section, "body") {
                    collect_body_images(&section, self.limits, &mut raw.images);
                }
            }
        }

        raw
    }
}

fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.node_name().is_some_and(|name| &*name == tag)
}

fn scan_head(head: &NodeRef, raw: &mut RawExtraction) {
    for el in head.children() {
        if is_tag(&el, "title") {
            // First child text node only; an empty title changes nothing.
            if let Some(text) = el.first_child().filter(NodeRef::is_text) {
                raw.fields.set(MetaField::Title, text.text().to_string());
            }
        } else if is_tag(&el, "meta") {
            let Some(content) = el.attr("content") else {
                continue;
            };
            let name = el.attr("name");
            let property = el.attr("property");
            if let Some(field) = MetaField::from_meta_attrs(name.as_deref(), property.as_deref()) {
                raw.fields.set(field, content.to_string());
            }
        }
    }
}

/// Depth-first, document-order collection of every `img` `src` below `body`.
fn collect_body_images(body: &NodeRef, limits: TraversalLimits, images: &mut Vec<String>) {
    let mut stack: Vec<(NodeRef, usize)> = body.children().into_iter().rev().map(|n| (n, 1)).collect();
    let mut visited = 0usize;
    let mut pruned = 0usize;

    while let Some((node, depth)) = stack.pop() {
        if visited >= limits.max_nodes {
            tracing::warn!(max_nodes = limits.max_nodes, "body walk stopped at node limit");
            return;
        }
        visited += 1;

        if is_tag(&node, "img") {
            if let Some(src) = node.attr("src") {
                images.push(src.to_string());
            }
            continue;
        }

        let children = node.children();
        if children.is_empty() {
            continue;
        }
        if depth >= limits.max_depth {
            pruned += 1;
            continue;
        }
        stack.extend(children.into_iter().rev().map(|n| (n, depth + 1)));
    }

    if pruned > 0 {
        tracing::warn!(max_depth = limits.max_depth, pruned, "skipped subtrees below depth limit");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> RawExtraction {
        TreeExtractor::default().extract(html)
    }

    fn nested_divs(depth: usize, inner: &str) -> String {
        format!("<html><body>{}{inner}{}</body></html>", "<div>".repeat(depth), "</div>".repeat(depth))
    }

    #[test]
    fn reads_head_fields() {
        let raw = extract(
            r#"<html><head>
                <title>Page</title>
                <meta name="description" content="Desc">
                <meta name="keywords" content="a, b">
                <meta property="og:site_name" content="Site">
                <meta property="og:image" content="og.png">
            </head><body></body></html>"#,
        );
        assert_eq!(raw.fields.get(MetaField::Title), Some("Page"));
        assert_eq!(raw.fields.get(MetaField::Description), Some("Desc"));
        assert_eq!(raw.fields.get(MetaField::Keywords), Some("a, b"));
        assert_eq!(raw.fields.get(MetaField::OgSiteName), Some("Site"));
        assert_eq!(raw.fields.get(MetaField::OgImage), Some("og.png"));
    }

    #[test]
    fn last_title_in_head_wins() {
        let raw = extract("<html><head><title>One</title><title>Two</title></head></html>");
        assert_eq!(raw.fields.get(MetaField::Title), Some("Two"));
    }

    #[test]
    fn empty_title_is_not_recorded() {
        let raw = extract("<html><head><title></title></head></html>");
        assert_eq!(raw.fields.get(MetaField::Title), None);
    }

    #[test]
    fn meta_in_body_is_ignored() {
        let raw = extract(r#"<html><head></head><body><p>text</p><meta name="author" content="X"></body></html>"#);
        assert_eq!(raw.fields.get(MetaField::Author), None);
    }

    #[test]
    fn images_in_document_order_across_depths() {
        let raw = extract(
            r#"<html><body>
                <img src="1.png">
                <div><p><img src="2.png"></p><img src="3.png"></div>
                <img>
                <img src="1.png">
            </body></html>"#,
        );
        assert_eq!(raw.images, vec!["1.png", "2.png", "3.png", "1.png"]);
    }

    #[test]
    fn fragment_input_is_placed_into_head_and_body() {
        // The HTML5 parser synthesizes html/head/body around bare fragments.
        let raw = extract(r#"<title>Frag</title><img src="f.png">"#);
        assert_eq!(raw.fields.get(MetaField::Title), Some("Frag"));
        assert_eq!(raw.images, vec!["f.png"]);
    }

    #[test]
    fn depth_limit_skips_deeper_images() {
        let limits = TraversalLimits { max_depth: 3, max_nodes: usize::MAX };
        let extractor = TreeExtractor::new(limits);

        let shallow = extractor.extract(&nested_divs(2, r#"<img src="ok.png">"#));
        assert_eq!(shallow.images, vec!["ok.png"]);

        let deep = extractor.extract(&nested_divs(5, r#"<img src="deep.png">"#));
        assert!(deep.images.is_empty());
    }

    #[test]
    fn node_limit_truncates_walk() {
        let limits = TraversalLimits { max_depth: usize::MAX, max_nodes: 2 };
        let raw = TreeExtractor::new(limits)
            .extract(r#"<html><body><img src="a.png"><img src="b.png"><img src="c.png"></body></html>"#);
        assert_eq!(raw.images, vec!["a.png", "b.png"]);
    }

    #[test]
    fn very_deep_nesting_does_not_overflow() {
        let raw = extract(&nested_divs(5_000, r#"<img src="bottom.png">"#));
        assert!(raw.images.is_empty());
    }

    #[test]
    fn garbage_input_yields_empty_result() {
        assert!(extract("").is_empty());
        assert!(extract("</html></body><<>>").is_empty());
    }
}
