//! Lead introduction extraction.
//!
//! The introduction is the run of top-level paragraphs before the first
//! heading. It runs after hatnotes, issues and the infobox were detached, so
//! none of their content can end up in it.

use crate::dom::{self, LeadTree};
use crate::extractor::paragraph::is_content_paragraph;
use crate::options::Selectors;

/// Detach the introduction paragraphs and return their HTML.
#[must_use]
pub fn extract_intro(tree: &LeadTree, selectors: &Selectors) -> Option<String> {
    let body = tree.body();
    let paragraphs: Vec<_> = dom::top_level_elements(&body)
        .into_iter()
        .take_while(|node| !dom::is_heading(node))
        .filter(|node| is_content_paragraph(node, selectors))
        .collect();

    if paragraphs.is_empty() {
        return None;
    }

    let mut intro = String::new();
    for paragraph in &paragraphs {
        intro.push_str(&paragraph.html());
        paragraph.remove_from_parent();
    }
    Some(intro)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_stops_at_first_heading() {
        let tree = LeadTree::parse(concat!(
            r#"<p>First.</p><figure><img src="a.jpg"></figure><p>Second.</p>"#,
            r#"<h2>Later</h2><p>Not intro.</p>"#,
        ));

        let intro = extract_intro(&tree, &Selectors::default());

        assert_eq!(intro.as_deref(), Some("<p>First.</p><p>Second.</p>"));
        assert_eq!(tree.count("p"), 1);
    }

    #[test]
    fn test_intro_skips_coordinates_and_empty() {
        let tree = LeadTree::parse(
            r#"<p><span id="coordinates">1°N</span></p><p>  </p><p>Body.</p>"#,
        );
        assert_eq!(extract_intro(&tree, &Selectors::default()).as_deref(), Some("<p>Body.</p>"));
    }

    #[test]
    fn test_no_intro() {
        let tree = LeadTree::parse(r#"<div>Only a div</div>"#);
        assert!(extract_intro(&tree, &Selectors::default()).is_none());
    }
}
