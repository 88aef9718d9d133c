//! Hatnote extraction.

use crate::dom::{self, ExtractMode, LeadTree};
use crate::options::Selectors;

/// Collect the inner HTML of every hatnote, in document order.
///
/// An empty vector means the page has no hatnotes.
#[must_use]
pub fn extract_hatnotes(tree: &LeadTree, selectors: &Selectors, mode: ExtractMode) -> Vec<String> {
    dom::capture_all(&tree.body(), &selectors.hatnote, mode)
        .into_iter()
        .map(|html| html.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAD: &str = concat!(
        r#"<div role="note" class="hatnote">For the band, see <a href="./Foo_(band)">Foo (band)</a>.</div>"#,
        r#"<div class="hatnote">"Bar" redirects here.</div>"#,
        r#"<p>Foo is a bar.</p>"#,
    );

    #[test]
    fn test_detach_removes_every_hatnote() {
        let tree = LeadTree::parse(LEAD);
        let selectors = Selectors::default();
        let before = tree.count(&selectors.hatnote);

        let hatnotes = extract_hatnotes(&tree, &selectors, ExtractMode::Detach);

        assert_eq!(hatnotes.len(), 2);
        assert_eq!(hatnotes[0], r#"For the band, see <a href="./Foo_(band)">Foo (band)</a>."#);
        assert_eq!(before - hatnotes.len(), tree.count(&selectors.hatnote));
        assert_eq!(tree.inner_html(), "<p>Foo is a bar.</p>");
    }

    #[test]
    fn test_read_only_matches_original_html() {
        let tree = LeadTree::parse(LEAD);
        let selectors = Selectors::default();

        let hatnotes = extract_hatnotes(&tree, &selectors, ExtractMode::ReadOnly);

        assert_eq!(hatnotes.len(), 2);
        assert_eq!(hatnotes[1], r#""Bar" redirects here."#);
        assert_eq!(tree.count(&selectors.hatnote), 2);
        assert_eq!(tree.inner_html(), LEAD);
    }

    #[test]
    fn test_page_without_hatnotes() {
        let tree = LeadTree::parse("<p>Plain.</p>");
        assert!(extract_hatnotes(&tree, &Selectors::default(), ExtractMode::Detach).is_empty());
    }
}
