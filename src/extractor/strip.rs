//! Removal of markup that never reaches a mobile client.

use crate::dom::{self, LeadTree};
use crate::options::Selectors;

/// Remove every always-stripped element from the tree.
///
/// Returns the number of removed subtrees.
pub fn strip_unwanted(tree: &LeadTree, selectors: &Selectors) -> usize {
    let body = tree.body();
    selectors
        .always_stripped
        .iter()
        .map(|selector| dom::remove_all(&body, selector))
        .sum()
}

/// DOM transform applied to each section of legacy main-page content.
#[must_use]
pub fn main_page_transform(html: &str, selectors: &Selectors) -> String {
    let tree = LeadTree::parse(html);
    let removed = strip_unwanted(&tree, selectors);
    tracing::debug!(removed, "main page section cleaned");
    tree.inner_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_configured_elements() {
        let tree = LeadTree::parse(
            r#"<p>Text<span class="mw-editsection">[edit]</span></p><table class="navbox"><tr><td>x</td></tr></table><script>x()</script>"#,
        );

        let removed = strip_unwanted(&tree, &Selectors::default());

        assert_eq!(removed, 3);
        assert_eq!(tree.inner_html(), "<p>Text</p>");
    }

    #[test]
    fn test_main_page_transform_keeps_content() {
        let html = main_page_transform(
            r#"<div id="mp-tfa"><p>Featured</p><div class="noprint">hidden</div></div>"#,
            &Selectors::default(),
        );
        assert_eq!(html, r#"<div id="mp-tfa"><p>Featured</p></div>"#);
    }
}
