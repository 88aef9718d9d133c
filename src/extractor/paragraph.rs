//! Moves the first readable paragraph to the top of the lead.
//!
//! Lead sections often open with a large infobox or image, which pushes the
//! first sentence below the fold on a phone. In embedded mode the first
//! content-bearing paragraph is moved ahead of them.

use crate::dom::{self, LeadTree, NodeRef, Selection};
use crate::options::Selectors;

/// Whether a top-level element qualifies as the lead paragraph.
///
/// Empty paragraphs, paragraphs holding the coordinates markup and infobox
/// captions are skipped.
#[must_use]
pub fn is_content_paragraph(node: &NodeRef, selectors: &Selectors) -> bool {
    if dom::tag_name(node).as_deref() != Some("p") || dom::is_blank(node) {
        return false;
    }
    if node.is(".infobox-caption, .caption") {
        return false;
    }
    dom::select_all(&Selection::from(*node), &selectors.coordinates).is_empty()
}

/// First child node that is neither whitespace text nor a comment.
fn first_significant_child<'a>(body: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    body.children_it(false).find(|child| {
        if child.is_comment() {
            return false;
        }
        !(child.is_text() && child.text().trim().is_empty())
    })
}

/// Move the first content paragraph to the front of the body.
///
/// Returns `true` when the tree changed. Running it again on its own output
/// is a no-op.
pub fn relocate_first_paragraph(tree: &LeadTree, selectors: &Selectors) -> bool {
    let body = tree.body();
    let Some(body_node) = body.nodes().first().copied() else {
        return false;
    };

    let Some(paragraph) = dom::top_level_elements(&body)
        .into_iter()
        .find(|node| is_content_paragraph(node, selectors))
    else {
        return false;
    };

    if first_significant_child(&body_node).is_some_and(|first| first.id == paragraph.id) {
        return false;
    }

    body_node.prepend_child(&paragraph);
    true
}
