//! Infobox extraction.

use crate::dom::{self, ExtractMode, LeadTree};
use crate::options::Selectors;

/// Detach the first infobox and return its inner HTML.
#[must_use]
pub fn extract_infobox(tree: &LeadTree, selectors: &Selectors) -> Option<String> {
    dom::capture_first(&tree.body(), &selectors.infobox, ExtractMode::Detach)
        .map(|html| html.to_string())
}
