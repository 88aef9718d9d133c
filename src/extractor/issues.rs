//! Maintenance banner (page issues) extraction.
//!
//! Each issue is one text span inside a cleanup or dispute banner. A
//! multiple-issues banner yields one entry per listed issue.

use crate::dom::{self, ExtractMode, LeadTree, Selection};
use crate::options::Selectors;
use crate::result::PageIssue;

/// Collect the page issues, in document order.
///
/// In [`ExtractMode::Detach`] the issue spans are removed, and so are banners
/// left without any issue text.
#[must_use]
pub fn extract_page_issues(tree: &LeadTree, selectors: &Selectors, mode: ExtractMode) -> Vec<PageIssue> {
    let body = tree.body();
    let issues: Vec<PageIssue> = dom::capture_all(&body, &selectors.issue, mode)
        .into_iter()
        .map(|text| PageIssue {
            text: text.to_string(),
        })
        .collect();

    if mode == ExtractMode::Detach && !issues.is_empty() {
        for banner in dom::select_all(&body, &selectors.issue_banner).nodes() {
            if dom::select_all(&Selection::from(*banner), &selectors.issue).is_empty() {
                banner.remove_from_parent();
            }
        }
    }

    issues
}
