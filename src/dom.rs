//! DOM Extraction Primitives
//!
//! Generic "find, detach, serialize" operations on top of the `dom_query`
//! crate. Every extractor is written in terms of [`capture_first`] and
//! [`capture_all`], so the read-only and detaching behaviours live in one place.

// Re-export core types for external use
pub use dom_query::{Document, Matcher, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Whether an extractor removes what it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Read the node and remove it from the tree.
    Detach,
    /// Read the node and leave the tree untouched.
    ReadOnly,
}

/// Parsed lead body, owned by exactly one request.
///
/// The tree is moved from stage to stage; nothing else holds a reference to
/// it, so a stage that detaches a node is the only one that ever sees it.
pub struct LeadTree {
    doc: Document,
}

impl LeadTree {
    /// Parse an HTML fragment into a fresh tree.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Document::from(html),
        }
    }

    /// The `<body>` element holding the fragment.
    #[must_use]
    pub fn body(&self) -> Selection<'_> {
        self.doc.select_single("body")
    }

    /// Serialized body content.
    #[must_use]
    pub fn inner_html(&self) -> String {
        self.body().inner_html().to_string()
    }

    /// Number of elements matching `selector`; 0 for invalid selectors.
    #[must_use]
    pub fn count(&self, selector: &str) -> usize {
        select_all(&self.body(), selector).length()
    }

    /// True when the body holds no text and no elements.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        let body = self.body();
        body.text().trim().is_empty() && body.children().is_empty()
    }
}

/// Select all descendants matching `selector`.
///
/// Selectors come from configuration, so an invalid one is logged and treated
/// as matching nothing instead of panicking.
#[must_use]
pub fn select_all<'a>(root: &Selection<'a>, selector: &str) -> Selection<'a> {
    match Matcher::new(selector) {
        Ok(matcher) => root.select_matcher(&matcher),
        Err(_) => {
            tracing::warn!(selector, "ignoring invalid selector");
            Selection::default()
        }
    }
}

/// Matched nodes in document order, without nodes nested in an earlier match.
fn outermost_matches<'a>(root: &Selection<'a>, selector: &str) -> Vec<NodeRef<'a>> {
    let mut kept: Vec<NodeRef<'a>> = Vec::new();
    for node in select_all(root, selector).nodes() {
        let nested = node
            .ancestors_it(None)
            .any(|ancestor| kept.iter().any(|k| k.id == ancestor.id));
        if !nested {
            kept.push(*node);
        }
    }
    kept
}

/// Capture the inner HTML of the first node matching `selector`.
///
/// In [`ExtractMode::Detach`] the node is removed from the tree after it is
/// serialized. Returns `None` when nothing matches.
#[must_use]
pub fn capture_first(root: &Selection, selector: &str, mode: ExtractMode) -> Option<StrTendril> {
    let node = *select_all(root, selector).nodes().first()?;
    let html = node.inner_html();
    if mode == ExtractMode::Detach {
        node.remove_from_parent();
    }
    Some(html)
}

/// Capture the inner HTML of every node matching `selector`, in document
/// order.
///
/// A match nested inside another match is part of the outer capture and is
/// not reported again.
#[must_use]
pub fn capture_all(root: &Selection, selector: &str, mode: ExtractMode) -> Vec<StrTendril> {
    let nodes = outermost_matches(root, selector);
    let captured = nodes.iter().map(NodeRef::inner_html).collect();
    if mode == ExtractMode::Detach {
        for node in &nodes {
            node.remove_from_parent();
        }
    }
    captured
}

/// Remove every node matching `selector`. Returns how many were removed.
pub fn remove_all(root: &Selection, selector: &str) -> usize {
    let nodes = outermost_matches(root, selector);
    for node in &nodes {
        node.remove_from_parent();
    }
    nodes.len()
}

// === Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_string())
}

/// True for `h1`..`h6`.
#[must_use]
pub fn is_heading(node: &NodeRef) -> bool {
    matches!(
        tag_name(node).as_deref(),
        Some("h1" | "h2" | "h3" | "h4" | "h5" | "h6")
    )
}

/// True when the node has no visible text.
#[must_use]
pub fn is_blank(node: &NodeRef) -> bool {
    node.text().trim().is_empty()
}

/// Element children of the body, in order.
#[must_use]
pub fn top_level_elements<'a>(body: &Selection<'a>) -> Vec<NodeRef<'a>> {
    body.nodes()
        .first()
        .map(NodeRef::element_children)
        .unwrap_or_default()
}
