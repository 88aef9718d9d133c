//! Reference section tagging.
//!
//! Sections holding citations, notes or a bibliography are flagged with
//! `isReferenceSection` so clients can render them differently. A reference
//! heading also claims every following section nested below it, because
//! reference material is often split over several appendix subsections.

use crate::dom::LeadTree;
use crate::options::Options;
use crate::page::RawSection;
use crate::patterns::{self, REFERENCE_LIST_SELECTOR};

/// Level used for sections the renderer did not give a `toclevel`.
const DEFAULT_TOC_LEVEL: u32 = 1;

fn has_reference_heading(section: &RawSection, opts: &Options) -> bool {
    section
        .line
        .as_deref()
        .map(patterns::plain_heading)
        .is_some_and(|heading| opts.reference_headings().is_match(&heading))
}

fn has_reference_markup(section: &RawSection) -> bool {
    if section.text.trim().is_empty() {
        return false;
    }
    LeadTree::parse(&section.text).count(REFERENCE_LIST_SELECTOR) > 0
}

/// How a section was recognised as reference material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReferenceMatch {
    /// Heading matched; the section opens a block that claims nested sections.
    Heading,
    /// Only the body markup matched; the section is tagged on its own.
    Markup,
}

fn reference_match(section: &RawSection, opts: &Options) -> Option<ReferenceMatch> {
    if has_reference_heading(section, opts) {
        Some(ReferenceMatch::Heading)
    } else if opts.detect_reference_markup && has_reference_markup(section) {
        Some(ReferenceMatch::Markup)
    } else {
        None
    }
}

/// Whether a section is reference material in its own right.
#[must_use]
pub fn is_reference_section(section: &RawSection, opts: &Options) -> bool {
    reference_match(section, opts).is_some()
}

/// Flag reference sections and the sections nested under a reference heading.
///
/// Returns the number of tagged sections. An empty slice is left alone.
pub fn mark_reference_sections(sections: &mut [RawSection], opts: &Options) -> usize {
    let mut open_level: Option<u32> = None;
    let mut tagged = 0;

    for section in sections.iter_mut() {
        let level = section.toclevel.unwrap_or(DEFAULT_TOC_LEVEL);

        if let Some(reference_level) = open_level {
            if level > reference_level {
                section.is_reference_section = true;
                tagged += 1;
                continue;
            }
            open_level = None;
        }

        match reference_match(section, opts) {
            Some(ReferenceMatch::Heading) => {
                section.is_reference_section = true;
                open_level = Some(level);
                tagged += 1;
            }
            Some(ReferenceMatch::Markup) => {
                section.is_reference_section = true;
                tagged += 1;
            }
            None => {}
        }
    }

    tracing::debug!(sections = sections.len(), tagged, "reference sections marked");
    tagged
}
