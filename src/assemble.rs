//! Payload assembly.
//!
//! Combines the lead pipeline output with page metadata, and builds the
//! remaining-sections and references payloads.

use std::collections::BTreeMap;

use crate::dom::LeadTree;
use crate::error::Result;
use crate::extractor::{LeadPipeline, OutputMode, StageContext};
use crate::options::Options;
use crate::page::{PageMetadata, RawPage};
use crate::patterns::THUMB_WIDTH;
use crate::result::{
    AllPayload, LastModifier, LeadBody, LeadImage, LeadPayload, ReferencesPayload, RemainingPayload,
    SectionSummary,
};
use crate::sections::mark_reference_sections;

/// Thumbnail URLs for each configured width.
///
/// The width segment (`/220px-`) of the metadata thumbnail is rewritten; a URL
/// without one is passed through unchanged.
#[must_use]
pub fn lead_image_urls(thumb_url: &str, widths: &[u32]) -> BTreeMap<String, String> {
    widths
        .iter()
        .map(|width| {
            let url = THUMB_WIDTH.replace(thumb_url, format!("/{width}px-").as_str());
            (width.to_string(), url.into_owned())
        })
        .collect()
}

fn lead_image(meta: &PageMetadata, opts: &Options) -> Option<LeadImage> {
    let image = LeadImage {
        file: meta.image.as_ref().map(|image| image.file.clone()),
        urls: meta
            .thumb
            .as_ref()
            .map(|thumb| lead_image_urls(&thumb.url, &opts.lead_image_widths))
            .unwrap_or_default(),
    };
    (!image.is_empty()).then_some(image)
}

/// Build the lead payload.
///
/// Returns `Ok(None)` for an empty page (a single section without content),
/// which the boundary reports as "no content" rather than as an error.
pub fn build_lead(
    page: &RawPage,
    meta: &PageMetadata,
    mode: OutputMode,
    opts: &Options,
) -> Result<Option<LeadPayload>> {
    let lead = page.ensure_lead()?;
    let section_count = page.sections.len();

    let tree = LeadTree::parse(&lead.text);
    if page.is_stub() && tree.is_blank() {
        tracing::debug!(title = %meta.normalizedtitle, "empty page, no lead");
        return Ok(None);
    }

    let ctx = StageContext {
        mode,
        display_title: &meta.displaytitle,
        selectors: &opts.selectors,
    };
    let (tree, extracted) = LeadPipeline::planned(mode, meta.mainpage, section_count).run(tree, &ctx);

    let body = match mode {
        OutputMode::Embedded => LeadBody::Embedded {
            text: tree.inner_html(),
            sections: page.sections[1..].iter().map(SectionSummary::from).collect(),
        },
        OutputMode::Decomposed if !page.is_stub() => LeadBody::Decomposed {
            infobox: extracted.infobox,
            intro: extracted.intro,
            text: None,
        },
        OutputMode::Decomposed => LeadBody::Decomposed {
            infobox: None,
            intro: None,
            text: Some(if extracted.left_tree_intact() {
                lead.text.clone()
            } else {
                tree.inner_html()
            }),
        },
    };

    Ok(Some(LeadPayload {
        ns: meta.ns,
        id: meta.id,
        issues: extracted.issues,
        revision: page.revision.clone(),
        lastmodified: page.lastmodified.clone(),
        lastmodifier: LastModifier::from(meta.lastmodifiedby.clone()),
        displaytitle: meta.displaytitle.clone(),
        normalizedtitle: meta.normalizedtitle.clone(),
        redirected: meta.redirected.clone(),
        wikibase_item: meta.wikibase_item().map(ToString::to_string),
        description: meta.description.clone(),
        protection: meta.protection.clone(),
        editable: meta.editable,
        mainpage: meta.mainpage,
        languagecount: meta.languagecount,
        image: lead_image(meta, opts),
        pronunciation: extracted.pronunciation,
        spoken: page.spoken.clone(),
        hatnotes: extracted.hatnotes,
        geo: page.geo,
        extract: None,
        body,
    }))
}

/// Every section after the lead, with reference sections tagged.
pub fn build_remaining(page: &RawPage, opts: &Options) -> Result<RemainingPayload> {
    page.ensure_lead()?;
    let mut sections = page.sections[1..].to_vec();
    if !sections.is_empty() {
        mark_reference_sections(&mut sections, opts);
    }
    Ok(RemainingPayload { sections })
}

/// Only the tagged reference sections of [`build_remaining`].
pub fn build_references(page: &RawPage, opts: &Options) -> Result<ReferencesPayload> {
    let remaining = build_remaining(page, opts)?;
    Ok(ReferencesPayload {
        sections: remaining
            .sections
            .into_iter()
            .filter(|section| section.is_reference_section)
            .collect(),
    })
}

/// Lead and remaining sections. `Ok(None)` for an empty page.
pub fn build_all(
    page: &RawPage,
    meta: &PageMetadata,
    mode: OutputMode,
    opts: &Options,
) -> Result<Option<AllPayload>> {
    let Some(lead) = build_lead(page, meta, mode, opts)? else {
        return Ok(None);
    };
    Ok(Some(AllPayload {
        lead,
        remaining: build_remaining(page, opts)?,
    }))
}
