//! Result types for assembled payloads.
//!
//! This module defines the structured output handed to the boundary layer:
//! the lead in its embedded or decomposed shape, the remaining sections, the
//! reference subset, and the combined payload.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::page::{Editor, Geo, RawSection, Spoken};

/// Audio pronunciation cue found next to the display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pronunciation {
    /// Link target as found in the page, protocol-relative URLs included.
    pub url: String,

    /// File name taken from the last path segment.
    #[serde(rename = "fileName")]
    pub file_name: String,
}

/// One maintenance issue from a cleanup or dispute banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageIssue {
    /// Inner HTML of the issue text.
    pub text: String,
}

/// Lead image file and its thumbnail URLs keyed by width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadImage {
    /// File name without namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Thumbnail URL per configured width, keyed by the width as a string.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub urls: BTreeMap<String, String>,
}

impl LeadImage {
    /// True when neither a file nor any URL is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.urls.is_empty()
    }
}

/// Last editor, or `anon` when the metadata does not name one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LastModifier {
    Named(Editor),
    Anonymous { anon: bool },
}

impl From<Option<Editor>> for LastModifier {
    fn from(editor: Option<Editor>) -> Self {
        editor.map_or(Self::Anonymous { anon: true }, Self::Named)
    }
}

/// Navigation entry for a non-lead section in the embedded lead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSummary {
    /// Section index.
    pub id: u32,
    /// Heading depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toclevel: Option<u32>,
    /// Fragment identifier of the heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    /// Heading as HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
}

impl From<&RawSection> for SectionSummary {
    fn from(section: &RawSection) -> Self {
        Self {
            id: section.id,
            toclevel: section.toclevel,
            anchor: section.anchor.clone(),
            line: section.line.clone(),
        }
    }
}

/// Lead body, shaped by the output mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LeadBody {
    /// Lead HTML kept as one blob, plus navigation for the other sections.
    Embedded {
        text: String,
        sections: Vec<SectionSummary>,
    },

    /// Structured fields instead of the blob. `text` is only set for
    /// single-section pages, which are never decomposed.
    Decomposed {
        #[serde(skip_serializing_if = "Option::is_none")]
        infobox: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        intro: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
}

/// Assembled lead section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadPayload {
    /// Namespace number.
    pub ns: i32,

    /// Page id.
    pub id: u64,

    /// Maintenance notices found in the lead.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<PageIssue>,

    /// Revision the content was rendered from.
    pub revision: String,

    /// Timestamp of that revision.
    pub lastmodified: String,

    /// Last editor, or the anonymous marker.
    pub lastmodifier: LastModifier,

    /// Title as displayed.
    pub displaytitle: String,

    /// Canonical title.
    pub normalizedtitle: String,

    /// Redirect source title, when the request was redirected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirected: Option<String>,

    /// Wikidata item id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wikibase_item: Option<String>,

    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Protection rules keyed by action; empty when unprotected.
    pub protection: BTreeMap<String, Vec<String>>,

    /// Whether the page may be edited.
    pub editable: bool,

    /// Set only for the main page.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub mainpage: bool,

    /// Number of other language editions.
    pub languagecount: u32,

    /// Lead image, omitted when the metadata names none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<LeadImage>,

    /// Title pronunciation audio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<Pronunciation>,

    /// Spoken-article recordings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spoken: Option<Spoken>,

    /// Inner HTML of each hatnote, in document order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hatnotes: Vec<String>,

    /// Primary coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,

    /// Plain-text summary, fetched for the lead-only variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract: Option<String>,
    /// Mode-dependent body fields, flattened into the payload.
    #[serde(flatten)]
    pub body: LeadBody,
}

impl LeadPayload {
    /// Infobox HTML, decomposed mode only.
    #[must_use]
    pub fn infobox(&self) -> Option<&str> {
        match &self.body {
            LeadBody::Decomposed { infobox, .. } => infobox.as_deref(),
            LeadBody::Embedded { .. } => None,
        }
    }

    /// Introduction HTML, decomposed mode only.
    #[must_use]
    pub fn intro(&self) -> Option<&str> {
        match &self.body {
            LeadBody::Decomposed { intro, .. } => intro.as_deref(),
            LeadBody::Embedded { .. } => None,
        }
    }

    /// Lead HTML blob, if this shape carries one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            LeadBody::Embedded { text, .. } => Some(text),
            LeadBody::Decomposed { text, .. } => text.as_deref(),
        }
    }
}

/// Sections after the lead.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RemainingPayload {
    /// Every section after the lead, in order.
    pub sections: Vec<RawSection>,
}

/// Reference sections only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReferencesPayload {
    /// Tagged sections only, in order.
    pub sections: Vec<RawSection>,
}

/// Lead and remaining sections together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllPayload {
    pub lead: LeadPayload,
    pub remaining: RemainingPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_editor_is_anonymous() {
        let modifier = LastModifier::from(None);
        assert_eq!(
            serde_json::to_value(&modifier).expect("json"),
            serde_json::json!({ "anon": true })
        );
    }

    #[test]
    fn test_decomposed_body_omits_absent_fields() {
        let body = LeadBody::Decomposed {
            infobox: None,
            intro: Some("<p>Intro</p>".to_string()),
            text: None,
        };
        assert_eq!(
            serde_json::to_value(&body).expect("json"),
            serde_json::json!({ "intro": "<p>Intro</p>" })
        );
    }

    #[test]
    fn test_pronunciation_uses_camel_case_file_name() {
        let pronunciation = Pronunciation {
            url: "//upload.wikimedia.org/a/En-Foo.ogg".to_string(),
            file_name: "En-Foo.ogg".to_string(),
        };
        let json = serde_json::to_value(&pronunciation).expect("json");
        assert_eq!(json["fileName"], "En-Foo.ogg");
    }
}
