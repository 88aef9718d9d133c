//! Input data model: the rendered page and its metadata.
//!
//! Both records are built once per request from upstream responses, mutated
//! by the extraction pipeline and dropped when the response is assembled.
//! Field names follow the upstream JSON so the types deserialize directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Rendered page split into sections. Section 0 is the lead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPage {
    /// Sections in document order, lead first.
    pub sections: Vec<RawSection>,

    /// Revision the content was rendered from.
    pub revision: String,

    /// Timestamp of that revision (ISO 8601).
    pub lastmodified: String,

    /// Spoken-article recordings, when the page has any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spoken: Option<Spoken>,

    /// Primary coordinates, when the page has any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}

impl RawPage {
    /// Fails with [`Error::NoSections`] when there is no lead section.
    pub fn ensure_lead(&self) -> Result<&RawSection> {
        self.sections.first().ok_or(Error::NoSections)
    }

    /// A page with one section is a stub or disambiguation page.
    #[must_use]
    pub fn is_stub(&self) -> bool {
        self.sections.len() <= 1
    }
}

/// One section of the rendered page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSection {
    /// Section index; 0 is the lead.
    pub id: u32,

    /// Heading depth; absent on the lead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toclevel: Option<u32>,

    /// Fragment identifier of the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,

    /// Heading as HTML; absent on the lead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,

    /// Section body HTML.
    #[serde(default)]
    pub text: String,

    /// Set by reference tagging only; omitted from output unless true.
    #[serde(
        rename = "isReferenceSection",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub is_reference_section: bool,
}

/// Audio recordings of the article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spoken {
    /// Audio file names, one per recorded part.
    #[serde(default)]
    pub files: Vec<String>,
}

/// Primary coordinates of the page subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
}

/// Page metadata from the metadata API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageMetadata {
    /// Namespace number; 0 for articles.
    #[serde(default)]
    pub ns: i32,

    /// Page id.
    #[serde(default)]
    pub id: u64,

    /// Title as displayed, may contain markup.
    #[serde(default)]
    pub displaytitle: String,

    /// Canonical title with spaces.
    #[serde(default)]
    pub normalizedtitle: String,

    /// Protection rules keyed by action (`edit`, `move`).
    #[serde(default, deserialize_with = "protection_rules")]
    pub protection: BTreeMap<String, Vec<String>>,

    /// Whether the current user may edit the page.
    #[serde(default)]
    pub editable: bool,

    /// Number of other language editions.
    #[serde(default)]
    pub languagecount: u32,

    /// Short description.
    #[serde(default)]
    pub description: Option<String>,

    /// Page properties; only the Wikidata item is read.
    #[serde(default)]
    pub pageprops: Option<PageProps>,

    /// Lead image file.
    #[serde(default)]
    pub image: Option<ImageInfo>,

    /// Lead image thumbnail.
    #[serde(default)]
    pub thumb: Option<ThumbInfo>,

    /// Whether this is the wiki's main page.
    #[serde(default)]
    pub mainpage: bool,

    /// Title of the redirect that led here.
    #[serde(default)]
    pub redirected: Option<String>,

    /// Last editor; absent for anonymous edits.
    #[serde(default)]
    pub lastmodifiedby: Option<Editor>,
}

impl PageMetadata {
    #[must_use]
    pub fn wikibase_item(&self) -> Option<&str> {
        self.pageprops
            .as_ref()
            .and_then(|props| props.wikibase_item.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageProps {
    /// Wikidata item id, e.g. `Q42`.
    #[serde(default)]
    pub wikibase_item: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageInfo {
    /// File name without namespace.
    pub file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThumbInfo {
    /// Thumbnail URL with a `/<width>px-` segment.
    pub url: String,
}

/// Last editor of the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Editor {
    /// User name.
    pub name: String,
    /// Gender preference, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Upstream encodes "no protection" as an empty list rather than an empty object.
fn protection_rules<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rules {
        Map(BTreeMap<String, Vec<String>>),
        List(Vec<serde_json::Value>),
    }

    Ok(match Rules::deserialize(deserializer)? {
        Rules::Map(map) => map,
        Rules::List(_) => BTreeMap::new(),
    })
}
