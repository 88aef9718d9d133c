//! Compiled regex patterns and CSS selectors for page decomposition.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Heading patterns are per wiki language; anything without an entry falls
//! back to English.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Reference Section Headings
// =============================================================================

/// English reference/notes/citations headings.
pub static REFERENCE_HEADINGS_EN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(references?|notes?|citations?|footnotes?|sources|bibliography|works cited|notes and references|references and notes|explanatory notes|general references|further reading)$",
    )
    .expect("REFERENCE_HEADINGS_EN regex")
});

pub static REFERENCE_HEADINGS_DE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(einzelnachweise|anmerkungen|quellen|literatur|fußnoten|belege|anmerkungen und einzelnachweise)$")
        .expect("REFERENCE_HEADINGS_DE regex")
});

pub static REFERENCE_HEADINGS_FR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(notes et références|références|notes|sources|bibliographie)$")
        .expect("REFERENCE_HEADINGS_FR regex")
});

pub static REFERENCE_HEADINGS_ES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(referencias|notas|bibliografía|fuentes|notas y referencias)$")
        .expect("REFERENCE_HEADINGS_ES regex")
});

pub static REFERENCE_HEADINGS_IT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(note|bibliografia|fonti|riferimenti)$").expect("REFERENCE_HEADINGS_IT regex")
});

pub static REFERENCE_HEADINGS_PT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(referências|notas|bibliografia|fontes|notas e referências)$")
        .expect("REFERENCE_HEADINGS_PT regex")
});

pub static REFERENCE_HEADINGS_NL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(referenties|bronnen|noten|voetnoten|bronnen, noten en/of referenties)$")
        .expect("REFERENCE_HEADINGS_NL regex")
});

/// Returns the built-in reference heading pattern for a wiki language.
#[must_use]
pub fn reference_headings_for(language: &str) -> &'static Regex {
    match language.to_ascii_lowercase().as_str() {
        "de" => &REFERENCE_HEADINGS_DE,
        "fr" => &REFERENCE_HEADINGS_FR,
        "es" => &REFERENCE_HEADINGS_ES,
        "it" => &REFERENCE_HEADINGS_IT,
        "pt" => &REFERENCE_HEADINGS_PT,
        "nl" => &REFERENCE_HEADINGS_NL,
        _ => &REFERENCE_HEADINGS_EN,
    }
}

// =============================================================================
// URL Patterns
// =============================================================================

/// Matches the width segment of a thumbnail URL, e.g. `/220px-`.
pub static THUMB_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\d+px-").expect("THUMB_WIDTH regex"));

/// Matches markup tags, used to turn a section `line` into plain text.
pub static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("MARKUP_TAG regex"));

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Strips markup from a heading and collapses whitespace.
#[must_use]
pub fn plain_heading(line: &str) -> String {
    let stripped = MARKUP_TAG.replace_all(line, "");
    WHITESPACE_NORMALIZE
        .replace_all(stripped.trim(), " ")
        .into_owned()
}

// =============================================================================
// CSS Selectors
// =============================================================================

/// Disambiguation and redirect notices.
pub const HATNOTE_SELECTOR: &str = ".hatnote, div[role='note']";

/// Canonical infobox panel.
pub const INFOBOX_SELECTOR: &str = ".infobox";

/// One maintenance issue inside a banner.
pub const ISSUE_SELECTOR: &str = ".ambox .mbox-text-span";

/// Maintenance banner container.
pub const ISSUE_BANNER_SELECTOR: &str = ".ambox";

/// Geo coordinates span, display:none on mobile.
pub const COORDINATES_SELECTOR: &str = "#coordinates, .geo-default, .geo-dms";

/// Markup that identifies a rendered reference list.
pub const REFERENCE_LIST_SELECTOR: &str =
    "ol.references, .reflist, .refbegin, .mw-references-wrap";

/// Pronunciation containers next to the display title.
pub const PRONUNCIATION_CONTAINER_SELECTOR: &str = ".IPA, .haudio, .unicode.haudio, .audiolink";

/// Elements removed from every lead before extraction.
pub const ALWAYS_STRIPPED: &[&str] = &[
    "script",
    "style",
    "link",
    "meta",
    ".noprint",
    ".navbox",
    ".vertical-navbox",
    ".mw-editsection",
    ".nomobile",
    ".geo-nondefault",
    ".geo-multi-punct",
    "span.Z3988",
];

/// Audio file suffixes recognised as pronunciation links.
pub const AUDIO_SUFFIXES: &[&str] = &[".ogg", ".oga", ".mp3", ".wav"];
