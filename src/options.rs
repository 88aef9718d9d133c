//! Configuration options for page decomposition.
//!
//! The `Options` struct controls which selectors the extractors use and how
//! reference sections are recognised. Defaults match the English Wikipedia
//! rendering conventions; `Options::for_language` swaps in the heading
//! pattern of another wiki.

use regex::Regex;

use crate::patterns;

/// CSS selectors used by the lead extractors.
///
/// Every field is a selector string understood by `dom_query`.
#[derive(Debug, Clone)]
pub struct Selectors {
    /// Disambiguation/redirect notices.
    ///
    /// Default: `.hatnote, div[role='note']`
    pub hatnote: String,

    /// Infobox panel. Only the first match is extracted.
    ///
    /// Default: `.infobox`
    pub infobox: String,

    /// One maintenance issue inside a banner.
    ///
    /// Default: `.ambox .mbox-text-span`
    pub issue: String,

    /// Banner container removed once it holds no more issues.
    ///
    /// Default: `.ambox`
    pub issue_banner: String,

    /// Coordinates markup; paragraphs holding it are never the lead paragraph.
    pub coordinates: String,

    /// Containers of the audio/respelling cue next to the display title.
    pub pronunciation: String,

    /// Elements removed from every lead before extraction.
    pub always_stripped: Vec<String>,

    /// File suffixes treated as pronunciation audio.
    pub audio_suffixes: Vec<String>,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            hatnote: patterns::HATNOTE_SELECTOR.to_string(),
            infobox: patterns::INFOBOX_SELECTOR.to_string(),
            issue: patterns::ISSUE_SELECTOR.to_string(),
            issue_banner: patterns::ISSUE_BANNER_SELECTOR.to_string(),
            coordinates: patterns::COORDINATES_SELECTOR.to_string(),
            pronunciation: patterns::PRONUNCIATION_CONTAINER_SELECTOR.to_string(),
            always_stripped: patterns::ALWAYS_STRIPPED
                .iter()
                .map(ToString::to_string)
                .collect(),
            audio_suffixes: patterns::AUDIO_SUFFIXES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Configuration options for page decomposition.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for English wikis.
///
/// # Example
///
/// ```rust
/// use mobile_sections::Options;
///
/// let options = Options {
///     detect_reference_markup: true,
///     ..Options::for_language("de")
/// };
/// assert!(options.reference_headings().is_match("Einzelnachweise"));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Wiki language code, selects the built-in reference heading pattern.
    ///
    /// Default: `"en"`
    pub language: String,

    /// Overrides the built-in reference heading pattern.
    ///
    /// Matched against the section heading with markup stripped.
    ///
    /// Default: `None`
    pub reference_headings: Option<Regex>,

    /// Also tag sections whose body contains a rendered reference list.
    ///
    /// Such a section is tagged on its own; its subsections are not.
    ///
    /// Default: `false`
    pub detect_reference_markup: bool,

    /// Selectors used by the lead extractors.
    pub selectors: Selectors,

    /// Widths generated for the lead image thumbnail URLs.
    ///
    /// Default: `[320, 640, 800, 1024]`
    pub lead_image_widths: Vec<u32>,
}

impl Options {
    /// Default options for a wiki in the given language.
    #[must_use]
    pub fn for_language(language: &str) -> Self {
        Self {
            language: language.to_string(),
            ..Self::default()
        }
    }

    /// Effective reference heading pattern.
    #[must_use]
    pub fn reference_headings(&self) -> &Regex {
        self.reference_headings
            .as_ref()
            .unwrap_or_else(|| patterns::reference_headings_for(&self.language))
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            reference_headings: None,
            detect_reference_markup: false,
            selectors: Selectors::default(),
            lead_image_widths: vec![320, 640, 800, 1024],
        }
    }
}
