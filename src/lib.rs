//! # mobile-sections
//!
//! Decomposes a rendered wiki article into mobile-friendly sections.
//!
//! The lead section is cleaned up and mined for hatnotes, page issues, the
//! pronunciation audio link, and (in decomposed mode) the infobox and the
//! introduction. The remaining sections are passed through with reference
//! sections tagged.
//!
//! ## Quick Start
//!
//! ```rust
//! use mobile_sections::{build_all, OutputMode, Options, PageMetadata, RawPage};
//!
//! let page: RawPage = serde_json::from_str(r#"{
//!     "revision": "1", "lastmodified": "2016-06-01T00:00:00Z",
//!     "sections": [
//!         {"id": 0, "text": "<div class=\"hatnote\">Not Bar.</div><p>Foo is a bar.</p>"},
//!         {"id": 1, "toclevel": 1, "line": "References", "text": ""}
//!     ]
//! }"#)?;
//! let meta = PageMetadata {
//!     displaytitle: "Foo".to_string(),
//!     ..PageMetadata::default()
//! };
//!
//! let all = build_all(&page, &meta, OutputMode::Decomposed, &Options::default())?
//!     .expect("page has content");
//! assert_eq!(all.lead.hatnotes, vec!["Not Bar.".to_string()]);
//! assert_eq!(all.lead.intro(), Some("<p>Foo is a bar.</p>"));
//! assert!(all.remaining.sections[0].is_reference_section);
//! # Ok::<(), mobile_sections::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Two output modes**: lead HTML kept as one blob, or split into fields
//! - **Reference tagging**: localized headings plus reference-list markup
//! - **Main pages**: served from the legacy renderer with their own cleanup
//! - **Configurable**: per-language defaults, overridable selectors

mod error;
mod options;
mod page;
mod patterns;
mod result;

/// Lead tree ownership and selector-driven capture primitives.
pub mod dom;

/// Lead extractors and the staged pipeline that runs them.
pub mod extractor;

/// Reference section tagging.
pub mod sections;

/// Payload assembly from the page, its metadata and the pipeline output.
pub mod assemble;

/// Upstream collaborator traits and concurrent fetching.
pub mod fetch;

/// Variant entry points.
pub mod service;

// Public API - re-exports
pub use assemble::{build_all, build_lead, build_references, build_remaining, lead_image_urls};
pub use error::{Error, Result};
pub use extractor::OutputMode;
pub use fetch::{ContentRenderer, FetchedPage, MetadataApi, PageFetcher, PageRequest};
pub use options::{Options, Selectors};
pub use page::{Editor, Geo, ImageInfo, PageMetadata, PageProps, RawPage, RawSection, Spoken, ThumbInfo};
pub use result::{
    AllPayload, LastModifier, LeadBody, LeadImage, LeadPayload, PageIssue, Pronunciation,
    ReferencesPayload, RemainingPayload, SectionSummary,
};
pub use service::{MobileSections, Payload, Variant};
