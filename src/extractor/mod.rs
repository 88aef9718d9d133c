//! Lead section extractors.
//!
//! # Module Structure
//!
//! - `strip`: removal of always-stripped markup, main-page transform
//! - `paragraph`: first-paragraph relocation (embedded mode)
//! - `hatnotes`: disambiguation/redirect notices
//! - `pronunciation`: audio cue next to the display title
//! - `issues`: maintenance banners
//! - `infobox`: infobox panel (decomposed mode)
//! - `intro`: introduction prose (decomposed mode)
//! - `pipeline`: ordered stages tying the extractors together
//!
//! # Usage
//!
//! ```rust
//! use mobile_sections::dom::LeadTree;
//! use mobile_sections::extractor::{LeadPipeline, OutputMode, StageContext};
//! use mobile_sections::Options;
//!
//! let options = Options::default();
//! let tree = LeadTree::parse(r#"<div class="hatnote">See also Bar.</div><p>Foo is a bar.</p>"#);
//! let ctx = StageContext {
//!     mode: OutputMode::Decomposed,
//!     display_title: "Foo",
//!     selectors: &options.selectors,
//! };
//!
//! let (_tree, extracted) = LeadPipeline::planned(OutputMode::Decomposed, false, 2).run(tree, &ctx);
//! assert_eq!(extracted.hatnotes, vec!["See also Bar.".to_string()]);
//! assert_eq!(extracted.intro.as_deref(), Some("<p>Foo is a bar.</p>"));
//! ```

pub mod hatnotes;
pub mod infobox;
pub mod intro;
pub mod issues;
pub mod paragraph;
pub mod pipeline;
pub mod pronunciation;
pub mod strip;

pub use hatnotes::extract_hatnotes;
pub use infobox::extract_infobox;
pub use intro::extract_intro;
pub use issues::extract_page_issues;
pub use paragraph::relocate_first_paragraph;
pub use pipeline::{LeadExtraction, LeadPipeline, OutputMode, Stage, StageContext};
pub use pronunciation::parse_pronunciation;
pub use strip::{main_page_transform, strip_unwanted};
