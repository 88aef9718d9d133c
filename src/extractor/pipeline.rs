//! Lead extraction pipeline.
//!
//! The lead tree is moved through a fixed sequence of named stages. Each stage
//! takes the tree by value, mutates it, and hands the same tree to the next
//! stage, so there is never more than one owner of the parse tree.
//!
//! Stage order:
//!
//! 1. `StripUnwanted` - always
//! 2. `RelocateFirstParagraph` - embedded mode, non-main pages
//! 3. `Hatnotes` - always
//! 4. `Pronunciation` - always, read-only
//! 5. `PageIssues` - always
//! 6. `Infobox` - decomposed mode, more than one section
//! 7. `Intro` - decomposed mode, more than one section
//!
//! Hatnotes and issues are pulled before the infobox and intro so their text
//! never shows up in the introduction.

use crate::dom::{ExtractMode, LeadTree};
use crate::options::Selectors;
use crate::result::{PageIssue, Pronunciation};

use super::{hatnotes, infobox, intro, issues, paragraph, pronunciation, strip};

/// Output shape selected at pipeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Lead kept as one HTML blob; hatnotes and issues are copied, not removed.
    Embedded,
    /// Lead split into structured fields.
    Decomposed,
}

impl OutputMode {
    /// Sub-mode used by the hatnote and issue extractors.
    #[must_use]
    pub fn extract_mode(self) -> ExtractMode {
        match self {
            Self::Embedded => ExtractMode::ReadOnly,
            Self::Decomposed => ExtractMode::Detach,
        }
    }
}

/// A named step of the lead pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    StripUnwanted,
    RelocateFirstParagraph,
    Hatnotes,
    Pronunciation,
    PageIssues,
    Infobox,
    Intro,
}

impl Stage {
    /// Stages to run for a page, in order.
    #[must_use]
    pub fn plan(mode: OutputMode, mainpage: bool, section_count: usize) -> Vec<Self> {
        let mut stages = vec![Self::StripUnwanted];
        if mode == OutputMode::Embedded && !mainpage {
            stages.push(Self::RelocateFirstParagraph);
        }
        stages.extend([Self::Hatnotes, Self::Pronunciation, Self::PageIssues]);
        if mode == OutputMode::Decomposed && section_count > 1 {
            stages.extend([Self::Infobox, Self::Intro]);
        }
        stages
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::StripUnwanted => "strip_unwanted",
            Self::RelocateFirstParagraph => "relocate_first_paragraph",
            Self::Hatnotes => "hatnotes",
            Self::Pronunciation => "pronunciation",
            Self::PageIssues => "page_issues",
            Self::Infobox => "infobox",
            Self::Intro => "intro",
        }
    }

    /// Run this stage on `tree`, recording what it extracted in `out`.
    pub fn apply(self, tree: LeadTree, ctx: &StageContext, out: &mut LeadExtraction) -> LeadTree {
        let selectors = ctx.selectors;
        match self {
            Self::StripUnwanted => {
                out.stripped = strip::strip_unwanted(&tree, selectors);
                tracing::debug!(stage = self.name(), removed = out.stripped, "stage done");
            }
            Self::RelocateFirstParagraph => {
                let moved = paragraph::relocate_first_paragraph(&tree, selectors);
                tracing::debug!(stage = self.name(), moved, "stage done");
            }
            Self::Hatnotes => {
                out.hatnotes = hatnotes::extract_hatnotes(&tree, selectors, ctx.mode.extract_mode());
                tracing::debug!(stage = self.name(), found = out.hatnotes.len(), "stage done");
            }
            Self::Pronunciation => {
                out.pronunciation =
                    pronunciation::parse_pronunciation(&tree, ctx.display_title, selectors);
                tracing::debug!(stage = self.name(), found = out.pronunciation.is_some(), "stage done");
            }
            Self::PageIssues => {
                out.issues = issues::extract_page_issues(&tree, selectors, ctx.mode.extract_mode());
                tracing::debug!(stage = self.name(), found = out.issues.len(), "stage done");
            }
            Self::Infobox => {
                out.infobox = infobox::extract_infobox(&tree, selectors);
                tracing::debug!(stage = self.name(), found = out.infobox.is_some(), "stage done");
            }
            Self::Intro => {
                out.intro = intro::extract_intro(&tree, selectors);
                tracing::debug!(stage = self.name(), found = out.intro.is_some(), "stage done");
            }
        }
        tree
    }
}

/// Per-request inputs shared by all stages.
#[derive(Debug, Clone, Copy)]
pub struct StageContext<'a> {
    /// Decides between capturing read-only and detaching.
    pub mode: OutputMode,
    /// Title used to find the pronunciation link.
    pub display_title: &'a str,
    /// Selectors for every stage.
    pub selectors: &'a Selectors,
}

/// Everything the stages pulled out of the lead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadExtraction {
    /// Subtrees removed by the strip stage.
    pub stripped: usize,
    /// Hatnote inner HTML.
    pub hatnotes: Vec<String>,
    pub pronunciation: Option<Pronunciation>,
    /// Issue spans; in decomposed mode they are gone from the tree.
    pub issues: Vec<PageIssue>,
    /// Decomposed mode only.
    pub infobox: Option<String>,
    /// Decomposed mode only.
    pub intro: Option<String>,
}

/// An ordered list of stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadPipeline {
    stages: Vec<Stage>,
}

impl LeadExtraction {
    /// True when strip, hatnote and issue stages all came up empty, so even a
    /// detaching run left the tree as parsed.
    #[must_use]
    pub fn left_tree_intact(&self) -> bool {
        self.stripped == 0 && self.hatnotes.is_empty() && self.issues.is_empty()
    }
}

impl LeadPipeline {
    #[must_use]
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Pipeline for a page, see [`Stage::plan`].
    #[must_use]
    pub fn planned(mode: OutputMode, mainpage: bool, section_count: usize) -> Self {
        Self::new(Stage::plan(mode, mainpage, section_count))
    }

    /// Run all stages and return the final tree with the extracted parts.
    #[must_use]
    pub fn run(&self, tree: LeadTree, ctx: &StageContext) -> (LeadTree, LeadExtraction) {
        let mut out = LeadExtraction::default();
        let tree = self
            .stages
            .iter()
            .fold(tree, |tree, stage| stage.apply(tree, ctx, &mut out));
        (tree, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAD: &str = concat!(
        r#"<div class="hatnote">For other uses, see <a href="./Foo_(disambiguation)">Foo (disambiguation)</a>.</div>"#,
        r#"<table class="ambox"><tbody><tr><td><span class="mbox-text-span">Needs sources.</span></td></tr></tbody></table>"#,
        r#"<table class="infobox"><tbody><tr><td>Box</td></tr></tbody></table>"#,
        r#"<p>Foo is a bar.</p>"#,
    );

    fn ctx(mode: OutputMode, selectors: &Selectors) -> StageContext<'_> {
        StageContext {
            mode,
            display_title: "Foo",
            selectors,
        }
    }

    #[test]
    fn test_plan_embedded() {
        assert_eq!(
            Stage::plan(OutputMode::Embedded, false, 3),
            vec![
                Stage::StripUnwanted,
                Stage::RelocateFirstParagraph,
                Stage::Hatnotes,
                Stage::Pronunciation,
                Stage::PageIssues,
            ]
        );
    }

    #[test]
    fn test_plan_embedded_main_page_skips_relocation() {
        assert!(!Stage::plan(OutputMode::Embedded, true, 3).contains(&Stage::RelocateFirstParagraph));
    }

    #[test]
    fn test_plan_decomposed() {
        let stages = Stage::plan(OutputMode::Decomposed, false, 2);
        assert_eq!(stages.last(), Some(&Stage::Intro));
        let hatnotes = stages.iter().position(|s| *s == Stage::Hatnotes);
        let issues = stages.iter().position(|s| *s == Stage::PageIssues);
        let infobox = stages.iter().position(|s| *s == Stage::Infobox);
        assert!(hatnotes < infobox && issues < infobox);
    }

    #[test]
    fn test_plan_decomposed_stub_is_not_split() {
        let stages = Stage::plan(OutputMode::Decomposed, false, 1);
        assert!(!stages.contains(&Stage::Infobox));
        assert!(!stages.contains(&Stage::Intro));
    }

    #[test]
    fn test_decomposed_run_pulls_everything_out() {
        let selectors = Selectors::default();
        let pipeline = LeadPipeline::planned(OutputMode::Decomposed, false, 2);

        let (tree, out) = pipeline.run(LeadTree::parse(LEAD), &ctx(OutputMode::Decomposed, &selectors));

        assert_eq!(out.hatnotes.len(), 1);
        assert_eq!(out.issues.len(), 1);
        assert_eq!(out.infobox.as_deref(), Some("<tbody><tr><td>Box</td></tr></tbody>"));
        assert_eq!(out.intro.as_deref(), Some("<p>Foo is a bar.</p>"));
        assert!(!out.left_tree_intact());
        assert!(tree.is_blank());
    }

    #[test]
    fn test_embedded_run_keeps_hatnotes_and_issues() {
        let selectors = Selectors::default();
        let pipeline = LeadPipeline::planned(OutputMode::Embedded, false, 2);

        let (tree, out) = pipeline.run(LeadTree::parse(LEAD), &ctx(OutputMode::Embedded, &selectors));

        assert_eq!(out.hatnotes.len(), 1);
        assert_eq!(out.issues.len(), 1);
        assert!(out.infobox.is_none());
        let html = tree.inner_html();
        assert!(html.starts_with("<p>Foo is a bar.</p>"));
        assert_eq!(tree.count(".hatnote"), 1);
        assert_eq!(tree.count(".mbox-text-span"), 1);
    }

    #[test]
    fn test_custom_stage_list() {
        let selectors = Selectors::default();
        let pipeline = LeadPipeline::new(vec![Stage::Infobox]);
        let (tree, out) = pipeline.run(LeadTree::parse(LEAD), &ctx(OutputMode::Decomposed, &selectors));
        assert!(out.infobox.is_some());
        assert!(out.hatnotes.is_empty());
        assert_eq!(tree.count(".hatnote"), 1);
    }
}
