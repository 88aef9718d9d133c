//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::task::Poll;

use async_trait::async_trait;
use mobile_sections::{
    ContentRenderer, Error, MetadataApi, PageMetadata, PageRequest, RawPage, RawSection, Result,
};

pub const HATNOTE: &str = r#"<div class="hatnote">For the fruit, see <a href="./Apple_(fruit)">Apple (fruit)</a>.</div>"#;
pub const ISSUE: &str = r#"<table class="ambox ambox-content"><tbody><tr><td class="mbox-text"><span class="mbox-text-span">This article needs additional citations.</span></td></tr></tbody></table>"#;
pub const PARAGRAPH: &str = r#"<p><b>Foo</b> is a bar in the baz.</p>"#;
pub const INFOBOX: &str = r#"<table class="infobox"><tbody><tr><th>Born</th><td>1900</td></tr></tbody></table>"#;

/// Lead with a hatnote, an issue banner, a paragraph and then the infobox.
pub fn lead_html() -> String {
    [HATNOTE, ISSUE, PARAGRAPH, INFOBOX].concat()
}

pub fn section(id: u32, line: Option<&str>, toclevel: Option<u32>, text: &str) -> RawSection {
    RawSection {
        id,
        toclevel,
        anchor: line.map(|line| line.replace(' ', "_")),
        line: line.map(ToString::to_string),
        text: text.to_string(),
        ..RawSection::default()
    }
}

pub fn page(sections: Vec<RawSection>) -> RawPage {
    RawPage {
        sections,
        revision: "1001".to_string(),
        lastmodified: "2016-06-01T12:00:00Z".to_string(),
        ..RawPage::default()
    }
}

/// Lead, "History" and "References".
pub fn three_section_page() -> RawPage {
    page(vec![
        section(0, None, None, &lead_html()),
        section(1, Some("History"), Some(1), "<p>Foo was founded long ago.</p>"),
        section(2, Some("References"), Some(1), r#"<ol class="references"><li>Smith 1999</li></ol>"#),
    ])
}

pub fn stub_page(text: &str) -> RawPage {
    page(vec![section(0, None, None, text)])
}

pub fn meta(title: &str) -> PageMetadata {
    PageMetadata {
        ns: 0,
        id: 42,
        displaytitle: title.to_string(),
        normalizedtitle: title.to_string(),
        editable: true,
        languagecount: 3,
        ..PageMetadata::default()
    }
}

/// In-memory upstream: serves fixed responses and counts calls.
#[derive(Default)]
pub struct FakeUpstream {
    pub page: RawPage,
    pub legacy: Option<RawPage>,
    pub meta: PageMetadata,
    pub extract: String,
    /// Status returned by `metadata` instead of a record.
    pub metadata_failure: Option<u16>,
    /// Status returned by `rendered_page` instead of a page.
    pub content_failure: Option<u16>,
    /// Make `rendered_page` yield until `metadata` has been called.
    pub content_waits_for_metadata: bool,
    /// Set when a waiting `rendered_page` saw the metadata call start.
    pub content_saw_metadata: AtomicBool,
    pub rendered_calls: AtomicUsize,
    pub metadata_calls: AtomicUsize,
    pub legacy_calls: AtomicUsize,
    pub extract_calls: AtomicUsize,
}

impl FakeUpstream {
    pub fn new(page: RawPage, meta: PageMetadata) -> Self {
        Self {
            page,
            meta,
            ..Self::default()
        }
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

/// Return `Pending` once, waking the task immediately.
async fn yield_now() {
    let mut yielded = false;
    futures::future::poll_fn(|cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await;
}

#[async_trait]
impl ContentRenderer for FakeUpstream {
    async fn rendered_page(&self, request: &PageRequest) -> Result<RawPage> {
        self.rendered_calls.fetch_add(1, Ordering::SeqCst);
        if self.content_waits_for_metadata {
            for _ in 0..16 {
                if Self::calls(&self.metadata_calls) > 0 {
                    self.content_saw_metadata.store(true, Ordering::SeqCst);
                    break;
                }
                yield_now().await;
            }
        }
        match self.content_failure {
            Some(status) => Err(Error::upstream(
                status,
                format!("rendering of {} unavailable", request.title),
            )),
            None => Ok(self.page.clone()),
        }
    }
}

#[async_trait]
impl MetadataApi for FakeUpstream {
    async fn metadata(&self, title: &str) -> Result<PageMetadata> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        match self.metadata_failure {
            Some(status) => Err(Error::upstream(status, format!("metadata for {title} unavailable"))),
            None => Ok(self.meta.clone()),
        }
    }

    async fn legacy_rendered_page(&self, title: &str) -> Result<RawPage> {
        self.legacy_calls.fetch_add(1, Ordering::SeqCst);
        self.legacy
            .clone()
            .ok_or_else(|| Error::upstream(404, format!("no legacy rendering for {title}")))
    }

    async fn extract(&self, _title: &str) -> Result<String> {
        self.extract_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.extract.clone())
    }
}
