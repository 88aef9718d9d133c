//! Upstream collaborators and the fetch orchestration.
//!
//! Rendered content and metadata come from two independent services, so they
//! are requested concurrently and joined fail-fast. Main pages are the one
//! exception to the primary renderer: once the metadata says `mainpage`, the
//! content is fetched again through the legacy renderer.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::extractor::main_page_transform;
use crate::options::Selectors;
use crate::page::{PageMetadata, RawPage};

/// Identifies the page (and optionally the revision) to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Page title, spaces or underscores.
    pub title: String,
    /// Specific revision; the latest when absent.
    pub revision: Option<String>,
    /// Render transaction id; only meaningful together with `revision`.
    pub tid: Option<String>,
}

impl PageRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }
}

/// Primary renderer producing one HTML fragment per section.
#[async_trait]
pub trait ContentRenderer: Send + Sync {
    async fn rendered_page(&self, request: &PageRequest) -> Result<RawPage>;
}

/// Metadata API, also serving the legacy rendering and the summary extract.
#[async_trait]
pub trait MetadataApi: Send + Sync {
    async fn metadata(&self, title: &str) -> Result<PageMetadata>;

    /// Legacy rendering, used for main pages only.
    async fn legacy_rendered_page(&self, title: &str) -> Result<RawPage>;

    /// Plain-text summary of the page.
    async fn extract(&self, title: &str) -> Result<String>;
}

/// Content, metadata and (for lead requests) the extract of one page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Rendered sections; the legacy rendering for main pages.
    pub page: RawPage,
    /// Page metadata.
    pub meta: PageMetadata,
    /// Only requested for the lead-only variants.
    pub extract: Option<String>,
}

/// Issues the upstream requests for one page.
#[derive(Clone)]
pub struct PageFetcher {
    renderer: Arc<dyn ContentRenderer>,
    metadata: Arc<dyn MetadataApi>,
    selectors: Selectors,
}

impl PageFetcher {
    pub fn new(
        renderer: Arc<dyn ContentRenderer>,
        metadata: Arc<dyn MetadataApi>,
        selectors: Selectors,
    ) -> Self {
        Self {
            renderer,
            metadata,
            selectors,
        }
    }

    /// Fetch content and metadata (and the extract when `want_extract`).
    ///
    /// For main pages the content is replaced by the legacy rendering; the
    /// metadata and extract already fetched are kept.
    pub async fn fetch_lead(&self, request: &PageRequest, want_extract: bool) -> Result<FetchedPage> {
        let content = self.renderer.rendered_page(request);
        let meta = self.metadata.metadata(&request.title);

        let (page, meta, extract) = if want_extract {
            let extract = self.metadata.extract(&request.title);
            let (page, meta, extract) = futures::try_join!(content, meta, extract)
                .inspect_err(|err| tracing::warn!(title = %request.title, %err, "upstream fetch failed"))?;
            (page, meta, Some(extract))
        } else {
            let (page, meta) = futures::try_join!(content, meta)
                .inspect_err(|err| tracing::warn!(title = %request.title, %err, "upstream fetch failed"))?;
            (page, meta, None)
        };

        let page = if meta.mainpage {
            self.main_page_content(&request.title).await?
        } else {
            page
        };
        page.ensure_lead()?;

        Ok(FetchedPage {
            page,
            meta,
            extract,
        })
    }

    /// Fetch rendered content only.
    pub async fn fetch_content(&self, request: &PageRequest) -> Result<RawPage> {
        let page = self
            .renderer
            .rendered_page(request)
            .await
            .inspect_err(|err| tracing::warn!(title = %request.title, %err, "upstream fetch failed"))?;
        page.ensure_lead()?;
        Ok(page)
    }

    async fn main_page_content(&self, title: &str) -> Result<RawPage> {
        tracing::info!(title, "main page, using legacy rendering");
        let mut page = self
            .metadata
            .legacy_rendered_page(title)
            .await
            .inspect_err(|err| tracing::warn!(title, %err, "legacy fetch failed"))?;
        for section in &mut page.sections {
            section.text = main_page_transform(&section.text, &self.selectors);
        }
        Ok(page)
    }
}
