//! Request entry points, one per response variant.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use crate::assemble::{build_all, build_lead, build_references, build_remaining};
use crate::error::{Error, Result};
use crate::extractor::OutputMode;
use crate::fetch::{ContentRenderer, MetadataApi, PageFetcher, PageRequest};
use crate::options::Options;
use crate::result::{AllPayload, LeadPayload, ReferencesPayload, RemainingPayload};

/// Response variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Lead and remaining sections, embedded lead.
    All,
    /// Lead only, embedded, with the summary extract.
    Lead,
    Remaining,
    References,
    /// Lead and remaining sections, decomposed lead.
    Formatted,
    /// Lead only, decomposed, with the summary extract.
    FormattedLead,
}

impl Variant {
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Lead,
        Self::Remaining,
        Self::References,
        Self::Formatted,
        Self::FormattedLead,
    ];

    /// Route name of the variant.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "mobile-sections",
            Self::Lead => "mobile-sections-lead",
            Self::Remaining => "mobile-sections-remaining",
            Self::References => "references",
            Self::Formatted => "formatted",
            Self::FormattedLead => "formatted-lead",
        }
    }

    /// Lead output mode, `None` for variants without a lead.
    #[must_use]
    pub fn mode(self) -> Option<OutputMode> {
        match self {
            Self::All | Self::Lead => Some(OutputMode::Embedded),
            Self::Formatted | Self::FormattedLead => Some(OutputMode::Decomposed),
            Self::Remaining | Self::References => None,
        }
    }

    /// True for the variants that return only the lead (with the extract).
    #[must_use]
    pub fn is_lead_only(self) -> bool {
        matches!(self, Self::Lead | Self::FormattedLead)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| Error::UnknownVariant(s.to_string()))
    }
}

/// Any response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    All(AllPayload),
    Lead(LeadPayload),
    Remaining(RemainingPayload),
    References(ReferencesPayload),
}

/// Fetches a page and assembles the requested payload.
///
/// `Ok(None)` from the lead-bearing variants means the page has no content.
#[derive(Clone)]
pub struct MobileSections {
    fetcher: PageFetcher,
    options: Options,
}

impl MobileSections {
    pub fn new(
        renderer: Arc<dyn ContentRenderer>,
        metadata: Arc<dyn MetadataApi>,
        options: Options,
    ) -> Self {
        let fetcher = PageFetcher::new(renderer, metadata, options.selectors.clone());
        Self { fetcher, options }
    }

    pub async fn all(&self, request: &PageRequest) -> Result<Option<AllPayload>> {
        self.whole_page(request, OutputMode::Embedded).await
    }

    pub async fn formatted(&self, request: &PageRequest) -> Result<Option<AllPayload>> {
        self.whole_page(request, OutputMode::Decomposed).await
    }

    pub async fn lead(&self, request: &PageRequest) -> Result<Option<LeadPayload>> {
        self.lead_only(request, OutputMode::Embedded).await
    }

    pub async fn formatted_lead(&self, request: &PageRequest) -> Result<Option<LeadPayload>> {
        self.lead_only(request, OutputMode::Decomposed).await
    }

    pub async fn remaining(&self, request: &PageRequest) -> Result<RemainingPayload> {
        let page = self.fetcher.fetch_content(request).await?;
        build_remaining(&page, &self.options)
    }

    pub async fn references(&self, request: &PageRequest) -> Result<ReferencesPayload> {
        let page = self.fetcher.fetch_content(request).await?;
        build_references(&page, &self.options)
    }

    /// Dispatch on `variant`.
    pub async fn respond(&self, variant: Variant, request: &PageRequest) -> Result<Option<Payload>> {
        tracing::debug!(%variant, title = %request.title, "handling request");
        let Some(mode) = variant.mode() else {
            let payload = if variant == Variant::References {
                Payload::References(self.references(request).await?)
            } else {
                Payload::Remaining(self.remaining(request).await?)
            };
            return Ok(Some(payload));
        };

        Ok(if variant.is_lead_only() {
            self.lead_only(request, mode).await?.map(Payload::Lead)
        } else {
            self.whole_page(request, mode).await?.map(Payload::All)
        })
    }

    async fn whole_page(&self, request: &PageRequest, mode: OutputMode) -> Result<Option<AllPayload>> {
        let fetched = self.fetcher.fetch_lead(request, false).await?;
        build_all(&fetched.page, &fetched.meta, mode, &self.options)
    }

    async fn lead_only(&self, request: &PageRequest, mode: OutputMode) -> Result<Option<LeadPayload>> {
        let fetched = self.fetcher.fetch_lead(request, true).await?;
        let lead = build_lead(&fetched.page, &fetched.meta, mode, &self.options)?;
        Ok(lead.map(|lead| LeadPayload {
            extract: fetched.extract,
            ..lead
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_round_trips_through_route_name() {
        for variant in Variant::ALL {
            assert_eq!(variant.as_str().parse::<Variant>().ok(), Some(variant));
        }
        assert!("mobile-html".parse::<Variant>().is_err());
    }

    #[test]
    fn test_variant_modes() {
        assert_eq!(Variant::Lead.mode(), Some(OutputMode::Embedded));
        assert_eq!(Variant::FormattedLead.mode(), Some(OutputMode::Decomposed));
        assert_eq!(Variant::References.mode(), None);
    }

    #[test]
    fn test_every_variant_has_a_lead_mode_or_content_only_fetch() {
        for variant in Variant::ALL {
            let content_only = matches!(variant, Variant::Remaining | Variant::References);
            assert_eq!(variant.mode().is_none(), content_only, "{variant}");
            if variant.is_lead_only() {
                assert!(variant.mode().is_some(), "{variant}");
            }
        }
    }
}
