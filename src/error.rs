//! Error types for mobile-sections.
//!
//! This module defines the error types returned by fetch and assembly
//! operations. Extractors never return errors for missing elements: an
//! absent hatnote, infobox, pronunciation or issue banner is a normal outcome.

/// Error type for page assembly operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required upstream fetch failed (network, non-success status,
    /// malformed payload). No partial page is produced.
    #[error("Upstream request failed with status {status}: {message}")]
    Upstream {
        /// Status reported by the upstream collaborator.
        status: u16,
        /// Human readable reason.
        message: String,
    },

    /// The rendered page has no sections, so there is no lead to work on.
    #[error("Rendered page has no sections")]
    NoSections,

    /// Upstream JSON could not be decoded into the page model.
    #[error("Failed to decode upstream payload: {0}")]
    Decode(String),

    /// Requested response variant does not exist.
    #[error("Unknown response variant: {0}")]
    UnknownVariant(String),
}

impl Error {
    /// Builds an [`Error::Upstream`] from a status and message.
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Status code a boundary layer should surface for this error.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::NoSections | Self::Decode(_) => 502,
            Self::UnknownVariant(_) => 404,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for mobile-sections operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_keeps_status() {
        let err = Error::upstream(404, "page not found");
        assert_eq!(err.status(), 404);
        assert_eq!(
            err.to_string(),
            "Upstream request failed with status 404: page not found"
        );
    }

    #[test]
    fn structural_errors_map_to_bad_gateway() {
        assert_eq!(Error::NoSections.status(), 502);
        let decode: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(decode, Error::Decode(_)));
        assert_eq!(decode.status(), 502);
    }
}
