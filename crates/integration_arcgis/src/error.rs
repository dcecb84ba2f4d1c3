//! ArcGIS error types

use thiserror::Error;

use crate::messages::MessageCatalog;

const REQUEST_FAILED: &str = "HTTP request to ArcGIS failed. Code: {code} Error: {error}";
const NO_CANDIDATES: &str = "ArcGIS could not find any candidates.";
const NO_VALID_CANDIDATES: &str = "ArcGIS did not return any valid candidates.";
const CONFIGURATION: &str = "Configuration error: {reason}";

/// Errors that can occur while geocoding an address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArcgisError {
    /// The transport reported a failed request
    #[error("HTTP request to ArcGIS failed. Code: {code} Error: {error}")]
    RequestFailed {
        /// Status code reported by the transport (0 when no response arrived)
        code: i32,
        /// Error text reported by the transport
        error: String,
    },

    /// The response held no candidates at all
    #[error("ArcGIS could not find any candidates.")]
    NoCandidates,

    /// Every candidate was malformed or below the score threshold
    #[error("ArcGIS did not return any valid candidates.")]
    NoValidCandidates,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ArcgisError {
    /// Returns true if repeating the same call may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RequestFailed { .. })
    }

    /// Untranslated message template with `{name}` placeholders
    #[must_use]
    pub const fn message_template(&self) -> &'static str {
        match self {
            Self::RequestFailed { .. } => REQUEST_FAILED,
            Self::NoCandidates => NO_CANDIDATES,
            Self::NoValidCandidates => NO_VALID_CANDIDATES,
            Self::Configuration(_) => CONFIGURATION,
        }
    }

    /// Placeholder values for [`ArcgisError::message_template`]
    #[must_use]
    pub fn message_args(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::RequestFailed { code, error } => {
                vec![("code", code.to_string()), ("error", error.clone())]
            }
            Self::NoCandidates | Self::NoValidCandidates => Vec::new(),
            Self::Configuration(reason) => vec![("reason", reason.clone())],
        }
    }

    /// Render the message through a catalog
    #[must_use]
    pub fn localized(&self, catalog: &dyn MessageCatalog) -> String {
        catalog.translate(self.message_template(), &self.message_args())
    }
}
