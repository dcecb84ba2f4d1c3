//! ArcGIS geocoder configuration

use serde::{Deserialize, Serialize};

/// Per-call behavior of the geocoder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeOptions {
    /// Use `https` for the provider URL (`http` when false)
    #[serde(default = "default_true", alias = "https")]
    pub use_secure_transport: bool,

    /// Minimum candidate score to keep (no score filtering when unset)
    #[serde(default)]
    pub score_threshold: Option<f64>,

    /// Merge every valid candidate into one collection instead of
    /// returning the best match with alternatives
    #[serde(default, alias = "all_results")]
    pub return_all_results: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for GeocodeOptions {
    fn default() -> Self {
        Self {
            use_secure_transport: true,
            score_threshold: None,
            return_all_results: false,
        }
    }
}

impl GeocodeOptions {
    /// URL scheme selected by [`GeocodeOptions::use_secure_transport`]
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        if self.use_secure_transport {
            "https"
        } else {
            "http"
        }
    }

    /// Check a candidate score against the threshold (ties are accepted)
    #[must_use]
    pub fn accepts_score(&self, score: f64) -> bool {
        self.score_threshold
            .is_none_or(|threshold| score >= threshold)
    }
}

/// Configuration for the ArcGIS World geocoding service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcgisConfig {
    /// Host (and optional port) of the geocode server
    #[serde(default = "default_host")]
    pub host: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Geocoding behavior
    #[serde(flatten)]
    pub options: GeocodeOptions,
}

fn default_host() -> String {
    "geocode.arcgis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for ArcgisConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_secs: default_timeout_secs(),
            options: GeocodeOptions::default(),
        }
    }
}

impl ArcgisConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Point the geocoder at another host, e.g. a local mock server
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Select `https` (true) or `http` (false)
    #[must_use]
    pub const fn with_secure_transport(mut self, secure: bool) -> Self {
        self.options.use_secure_transport = secure;
        self
    }

    /// Set the minimum candidate score
    #[must_use]
    pub const fn with_score_threshold(mut self, threshold: f64) -> Self {
        self.options.score_threshold = Some(threshold);
        self
    }

    /// Merge all valid candidates into one collection
    #[must_use]
    pub const fn with_all_results(mut self, all_results: bool) -> Self {
        self.options.return_all_results = all_results;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }

        if self.host.contains("://") || self.host.contains('/') {
            return Err("host must not contain a scheme or path".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self
            .options
            .score_threshold
            .is_some_and(|threshold| !threshold.is_finite())
        {
            return Err("score_threshold must be a finite number".to_string());
        }

        Ok(())
    }
}
