//! ArcGIS World geocoding client
//!
//! Resolves free-form addresses through the
//! [`findAddressCandidates`](https://developers.arcgis.com/rest/geocode/api-reference/geocoding-find-address-candidates.htm)
//! operation of the ArcGIS World geocode service.
//!
//! The provider returns candidates best match first. The geocoder drops
//! malformed candidates and those below the score threshold, then either
//! returns the first survivor with the rest as alternatives or merges every
//! survivor into one collection.

use async_trait::async_trait;
use domain::geometry::{GeoTypesFactory, GeometryFactory};
use domain::value_objects::{GeocodePoint, GeocodeResult, MatchedPoint};
use tracing::{debug, instrument};
use url::form_urlencoded;

use crate::config::ArcgisConfig;
use crate::error::ArcgisError;
use crate::models::{Candidate, CandidatesResponse, RawCandidate};
use crate::transport::{HttpTransport, ReqwestTransport, TransportResponse};

/// Path of the `findAddressCandidates` operation
pub const FIND_ADDRESS_CANDIDATES_PATH: &str =
    "/arcgis/rest/services/World/GeocodeServer/findAddressCandidates";

/// Trait for address geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Point type of the results
    type Point: Send;
    /// Collection type returned in all-results mode
    type Collection: Send;

    /// Resolve a free-form address
    async fn locate(
        &self,
        address: &str,
    ) -> Result<GeocodeResult<Self::Point, Self::Collection>, ArcgisError>;
}

/// Geocoder for the ArcGIS World geocode service
#[derive(Debug)]
pub struct ArcgisGeocoder<T = ReqwestTransport, G = GeoTypesFactory> {
    transport: T,
    geometry: G,
    config: ArcgisConfig,
}

impl ArcgisGeocoder {
    /// Create a geocoder using `reqwest` and `geo-types`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &ArcgisConfig) -> Result<Self, ArcgisError> {
        config.validate().map_err(ArcgisError::Configuration)?;
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_parts(config.clone(), transport, GeoTypesFactory))
    }
}

impl<T, G> ArcgisGeocoder<T, G>
where
    T: HttpTransport,
    G: GeometryFactory,
{
    /// Create a geocoder from explicit collaborators
    pub const fn with_parts(config: ArcgisConfig, transport: T, geometry: G) -> Self {
        Self {
            transport,
            geometry,
            config,
        }
    }

    /// Get the configuration
    #[must_use]
    pub const fn config(&self) -> &ArcgisConfig {
        &self.config
    }

    /// Build the request URL for `address`
    ///
    /// The query is form-urlencoded with spaces as `+` and `*` as `%2A`.
    #[must_use]
    pub fn build_url(&self, address: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("singleLine", address)
            .append_pair("f", "json")
            .finish()
            .replace('*', "%2A");

        format!(
            "{}://{}{FIND_ADDRESS_CANDIDATES_PATH}?{query}",
            self.config.options.scheme(),
            self.config.host,
        )
    }

    /// Resolve `address` to the best match or to a merged collection
    ///
    /// # Errors
    ///
    /// - [`ArcgisError::RequestFailed`] if the transport reports a failure
    /// - [`ArcgisError::NoCandidates`] if the response holds no candidates
    /// - [`ArcgisError::NoValidCandidates`] if every candidate is filtered out
    #[instrument(skip(self))]
    pub async fn locate(
        &self,
        address: &str,
    ) -> Result<GeocodeResult<G::Point, G::Collection>, ArcgisError> {
        let body = self.fetch(address).await?;
        let raw = Self::decode_candidates(&body)?;
        let matches = self.valid_matches(raw);

        if matches.is_empty() {
            return Err(ArcgisError::NoValidCandidates);
        }

        debug!(valid = matches.len(), "Geocoded address");
        self.assemble(matches)
    }

    async fn fetch(&self, address: &str) -> Result<String, ArcgisError> {
        let url = self.build_url(address);
        debug!(%url, "Requesting address candidates");

        match self.transport.get(&url).await {
            TransportResponse::Success { body } => Ok(body),
            TransportResponse::Failure { code, error } => {
                Err(ArcgisError::RequestFailed { code, error })
            }
        }
    }

    fn decode_candidates(body: &str) -> Result<Vec<serde_json::Value>, ArcgisError> {
        let response: CandidatesResponse = serde_json::from_str(body).map_err(|e| {
            debug!(error = %e, "Response is not a candidates document");
            ArcgisError::NoCandidates
        })?;

        if response.candidates.is_empty() {
            return Err(ArcgisError::NoCandidates);
        }

        Ok(response.candidates)
    }

    /// Well-formed candidates meeting the score threshold, in provider order
    fn valid_matches(&self, raw: Vec<serde_json::Value>) -> Vec<MatchedPoint<G::Point>> {
        let total = raw.len();
        let matches: Vec<_> = raw
            .into_iter()
            .filter_map(RawCandidate::from_value)
            .filter_map(RawCandidate::into_candidate)
            .filter(|candidate| self.config.options.accepts_score(candidate.score))
            .map(|candidate| self.to_matched_point(candidate))
            .collect();

        debug!(total, kept = matches.len(), "Filtered candidates");
        matches
    }

    fn to_matched_point(&self, candidate: Candidate) -> MatchedPoint<G::Point> {
        let point = self.geometry.make_point(candidate.x, candidate.y);
        MatchedPoint::new(point, candidate.score, candidate.address)
    }

    fn assemble(
        &self,
        matches: Vec<MatchedPoint<G::Point>>,
    ) -> Result<GeocodeResult<G::Point, G::Collection>, ArcgisError> {
        if self.config.options.return_all_results {
            let points = matches.into_iter().map(MatchedPoint::into_point).collect();
            return Ok(GeocodeResult::Collection(
                self.geometry.merge_to_collection(points),
            ));
        }

        GeocodePoint::from_ranked(matches)
            .map(GeocodeResult::Point)
            .ok_or(ArcgisError::NoValidCandidates)
    }
}

#[async_trait]
impl<T, G> GeocodingClient for ArcgisGeocoder<T, G>
where
    T: HttpTransport,
    G: GeometryFactory,
{
    type Point = G::Point;
    type Collection = G::Collection;

    async fn locate(
        &self,
        address: &str,
    ) -> Result<GeocodeResult<G::Point, G::Collection>, ArcgisError> {
        Self::locate(self, address).await
    }
}
