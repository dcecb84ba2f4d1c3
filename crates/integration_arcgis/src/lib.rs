//! ArcGIS World geocoding integration
//!
//! Resolves free-form postal addresses to points through the ArcGIS World
//! geocode service (`findAddressCandidates`).
//!
//! # Architecture
//!
//! [`ArcgisGeocoder`] runs one linear pipeline per call: build the URL,
//! fetch it through an [`HttpTransport`], decode the candidates, drop the
//! malformed ones and those under the score threshold, and assemble either
//! the best match with its alternatives or a merged collection. Points are
//! built by a [`domain::geometry::GeometryFactory`]; both collaborators can be
//! swapped for fakes in tests. [`ReqwestTransport`] is the bundled transport.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_arcgis::{ArcgisConfig, ArcgisGeocoder};
//!
//! let config = ArcgisConfig::default().with_score_threshold(90.0);
//! let geocoder = ArcgisGeocoder::new(&config)?;
//!
//! let result = geocoder.locate("Gildeweg 39a, 4383 NJ Vlissingen").await?;
//! if let Some(point) = result.as_point() {
//!     println!("{} ({} alternatives)", point.address(), point.alternatives().len());
//! }
//! ```

mod config;
mod error;
mod geocoder;
mod messages;
mod models;
mod transport;

pub use config::{ArcgisConfig, GeocodeOptions};
pub use error::ArcgisError;
pub use geocoder::{ArcgisGeocoder, FIND_ADDRESS_CANDIDATES_PATH, GeocodingClient};
pub use messages::{EnglishCatalog, MessageCatalog, substitute};
pub use transport::{HttpTransport, NO_RESPONSE_CODE, ReqwestTransport, TransportResponse};

pub use domain::geometry::{GeoTypesFactory, GeometryFactory};
pub use domain::value_objects::{GeocodePoint, GeocodeResult, MatchedPoint};
