//! Property-based tests for candidate filtering and result assembly
//!
//! Runs the geocoder against an in-memory transport and a tuple-based
//! geometry factory.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use integration_arcgis::{
    ArcgisConfig, ArcgisError, ArcgisGeocoder, GeocodeResult, GeometryFactory, HttpTransport,
    TransportResponse,
};
use proptest::prelude::*;
use serde_json::json;

/// Transport that answers every request with a fixed response and records URLs
#[derive(Debug)]
struct StaticTransport {
    response: TransportResponse,
    requested: Mutex<Vec<String>>,
}

impl StaticTransport {
    fn new(response: TransportResponse) -> Arc<Self> {
        Arc::new(Self {
            response,
            requested: Mutex::new(Vec::new()),
        })
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for StaticTransport {
    async fn get(&self, url: &str) -> TransportResponse {
        self.requested.lock().unwrap().push(url.to_string());
        self.response.clone()
    }
}

/// Geometry factory producing plain tuples
#[derive(Debug, Default)]
struct TupleFactory;

impl GeometryFactory for TupleFactory {
    type Point = (f64, f64);
    type Collection = Vec<(f64, f64)>;

    fn make_point(&self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }

    fn merge_to_collection(&self, points: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
        points
    }
}

fn body_for(scores: &[u8]) -> String {
    let candidates: Vec<_> = scores
        .iter()
        .enumerate()
        .map(|(i, score)| {
            json!({
                "address": format!("candidate {i}"),
                "location": { "x": (i + 1) as f64, "y": 51.45 },
                "score": f64::from(*score),
            })
        })
        .collect();
    json!({ "candidates": candidates }).to_string()
}

type TupleResult = GeocodeResult<(f64, f64), Vec<(f64, f64)>>;

fn run(config: ArcgisConfig, body: String) -> Result<TupleResult, ArcgisError> {
    let geocoder = ArcgisGeocoder::with_parts(
        config,
        StaticTransport::new(TransportResponse::success(body)),
        TupleFactory,
    );
    tokio_test::block_on(geocoder.locate("test"))
}

fn surviving(scores: &[u8], threshold: u8) -> Vec<String> {
    scores
        .iter()
        .enumerate()
        .filter(|(_, score)| **score > 0 && **score >= threshold)
        .map(|(i, _)| format!("candidate {i}"))
        .collect()
}

proptest! {
    #[test]
    fn alternatives_follow_provider_order(
        scores in prop::collection::vec(0u8..=100, 1..30),
        threshold in 0u8..=100,
    ) {
        let expected = surviving(&scores, threshold);
        let config = ArcgisConfig::default().with_score_threshold(f64::from(threshold));
        let result = run(config, body_for(&scores));

        if expected.is_empty() {
            prop_assert_eq!(result.unwrap_err(), ArcgisError::NoValidCandidates);
        } else {
            let point = result.unwrap().into_point().unwrap();
            let mut addresses = vec![point.address().to_string()];
            addresses.extend(point.alternatives().iter().map(|a| a.address().to_string()));

            prop_assert_eq!(point.alternatives().len(), expected.len() - 1);
            prop_assert_eq!(point.has_alternatives(), expected.len() > 1);
            prop_assert_eq!(addresses, expected);
        }
    }

    #[test]
    fn merged_collection_keeps_every_survivor(
        scores in prop::collection::vec(1u8..=100, 1..30),
        threshold in 0u8..=100,
    ) {
        let expected = surviving(&scores, threshold);
        let config = ArcgisConfig::default()
            .with_score_threshold(f64::from(threshold))
            .with_all_results(true);
        let result = run(config, body_for(&scores));

        if expected.is_empty() {
            prop_assert_eq!(result.unwrap_err(), ArcgisError::NoValidCandidates);
        } else {
            let collection = result.unwrap().into_collection().unwrap();
            prop_assert_eq!(collection.len(), expected.len());
            prop_assert!(collection.windows(2).all(|pair| pair[0].0 < pair[1].0));
        }
    }

    #[test]
    fn request_failure_is_reported_verbatim(
        code in 0i32..600,
        error in "[A-Za-z ]{1,30}",
        threshold in proptest::option::of(0.0f64..100.0),
        all_results in any::<bool>(),
    ) {
        let mut config = ArcgisConfig::default().with_all_results(all_results);
        config.options.score_threshold = threshold;
        let geocoder = ArcgisGeocoder::with_parts(
            config,
            StaticTransport::new(TransportResponse::failure(code, error.clone())),
            TupleFactory,
        );

        let err = tokio_test::block_on(geocoder.locate("test")).unwrap_err();
        prop_assert_eq!(err, ArcgisError::RequestFailed { code, error });
    }
}

#[test]
fn test_scheme_follows_secure_transport_option() {
    for (secure, scheme) in [(true, "https://"), (false, "http://")] {
        let transport = StaticTransport::new(TransportResponse::success(body_for(&[90])));
        let config = ArcgisConfig::default().with_secure_transport(secure);
        let geocoder = ArcgisGeocoder::with_parts(config, Arc::clone(&transport), TupleFactory);

        tokio_test::block_on(geocoder.locate("Gildeweg 39a")).unwrap();

        let requested = transport.requested();
        assert_eq!(requested.len(), 1);
        assert!(requested[0].starts_with(scheme));
        assert!(requested[0].ends_with("?singleLine=Gildeweg+39a&f=json"));
    }
}

#[test]
fn test_one_request_per_call() {
    let transport = StaticTransport::new(TransportResponse::success(body_for(&[90, 80])));
    let geocoder =
        ArcgisGeocoder::with_parts(ArcgisConfig::default(), Arc::clone(&transport), TupleFactory);

    tokio_test::block_on(geocoder.locate("first")).unwrap();
    tokio_test::block_on(geocoder.locate("second")).unwrap();

    let requested = transport.requested();
    assert_eq!(requested.len(), 2);
    assert!(requested[0].contains("singleLine=first"));
    assert!(requested[1].contains("singleLine=second"));
}
