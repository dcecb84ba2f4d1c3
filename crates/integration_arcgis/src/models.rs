//! `findAddressCandidates` wire models
//!
//! Only the fields the geocoder needs are decoded. Candidates are kept as raw
//! JSON values at first so a single badly typed record cannot fail the whole
//! response.

use serde::Deserialize;
use serde_json::Value;

/// Top-level `findAddressCandidates` response
#[derive(Debug, Deserialize)]
pub(crate) struct CandidatesResponse {
    #[serde(default)]
    pub candidates: Vec<Value>,
}

/// A candidate record as sent by the provider, every field optional
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawCandidate {
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    location: Option<RawLocation>,
    #[serde(default)]
    score: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLocation {
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
}

/// A well-formed candidate
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Candidate {
    pub address: String,
    pub x: f64,
    pub y: f64,
    pub score: f64,
}

impl RawCandidate {
    /// Decode one entry of the `candidates` array
    ///
    /// Returns `None` when the entry is not an object of the expected shape.
    pub fn from_value(value: Value) -> Option<Self> {
        serde_json::from_value(value).ok()
    }

    /// Keep the candidate only if every required field is present and set
    pub fn into_candidate(self) -> Option<Candidate> {
        let location = self.location?;
        let x = location.x.filter(|v| is_set(*v))?;
        let y = location.y.filter(|v| is_set(*v))?;
        let score = self.score.filter(|v| is_set(*v))?;
        let address = self
            .address
            .filter(|a| !a.is_empty() && a != "0")?;

        Some(Candidate {
            address,
            x,
            y,
            score,
        })
    }
}

/// A finite, non-zero number
fn is_set(value: f64) -> bool {
    value.is_finite() && value.abs() > 0.0
}
