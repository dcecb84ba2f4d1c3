//! Geocoding result value objects

use serde::{Deserialize, Serialize};

/// A point matched for an address, with the provider's confidence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPoint<P> {
    point: P,
    score: f64,
    address: String,
}

impl<P> MatchedPoint<P> {
    /// Create a new matched point
    #[must_use]
    pub fn new(point: P, score: f64, address: impl Into<String>) -> Self {
        Self {
            point,
            score,
            address: address.into(),
        }
    }

    /// Get the point geometry
    #[must_use]
    pub const fn point(&self) -> &P {
        &self.point
    }

    /// Get the provider score
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Get the address as normalized by the provider
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Consume and return the bare point
    #[must_use]
    pub fn into_point(self) -> P {
        self.point
    }
}

/// The canonical match for an address and the other acceptable matches
///
/// Alternatives are plain [`MatchedPoint`]s, so they can never carry
/// alternatives of their own. When serialized, the `alternatives` key is
/// omitted if there are none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "P: Deserialize<'de>"))]
pub struct GeocodePoint<P> {
    #[serde(flatten)]
    best: MatchedPoint<P>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    alternatives: Vec<MatchedPoint<P>>,
}

impl<P> GeocodePoint<P> {
    /// Create a canonical point without alternatives
    #[must_use]
    pub const fn new(best: MatchedPoint<P>) -> Self {
        Self {
            best,
            alternatives: Vec::new(),
        }
    }

    /// Split ranked matches into the first (canonical) one and its alternatives
    ///
    /// Returns `None` if `matches` is empty. Order is preserved.
    #[must_use]
    pub fn from_ranked(matches: Vec<MatchedPoint<P>>) -> Option<Self> {
        let mut matches = matches.into_iter();
        let best = matches.next()?;
        Some(Self {
            best,
            alternatives: matches.collect(),
        })
    }

    /// Set the alternative matches
    #[must_use]
    pub fn with_alternatives(mut self, alternatives: Vec<MatchedPoint<P>>) -> Self {
        self.alternatives = alternatives;
        self
    }

    /// Get the canonical match
    #[must_use]
    pub const fn best(&self) -> &MatchedPoint<P> {
        &self.best
    }

    /// Get the canonical point geometry
    #[must_use]
    pub const fn point(&self) -> &P {
        self.best.point()
    }

    /// Get the canonical score
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.best.score()
    }

    /// Get the canonical address
    #[must_use]
    pub fn address(&self) -> &str {
        self.best.address()
    }

    /// Get the alternatives, in provider order
    #[must_use]
    pub fn alternatives(&self) -> &[MatchedPoint<P>] {
        &self.alternatives
    }

    /// Check whether any alternatives are attached
    #[must_use]
    pub fn has_alternatives(&self) -> bool {
        !self.alternatives.is_empty()
    }

    /// Consume into the canonical match and its alternatives
    #[must_use]
    pub fn into_parts(self) -> (MatchedPoint<P>, Vec<MatchedPoint<P>>) {
        (self.best, self.alternatives)
    }
}

/// Outcome of a geocoding call
///
/// `P` is the point type and `C` the collection type of the geometry factory
/// that built the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeocodeResult<P, C> {
    /// Best match with optional alternatives
    Point(GeocodePoint<P>),
    /// Every valid match merged into one collection, without metadata
    Collection(C),
}

impl<P, C> GeocodeResult<P, C> {
    /// Check whether this is a merged collection
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }

    /// Get the canonical point, if this is a single-point result
    #[must_use]
    pub const fn as_point(&self) -> Option<&GeocodePoint<P>> {
        match self {
            Self::Point(point) => Some(point),
            Self::Collection(_) => None,
        }
    }

    /// Get the collection, if this is a merged result
    #[must_use]
    pub const fn as_collection(&self) -> Option<&C> {
        match self {
            Self::Point(_) => None,
            Self::Collection(collection) => Some(collection),
        }
    }

    /// Consume into the canonical point, if any
    #[must_use]
    pub fn into_point(self) -> Option<GeocodePoint<P>> {
        match self {
            Self::Point(point) => Some(point),
            Self::Collection(_) => None,
        }
    }

    /// Consume into the collection, if any
    #[must_use]
    pub fn into_collection(self) -> Option<C> {
        match self {
            Self::Point(_) => None,
            Self::Collection(collection) => Some(collection),
        }
    }
}
