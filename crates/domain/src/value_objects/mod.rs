//! Value Objects - Immutable, identity-less domain primitives

mod geocode_point;

pub use geocode_point::{GeocodePoint, GeocodeResult, MatchedPoint};
