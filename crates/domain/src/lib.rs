//! Domain layer for address geocoding
//!
//! Contains the provider-independent geometry seam and the value objects
//! geocoding integrations return.

pub mod geometry;
pub mod value_objects;

pub use geometry::{GeoTypesFactory, GeometryFactory};
pub use value_objects::*;
