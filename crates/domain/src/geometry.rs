//! Geometry construction seam
//!
//! Geocoding integrations never build geometries directly. They go through a
//! [`GeometryFactory`], which keeps the choice of geometry library with the
//! host application.

use std::fmt::Debug;

use geo_types::{MultiPoint, Point};

/// Builds points and homogeneous point collections
pub trait GeometryFactory: Send + Sync {
    /// Single coordinate pair type
    type Point: Clone + Debug + Send + Sync;

    /// Collection produced by [`GeometryFactory::merge_to_collection`]
    type Collection: Debug + Send + Sync;

    /// Construct a point from planar `x` / `y` coordinates
    fn make_point(&self, x: f64, y: f64) -> Self::Point;

    /// Merge points into a single collection
    ///
    /// Implementations must keep the input order and must not drop or
    /// deduplicate points.
    fn merge_to_collection(&self, points: Vec<Self::Point>) -> Self::Collection;
}

/// [`GeometryFactory`] backed by the `geo-types` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoTypesFactory;

impl GeometryFactory for GeoTypesFactory {
    type Point = Point<f64>;
    type Collection = MultiPoint<f64>;

    fn make_point(&self, x: f64, y: f64) -> Point<f64> {
        Point::new(x, y)
    }

    fn merge_to_collection(&self, points: Vec<Point<f64>>) -> MultiPoint<f64> {
        MultiPoint(points)
    }
}
