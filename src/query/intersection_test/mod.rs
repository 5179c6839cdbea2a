//! Intersection testing between polygons.

pub use self::intersection_test::intersection_test;
pub use self::intersection_test_polygon_polygon::{
    intersection_test_polygon_polygon, intersection_test_polygon_polygon_with_cache,
    SeparatingAxisCache,
};

mod intersection_test_polygon_polygon;
