//! Non-persistent geometric queries.
//!
//! The most general method provided by this module is [`query::intersection_test()`] which
//! determines if two polygons are overlapping or not.
//!
//! The building blocks of the Separating Axis Theorem (edge normals, projections, one-way
//! separating axis searches) are exported by the [`sat`] submodule. The functions exported by
//! the [`details`] submodule are more specific versions of the intersection test.
//!
//! [`query::intersection_test()`]: crate::query::intersection_test

pub use self::intersection_test::intersection_test;

mod intersection_test;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
}
