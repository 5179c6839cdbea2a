//! Caller-owned collections of polygons.
//!
//! Nothing in this crate keeps track of the polygons that were created. Applications that need
//! to iterate over all their shapes, e.g., to render them or to test all of them against each
//! other, store them in a [`PolygonSet`] they own.

pub use self::polygon_set::{PolygonHandle, PolygonSet};

mod polygon_set;
