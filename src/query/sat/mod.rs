//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! # What is the Separating Axis Theorem?
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For convex polygons, such an axis, if it exists, is
//! always parallel to an edge normal of one of the two polygons. Testing every edge normal
//! of both polygons is therefore necessary and sufficient.
//!
//! # How does it work here?
//!
//! 1. **Select candidate axes**: the edge normals of a polygon ([`polygon_normals`]). A
//!    rectangle only contributes two axes since its opposite edges are parallel.
//! 2. **Project both polygons onto each axis** ([`project_on_axis`]), giving one
//!    [`Interval`](crate::utils::Interval) per polygon.
//! 3. **Check for overlap**: the first axis with disjoint intervals proves the polygons are
//!    disjoint and the search stops. If every axis of both polygons shows an overlap, the
//!    polygons intersect.
//!
//! Intervals touching at a single value overlap, so polygons that merely touch are reported
//! as intersecting.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "f32")] {
//! use sat2d::math::Point;
//! use sat2d::query::sat::{polygon_polygon_find_separating_axis, AxisOwner};
//! use sat2d::shape::Polygon;
//!
//! let rect = Polygon::rectangle(
//!     Point::new(200.0, 200.0),
//!     Point::new(400.0, 200.0),
//!     Point::new(400.0, 400.0),
//!     Point::new(200.0, 400.0),
//! );
//! let tri = Polygon::triangle(
//!     Point::new(1000.0, 1000.0),
//!     Point::new(1200.0, 1000.0),
//!     Point::new(1000.0, 1200.0),
//! );
//!
//! let separation = polygon_polygon_find_separating_axis(&rect, &tri).unwrap();
//! assert_eq!(separation.owner, AxisOwner::First);
//! # }
//! ```

pub use self::sat_edge_normal::{edge_normal, polygon_edge_normals, polygon_normals, PolygonNormals};
pub use self::sat_polygon_polygon::*;
pub use self::sat_projection::{project_on_axis, separated_along_axis};

mod sat_edge_normal;
mod sat_polygon_polygon;
mod sat_projection;
