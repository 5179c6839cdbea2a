//! Shapes supported by sat2d.

pub use self::polygon::Polygon;
pub use self::polygon_error::PolygonError;
pub use self::shape_kind::ShapeKind;

mod polygon;
mod polygon_error;
mod shape_kind;
