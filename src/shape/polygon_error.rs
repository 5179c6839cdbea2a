use crate::shape::ShapeKind;

/// Errors that can occur when configuring the vertices of a [`Polygon`](crate::shape::Polygon).
///
/// The polygon is left untouched whenever one of these errors is returned.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use sat2d::math::Point;
/// use sat2d::shape::{Polygon, PolygonError, ShapeKind};
///
/// let mut triangle = Polygon::new(ShapeKind::Triangle);
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
///
/// assert_eq!(
///     triangle.set_vertices(&square),
///     Err(PolygonError::VertexCountMismatch {
///         kind: ShapeKind::Triangle,
///         expected: 3,
///         found: 4,
///     })
/// );
/// # }
/// ```
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// The number of vertices does not match the one required by the polygon's kind.
    #[error("a {kind} needs exactly {expected} vertices, {found} were given")]
    VertexCountMismatch {
        /// The kind of the polygon being configured.
        kind: ShapeKind,
        /// The number of vertices required by `kind`.
        expected: usize,
        /// The number of vertices that were given.
        found: usize,
    },
}
