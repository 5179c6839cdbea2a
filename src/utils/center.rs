use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// The center is the arithmetic mean of all the point coordinates, every point being
/// weighted equally. For a polygon this is the mean of its vertices, which matches the
/// pivot used when rotating a shape "about itself".
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use sat2d::utils::center;
/// use sat2d::math::Point;
///
/// let points = [
///     Point::new(200.0, 200.0),
///     Point::new(400.0, 200.0),
///     Point::new(400.0, 400.0),
///     Point::new(200.0, 400.0),
/// ];
///
/// assert_eq!(center(&points), Point::new(300.0, 300.0));
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let sum = pts
        .iter()
        .fold(Point::origin(), |acc, pt| acc + pt.coords);

    sum / (pts.len() as Real)
}
