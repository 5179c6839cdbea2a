use crate::math::{Point, Real, Vector};
use crate::utils::Interval;

/// Projects a set of points onto `axis`, returning the range of their dot products.
///
/// The axis doesn't need to be normalized: scaling it scales both intervals being compared
/// by the same factor, which doesn't change whether they overlap.
///
/// Every point is visited exactly once.
///
/// # Panics
///
/// Panics if `points` is empty.
#[inline]
pub fn project_on_axis(points: &[Point<Real>], axis: &Vector<Real>) -> Interval {
    let first = points[0].coords.dot(axis);

    points[1..]
        .iter()
        .fold(Interval::splat(first), |proj, pt| {
            proj.enclose(pt.coords.dot(axis))
        })
}

/// Tests if `axis` separates the projections of two sets of points.
///
/// Projections touching at a single value are not separated.
#[inline]
pub fn separated_along_axis(
    points1: &[Point<Real>],
    points2: &[Point<Real>],
    axis: &Vector<Real>,
) -> bool {
    let proj1 = project_on_axis(points1, axis);
    let proj2 = project_on_axis(points2, axis);
    !proj1.overlaps(&proj2)
}
