use crate::math::{Point, Real, Vector};
use crate::query::sat::{polygon_edge_normals, polygon_normals, separated_along_axis};
use crate::shape::Polygon;

/// Identifies which of the two shapes given to a query contributed an axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisOwner {
    /// The axis is an edge normal of the first shape.
    First,
    /// The axis is an edge normal of the second shape.
    Second,
}

impl AxisOwner {
    /// The owner of the same axis once both shapes are swapped.
    #[inline]
    #[must_use]
    pub fn swapped(self) -> Self {
        match self {
            AxisOwner::First => AxisOwner::Second,
            AxisOwner::Second => AxisOwner::First,
        }
    }
}

/// An axis along which the projections of two shapes don't overlap.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeparatingAxis {
    /// The shape this axis is an edge normal of.
    pub owner: AxisOwner,
    /// The index of the axis in the owner's list of normals.
    pub index: usize,
    /// The axis direction.
    pub axis: Vector<Real>,
}

/// Finds an axis separating two polygons, testing the axes of `poly1` first, then those of
/// `poly2`.
///
/// Returns `None` if no such axis exist, i.e., if the polygons intersect. The search stops at
/// the first separating axis found so the returned axis is not necessarily the one with the
/// largest separation.
///
/// Swapping `poly1` and `poly2` may change the reported axis, but never whether one exists.
pub fn polygon_polygon_find_separating_axis(
    poly1: &Polygon,
    poly2: &Polygon,
) -> Option<SeparatingAxis> {
    polygon_polygon_find_separating_axis_oneway(poly1, poly2)
        .map(|(index, axis)| SeparatingAxis {
            owner: AxisOwner::First,
            index,
            axis,
        })
        .or_else(|| {
            polygon_polygon_find_separating_axis_oneway(poly2, poly1).map(|(index, axis)| {
                SeparatingAxis {
                    owner: AxisOwner::Second,
                    index,
                    axis,
                }
            })
        })
}

/// Finds an axis separating two polygons among the normals of `poly1` only.
///
/// This is one of the two passes of [`polygon_polygon_find_separating_axis`]. Returns the
/// index of the axis in [`polygon_normals`] together with the axis itself.
///
/// A `None` result does not mean the polygons intersect: the normals of `poly2` must be tested
/// too.
pub fn polygon_polygon_find_separating_axis_oneway(
    poly1: &Polygon,
    poly2: &Polygon,
) -> Option<(usize, Vector<Real>)> {
    polygon_normals(poly1)
        .into_iter()
        .enumerate()
        .find(|(_, axis)| separated_along_axis(poly1.vertices(), poly2.vertices(), axis))
}

/// Finds an axis separating two convex polygons given by their vertices.
///
/// Unlike [`polygon_polygon_find_separating_axis`], this tests one normal per edge of both
/// polygons with no shortcut for rectangles, so it works for any convex polygon whatever its
/// number of vertices.
pub fn convex_points_find_separating_axis(
    points1: &[Point<Real>],
    points2: &[Point<Real>],
) -> Option<SeparatingAxis> {
    let oneway = |owner, axes_pts: &[Point<Real>]| {
        polygon_edge_normals(axes_pts)
            .enumerate()
            .find(|(_, axis)| separated_along_axis(points1, points2, axis))
            .map(|(index, axis)| SeparatingAxis { owner, index, axis })
    };

    oneway(AxisOwner::First, points1).or_else(|| oneway(AxisOwner::Second, points2))
}
