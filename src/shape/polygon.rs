//! Definition of the transformable polygon shape.

use crate::math::{Point, Real, Vector, MAX_POLYGON_VERTICES};
use crate::query::{self, sat::SeparatingAxis};
use crate::shape::{PolygonError, ShapeKind};
use crate::utils::{self, PointOps};
use arrayvec::ArrayVec;

/// A convex polygon (triangle or rectangle) living in world-space.
///
/// The vertices are stored directly in world-space coordinates and are moved in place by
/// [`Polygon::translate`] and [`Polygon::rotate`]. The number of vertices is fixed by the
/// polygon's [`ShapeKind`] and never changes.
///
/// The polygon also tracks the cumulative angle, in degrees, of all the rotations applied to
/// it. This angle is bookkeeping only: collision queries read the current vertices and
/// nothing else.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PolygonRepr"))]
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: ArrayVec<Point<Real>, MAX_POLYGON_VERTICES>,
    kind: ShapeKind,
    angle: Real,
}

impl Polygon {
    /// Creates a polygon of the given kind with all its vertices at the origin.
    ///
    /// Use [`Polygon::set_vertices`] to configure the actual vertices.
    pub fn new(kind: ShapeKind) -> Self {
        Polygon {
            vertices: (0..kind.num_vertices()).map(|_| Point::origin()).collect(),
            kind,
            angle: 0.0,
        }
    }

    /// Creates a polygon of the given kind with the given vertices.
    ///
    /// Returns an error if the number of vertices doesn't match `kind`.
    pub fn try_new(kind: ShapeKind, vertices: &[Point<Real>]) -> Result<Self, PolygonError> {
        let mut result = Self::new(kind);
        result.set_vertices(vertices)?;
        Ok(result)
    }

    /// Creates a triangle from its three vertices.
    #[inline]
    pub fn triangle(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Self {
        Polygon {
            vertices: ArrayVec::from_iter([a, b, c]),
            kind: ShapeKind::Triangle,
            angle: 0.0,
        }
    }

    /// Creates a rectangle from its four vertices.
    ///
    /// The vertices must follow each other along the boundary (`a → b → c → d → a`), see
    /// [`ShapeKind`]. This is not checked: a wrong ordering yields wrong separating axes.
    #[inline]
    pub fn rectangle(a: Point<Real>, b: Point<Real>, c: Point<Real>, d: Point<Real>) -> Self {
        Polygon {
            vertices: ArrayVec::from([a, b, c, d]),
            kind: ShapeKind::Rectangle,
            angle: 0.0,
        }
    }

    /// Replaces the vertices of this polygon.
    ///
    /// The number of vertices must match the polygon's kind, otherwise an error is returned and
    /// `self` is left unchanged.
    ///
    /// If this polygon was already rotated (its [`angle`](Self::angle) isn't zero), the new
    /// vertices are assumed to be expressed without that rotation: the current orientation is
    /// re-applied around their center. The angle itself is kept as-is.
    pub fn set_vertices(&mut self, vertices: &[Point<Real>]) -> Result<(), PolygonError> {
        let expected = self.kind.num_vertices();

        if vertices.len() != expected {
            log::warn!(
                "Rejected {} vertices for a {} expecting {}.",
                vertices.len(),
                self.kind,
                expected
            );
            return Err(PolygonError::VertexCountMismatch {
                kind: self.kind,
                expected,
                found: vertices.len(),
            });
        }

        self.vertices.clear();
        self.vertices.extend(vertices.iter().copied());

        if self.angle != 0.0 {
            let angle = self.angle;
            let center = self.center();
            self.rotate_vertices(angle, &center);
        }

        Ok(())
    }

    /// The kind of this polygon.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The vertices of this polygon, in winding order.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The cumulative rotation applied to this polygon, in degrees, within `[0, 360)`.
    #[inline]
    pub fn angle(&self) -> Real {
        self.angle
    }

    /// The center of this polygon, i.e., the mean of its vertices.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&self.vertices)
    }

    /// Moves every vertex of this polygon by `displacement`.
    pub fn translate(&mut self, displacement: &Vector<Real>) {
        for pt in &mut self.vertices {
            pt.translate_by(displacement);
        }
    }

    /// Rotates this polygon by `angle_deg` degrees around `pivot`.
    ///
    /// See [`PointOps`] for the rotation direction. The cumulative [`angle`](Self::angle) is
    /// incremented by `angle_deg` and wrapped into `[0, 360)`.
    pub fn rotate(&mut self, angle_deg: Real, pivot: &Point<Real>) {
        self.angle = utils::wrap_degrees(self.angle + angle_deg);
        self.rotate_vertices(angle_deg, pivot);
    }

    /// Rotates this polygon by `angle_deg` degrees around its own [`center`](Self::center).
    pub fn rotate_about_center(&mut self, angle_deg: Real) {
        let center = self.center();
        self.rotate(angle_deg, &center);
    }

    /// Tests if this polygon overlaps `other`.
    ///
    /// Polygons touching at a single point or along an edge are considered overlapping.
    #[inline]
    pub fn intersects(&self, other: &Polygon) -> bool {
        query::intersection_test(self, other)
    }

    /// The first axis separating this polygon from `other`, if any.
    ///
    /// Returns `None` if both polygons overlap.
    #[inline]
    pub fn separating_axis(&self, other: &Polygon) -> Option<SeparatingAxis> {
        query::sat::polygon_polygon_find_separating_axis(self, other)
    }

    fn rotate_vertices(&mut self, angle_deg: Real, pivot: &Point<Real>) {
        for pt in &mut self.vertices {
            pt.rotate_about(angle_deg, pivot);
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PolygonRepr {
    vertices: Vec<Point<Real>>,
    kind: ShapeKind,
    angle: Real,
}

#[cfg(feature = "serde")]
impl TryFrom<PolygonRepr> for Polygon {
    type Error = PolygonError;

    fn try_from(repr: PolygonRepr) -> Result<Self, Self::Error> {
        let mut result = Polygon::try_new(repr.kind, &repr.vertices)?;
        // The stored vertices already include the rotation.
        result.angle = utils::wrap_degrees(repr.angle);
        Ok(result)
    }
}
