use crate::math::{Point, Real, Vector, MAX_POLYGON_VERTICES};
use crate::shape::{Polygon, ShapeKind};
use arrayvec::ArrayVec;

/// The set of separating axes contributed by one polygon.
pub type PolygonNormals = ArrayVec<Vector<Real>, MAX_POLYGON_VERTICES>;

/// Computes the unit normal of the oriented edge `a → b`.
///
/// With `e = b - a`, the result is `(-e.y, e.x) / |e|`. For a polygon wound consistently,
/// every normal computed this way points to the same side of its edge.
///
/// If the edge is degenerate (`a == b`) the unnormalized perpendicular `(-e.y, e.x)` is
/// returned instead, which is the zero vector. Projections onto a zero axis are all zero, so
/// such an axis never separates anything.
#[inline]
pub fn edge_normal(a: &Point<Real>, b: &Point<Real>) -> Vector<Real> {
    let edge = *b - *a;
    let perp = Vector::new(-edge.y, edge.x);
    let length = edge.norm();

    if length != 0.0 {
        perp / length
    } else {
        log::trace!("Degenerate edge at {:?}, using a zero axis.", a);
        perp
    }
}

/// Computes one normal per edge of a convex polygon given by its vertices.
///
/// The edges are `(v0, v1), (v1, v2), …, (vn, v0)`. This works for any convex polygon, including
/// rectangles for which it yields twice the axes given by [`polygon_normals`].
pub fn polygon_edge_normals(
    vertices: &[Point<Real>],
) -> impl ExactSizeIterator<Item = Vector<Real>> + '_ {
    (0..vertices.len()).map(move |i1| {
        let i2 = (i1 + 1) % vertices.len();
        edge_normal(&vertices[i1], &vertices[i2])
    })
}

/// Computes the separating axes of a polygon.
///
/// Rectangles only need two axes since their opposite edges are parallel: the normals of the
/// edges `(v1, v2)` and `(v0, v1)` are used. This relies on the rectangle's vertices being
/// listed along its boundary. Other polygons get one normal per edge.
pub fn polygon_normals(polygon: &Polygon) -> PolygonNormals {
    let pts = polygon.vertices();

    match polygon.kind() {
        ShapeKind::Rectangle => {
            let mut normals = ArrayVec::new();
            normals.push(edge_normal(&pts[1], &pts[2]));
            normals.push(edge_normal(&pts[0], &pts[1]));
            normals
        }
        ShapeKind::Triangle => polygon_edge_normals(pts).collect(),
    }
}
