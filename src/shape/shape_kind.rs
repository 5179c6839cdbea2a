use core::fmt;

/// The kind of a [`Polygon`](crate::shape::Polygon).
///
/// The kind fixes the number of vertices of the polygon and selects how its edge
/// normals are computed.
///
/// Rectangle vertices must be given in the winding order `A, B, C, D`:
///
/// ```text
///    A              B
///    +--------------+
///    |              |
///    |              |
///    +--------------+
///    D              C
/// ```
///
/// so that `A → B` and `B → C` are two adjacent edges. Only these two edges are used to
/// build the separating axes of a rectangle.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A polygon with three vertices.
    Triangle,
    /// A polygon with four vertices, opposite edges being parallel.
    Rectangle,
}

impl ShapeKind {
    /// The number of vertices of a polygon of this kind.
    #[inline]
    pub fn num_vertices(self) -> usize {
        match self {
            ShapeKind::Triangle => 3,
            ShapeKind::Rectangle => 4,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Triangle => f.pad("triangle"),
            ShapeKind::Rectangle => f.pad("rectangle"),
        }
    }
}
