use crate::math::{Real, Vector};
use crate::query::sat::{self, SeparatingAxis};
use crate::shape::Polygon;

/// Intersection test between two polygons.
pub fn intersection_test_polygon_polygon(poly1: &Polygon, poly2: &Polygon) -> bool {
    sat::polygon_polygon_find_separating_axis(poly1, poly2).is_none()
}

/// The last separating axis found between a pair of polygons.
///
/// Shapes tend to move little from one frame to the next, so an axis that separated them at
/// the previous frame is likely to still separate them. Testing it first lets the query exit
/// after a single projection in the common disjoint case.
///
/// One cache must be used per pair of polygons.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SeparatingAxisCache {
    axis: Option<Vector<Real>>,
}

impl SeparatingAxisCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached separating axis, if any.
    #[inline]
    pub fn axis(&self) -> Option<&Vector<Real>> {
        self.axis.as_ref()
    }

    /// Forgets the cached axis.
    #[inline]
    pub fn clear(&mut self) {
        self.axis = None;
    }

    fn update(&mut self, separation: Option<SeparatingAxis>) {
        self.axis = separation.map(|sep| sep.axis);
    }
}

/// Intersection test between two polygons, reusing the separating axis of a previous call.
///
/// The cached axis is tested first. If it doesn't separate the polygons anymore, the complete
/// test of [`intersection_test_polygon_polygon`] is run and the cache is updated with its
/// result. The returned value is always the same as the one of the uncached test.
pub fn intersection_test_polygon_polygon_with_cache(
    poly1: &Polygon,
    poly2: &Polygon,
    cache: &mut SeparatingAxisCache,
) -> bool {
    if let Some(axis) = cache.axis() {
        if sat::separated_along_axis(poly1.vertices(), poly2.vertices(), axis) {
            return false;
        }
    }

    let separation = sat::polygon_polygon_find_separating_axis(poly1, poly2);
    cache.update(separation);
    separation.is_none()
}
