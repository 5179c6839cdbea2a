use crate::query;
use crate::shape::Polygon;
use slab::Slab;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The handle of a polygon inserted into a [`PolygonSet`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolygonHandle(pub(crate) usize);

impl PolygonHandle {
    /// The raw index of this handle.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A set of polygons owned by the application.
///
/// Handles of removed polygons may be reused by subsequent insertions.
#[derive(Clone, Debug, Default)]
pub struct PolygonSet {
    polygons: Slab<Polygon>,
}

impl PolygonSet {
    /// An empty set of polygons.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a polygon to this set.
    pub fn insert(&mut self, polygon: Polygon) -> PolygonHandle {
        PolygonHandle(self.polygons.insert(polygon))
    }

    /// Removes a polygon from this set, returning it if it existed.
    pub fn remove(&mut self, handle: PolygonHandle) -> Option<Polygon> {
        self.polygons.try_remove(handle.0)
    }

    /// Is `handle` the handle of a polygon of this set?
    #[inline]
    pub fn contains(&self, handle: PolygonHandle) -> bool {
        self.polygons.contains(handle.0)
    }

    /// The polygon identified by `handle`.
    #[inline]
    pub fn get(&self, handle: PolygonHandle) -> Option<&Polygon> {
        self.polygons.get(handle.0)
    }

    /// The polygon identified by `handle`, mutably.
    #[inline]
    pub fn get_mut(&mut self, handle: PolygonHandle) -> Option<&mut Polygon> {
        self.polygons.get_mut(handle.0)
    }

    /// The number of polygons in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Is this set empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Iterates through all the polygons of this set, by increasing handle.
    pub fn iter(&self) -> impl Iterator<Item = (PolygonHandle, &Polygon)> {
        self.polygons
            .iter()
            .map(|(id, polygon)| (PolygonHandle(id), polygon))
    }

    /// Iterates mutably through all the polygons of this set, by increasing handle.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PolygonHandle, &mut Polygon)> {
        self.polygons
            .iter_mut()
            .map(|(id, polygon)| (PolygonHandle(id), polygon))
    }

    /// All the pairs of intersecting polygons of this set.
    ///
    /// Every pair of polygons is tested (there is no broad-phase). Each pair `(h1, h2)` is
    /// reported once, with `h1 < h2`, sorted by `h1` then `h2`.
    ///
    /// With the `parallel` feature enabled, the pairs are tested on rayon's thread pool.
    pub fn intersecting_pairs(&self) -> Vec<(PolygonHandle, PolygonHandle)> {
        let pairs = self.candidate_pairs();

        #[cfg(feature = "parallel")]
        let iter = pairs.into_par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = pairs.into_iter();

        iter.filter(|(h1, h2)| {
            query::intersection_test(&self.polygons[h1.0], &self.polygons[h2.0])
        })
        .collect()
    }

    /// The handles of all the polygons of this set intersecting the polygon `handle`.
    ///
    /// Returns an empty list if `handle` doesn't belong to this set.
    pub fn intersections_with(&self, handle: PolygonHandle) -> Vec<PolygonHandle> {
        let Some(polygon) = self.get(handle) else {
            return Vec::new();
        };

        self.iter()
            .filter(|(other, other_polygon)| {
                *other != handle && query::intersection_test(polygon, other_polygon)
            })
            .map(|(other, _)| other)
            .collect()
    }

    fn candidate_pairs(&self) -> Vec<(PolygonHandle, PolygonHandle)> {
        let handles: Vec<_> = self.iter().map(|(handle, _)| handle).collect();
        let mut pairs = Vec::with_capacity(handles.len() * handles.len().saturating_sub(1) / 2);

        for (i, h1) in handles.iter().enumerate() {
            for h2 in &handles[i + 1..] {
                pairs.push((*h1, *h2));
            }
        }

        pairs
    }
}
