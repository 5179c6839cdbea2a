use crate::math::Real;

/// A closed scalar interval, typically the projection of a shape onto an axis.
///
/// The two bounds are stored as given: nothing prevents `self.0 > self.1`. Every method
/// of this type reads the bounds through [`Interval::min`] and [`Interval::max`] so the
/// order in which they were supplied never matters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Interval(pub Real, pub Real);

impl Interval {
    /// The interval containing only `value`.
    #[inline]
    pub fn splat(value: Real) -> Self {
        Interval(value, value)
    }

    /// The smallest bound of this interval.
    #[inline]
    pub fn min(&self) -> Real {
        self.0.min(self.1)
    }

    /// The largest bound of this interval.
    #[inline]
    pub fn max(&self) -> Real {
        self.0.max(self.1)
    }

    /// This interval with its bounds sorted in increasing order.
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        Interval(self.min(), self.max())
    }

    /// The width of this interval.
    #[inline]
    pub fn width(&self) -> Real {
        self.max() - self.min()
    }

    /// Grows this interval so that it contains `value`.
    ///
    /// The result is normalized.
    #[inline]
    #[must_use]
    pub fn enclose(&self, value: Real) -> Self {
        Interval(self.min().min(value), self.max().max(value))
    }

    /// Does this interval contain `value`? Bounds are inclusive.
    #[inline]
    pub fn contains(&self, value: Real) -> bool {
        self.min() <= value && value <= self.max()
    }

    /// Do these two intervals overlap?
    ///
    /// Bounds are inclusive: two intervals that only share an endpoint overlap, so shapes
    /// touching at a single point are reported as colliding. The same non-strict comparison
    /// is used on both sides, which keeps this test symmetric.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min() <= other.max() && other.min() <= self.max()
    }
}
