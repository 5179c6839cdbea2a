use crate::math::{Point, Real, Rotation, Vector};

/// In-place transformations of points.
///
/// Angles are expressed in degrees. A positive angle rotates with
/// `x' = x·cos θ − y·sin θ` and `y' = x·sin θ + y·cos θ`, which appears clockwise on a screen
/// where the y axis points downward. Negate the angle to get the same visual direction in a
/// y-up frame.
pub trait PointOps {
    /// Moves this point by `displacement`.
    fn translate_by(&mut self, displacement: &Vector<Real>);

    /// Rotates this point by `angle_deg` degrees around `pivot`.
    fn rotate_about(&mut self, angle_deg: Real, pivot: &Point<Real>);
}

impl PointOps for Point<Real> {
    #[inline]
    fn translate_by(&mut self, displacement: &Vector<Real>) {
        *self += *displacement;
    }

    #[inline]
    fn rotate_about(&mut self, angle_deg: Real, pivot: &Point<Real>) {
        let rot = Rotation::new(angle_deg.to_radians());
        *self = *pivot + rot * (*self - *pivot);
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
///
/// Negative angles wrap upward, e.g. `-90` becomes `270`.
#[inline]
pub fn wrap_degrees(angle_deg: Real) -> Real {
    let wrapped = angle_deg.rem_euclid(360.0);

    // `rem_euclid` rounds tiny negative inputs up to exactly 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
