//! Definition of the plane shape.

use crate::math::{Point, Real, UnitVector};
use na::Unit;

/// An infinite plane, with the points `p` satisfying `normal · p + constant = 0`.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Plane {
    /// The unit normal of the plane. Signed distances are positive on its side.
    pub normal: UnitVector<Real>,
    /// The signed distance from the origin to the plane, along `-normal`.
    pub constant: Real,
}

impl Plane {
    /// Builds a new plane from its unit normal and a point it passes through.
    #[inline]
    pub fn from_normal_and_point(normal: UnitVector<Real>, point: &Point<Real>) -> Plane {
        let constant = -point.coords.dot(&normal);
        Plane { normal, constant }
    }

    /// Builds the plane passing through the three points `a`, `b`, `c`.
    ///
    /// The normal is oriented along `(c - b) × (a - b)`, i.e., counter-clockwise
    /// triangles face toward it. Returns `None` if the points are collinear.
    #[inline]
    pub fn from_coplanar_points(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Option<Plane> {
        let normal = (c - b).cross(&(a - b));
        Unit::try_new(normal, 0.0).map(|normal| Self::from_normal_and_point(normal, a))
    }

    /// The signed distance from `point` to this plane.
    #[inline]
    pub fn distance_to_point(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) + self.constant
    }

    /// Projects `point` orthogonally on this plane.
    #[inline]
    pub fn project_point(&self, point: &Point<Real>) -> Point<Real> {
        point - *self.normal * self.distance_to_point(point)
    }
}
