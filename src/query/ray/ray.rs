//! Structures needed to cast rays.

use crate::math::{Point, Real, Vector};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending
/// infinitely in a direction.
///
/// The direction does not need to be normalized: points along the ray are
/// `origin + dir * t` for `t ≥ 0`, so a time of impact is expressed in units of
/// `dir.norm()`.
///
/// # Example
///
/// ```rust
/// use worldcol3d::math::{Point, Vector};
/// use worldcol3d::query::Ray;
///
/// let ray = Ray::new(Point::new(0.0, 10.0, 0.0), Vector::new(0.0, -2.0, 0.0));
/// assert_eq!(ray.point_at(5.0), Point::origin());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction vector of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray from an origin point and direction vector.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Computes a point along the ray at parameter `t`.
    ///
    /// Returns `origin + dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Result of a successful ray cast against a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RayIntersection {
    /// The time of impact (parameter `t`) where the ray hits the shape.
    ///
    /// The exact hit point can be computed with `ray.point_at(time_of_impact)`.
    pub time_of_impact: Real,

    /// The unit normal of the face that was hit, pointing toward the ray origin side.
    pub normal: Vector<Real>,

    /// Barycentric coordinates of the hit point on the triangle.
    pub barycentric_coordinates: [Real; 3],
}

impl RayIntersection {
    #[inline]
    /// Creates a new `RayIntersection`.
    pub fn new(
        time_of_impact: Real,
        normal: Vector<Real>,
        barycentric_coordinates: [Real; 3],
    ) -> RayIntersection {
        RayIntersection {
            time_of_impact,
            normal,
            barycentric_coordinates,
        }
    }
}
