//! Definition of the triangle shape.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{Plane, Segment};
use crate::utils;

use na::Unit;

/// A triangle shape.
///
/// Triangles of the world are expressed in world-space: the octree has no notion of
/// per-object local space.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// A vector normal of this triangle, scaled by twice its area.
    ///
    /// The vector is collinear to `AB × AC` (where `×` denotes the cross product).
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// Returns `None` if the triangle is degenerate (its vertices are collinear), however
    /// small it is otherwise.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_normal(), 0.0)
    }

    /// The supporting plane of this triangle, recomputed from its three vertices.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn plane(&self) -> Option<Plane> {
        Plane::from_coplanar_points(&self.a, &self.b, &self.c)
    }

    /// The three edges of this triangle: [AB, BC, CA].
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// Checks if this triangle has collinear (or coincident) vertices.
    #[inline]
    pub fn is_affinely_dependent(&self) -> bool {
        self.normal().is_none()
    }

    /// Returns a copy of this triangle with all its vertices translated by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Self::new(self.a + shift, self.b + shift, self.c + shift)
    }

    /// Tests if `p`, projected on the plane of this triangle, lies inside of it.
    ///
    /// Points on the boundary are inside. Degenerate triangles contain no point.
    #[inline]
    pub fn contains_point(&self, p: &Point<Real>) -> bool {
        utils::is_point_in_triangle(p, &self.a, &self.b, &self.c)
    }
}
