use crate::math::{Point, Real, Vector};

/// A sphere, expressed in world-space by its center and its radius.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Sphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

impl Sphere {
    /// Creates a sphere with the given center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Sphere {
        Sphere { center, radius }
    }

    /// Moves this sphere by `shift`.
    #[inline]
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.center += shift;
    }
}
