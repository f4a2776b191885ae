use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::shape::Capsule;

impl Capsule {
    /// The axis-aligned bounding box of this capsule.
    ///
    /// This is the box of its core segment enlarged by its radius on every side.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.segment.aabb().loosened(self.radius.max(0.0))
    }
}
