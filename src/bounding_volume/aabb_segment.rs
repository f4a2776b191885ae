use crate::bounding_volume::Aabb;
use crate::shape::Segment;

impl Segment {
    /// Computes the [`Aabb`] of this segment.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.a.inf(&self.b), self.a.sup(&self.b))
    }
}
