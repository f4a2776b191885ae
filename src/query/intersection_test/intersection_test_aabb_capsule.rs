use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::shape::Capsule;

/// Tests if the AABB of a capsule intersects `aabb`.
///
/// This is a conservative test: it may report an intersection for a box lying
/// close to the capsule ends without touching the capsule itself.
#[inline]
pub fn intersection_test_aabb_capsule(aabb: &Aabb, capsule: &Capsule) -> bool {
    capsule.aabb().intersects(aabb)
}
