use crate::bounding_volume::Aabb;
use crate::shape::Sphere;

/// Tests if a sphere intersects an AABB.
#[inline]
pub fn intersection_test_aabb_ball(aabb: &Aabb, sphere: &Sphere) -> bool {
    aabb.is_valid()
        && aabb.distance_squared_to_local_point(&sphere.center) <= sphere.radius * sphere.radius
}
