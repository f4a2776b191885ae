use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Real, UnitVector};
use crate::query::intersection_test::intersection_test_aabb_triangle;
use crate::shape::Triangle;

/// Approximate contact between an AABB and a triangle located in the octree cell `cell`.
///
/// Reports the triangle face normal when the triangle intersects `aabb` and `cell`
/// intersects `aabb` as well. No penetration depth is computed. Returns `None` for a
/// degenerate triangle.
pub fn contact_aabb_triangle(
    aabb: &Aabb,
    triangle: &Triangle,
    cell: &Aabb,
) -> Option<UnitVector<Real>> {
    if intersection_test_aabb_triangle(aabb, triangle) && cell.intersects(aabb) {
        triangle.normal()
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::contact_aabb_triangle;
    use crate::bounding_volume::Aabb;
    use crate::math::{Point, Vector};
    use crate::shape::Triangle;

    #[test]
    fn box_crossing_a_triangle() {
        let tri = Triangle::new(
            Point::new(-10.0, 0.0, -10.0),
            Point::new(-10.0, 0.0, 10.0),
            Point::new(10.0, 0.0, 10.0),
        );
        let aabb = Aabb::from_half_extents(Point::new(-1.0, 0.2, 1.0), Vector::repeat(0.5));
        let cell = Aabb::new(Point::new(-10.0, -1.0, 0.0), Point::new(0.0, 1.0, 10.0));
        let normal = contact_aabb_triangle(&aabb, &tri, &cell).unwrap();
        assert_relative_eq!(*normal, Vector::y());

        let elsewhere = Aabb::new(Point::new(5.0, -1.0, 5.0), Point::new(10.0, 1.0, 10.0));
        assert!(contact_aabb_triangle(&aabb, &tri, &elsewhere).is_none());

        let above = aabb.translated(&Vector::new(0.0, 1.0, 0.0));
        assert!(contact_aabb_triangle(&above, &tri, &cell).is_none());
    }
}
