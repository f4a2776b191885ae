use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::shape::Triangle;

/// Tests if a triangle intersects an AABB.
///
/// This is a separating-axis test over the three box axes, the triangle normal, and
/// the nine cross products between box axes and triangle edges. Touching counts as an
/// intersection. An invalid AABB intersects no triangle.
pub fn intersection_test_aabb_triangle(aabb: &Aabb, triangle: &Triangle) -> bool {
    if !aabb.is_valid() {
        return false;
    }

    let center = aabb.center();
    let half = aabb.half_extents();
    let a = triangle.a - center;
    let b = triangle.b - center;
    let c = triangle.c - center;

    // The box face normals.
    for i in 0..3 {
        let min = a[i].min(b[i]).min(c[i]);
        let max = a[i].max(b[i]).max(c[i]);

        if min > half[i] || max < -half[i] {
            return false;
        }
    }

    // The triangle normal. A degenerate triangle yields a zero axis that never separates.
    let normal = (b - a).cross(&(c - a));
    if is_separating_axis(&normal, &half, [a, b, c]) {
        return false;
    }

    // We have 3 * 3 = 9 edge axes to test.
    for edge in [b - a, c - b, a - c] {
        let axes = [
            // Vector::{x, y, z}().cross(edge)
            Vector::new(0.0, -edge.z, edge.y),
            Vector::new(edge.z, 0.0, -edge.x),
            Vector::new(-edge.y, edge.x, 0.0),
        ];

        for axis in &axes {
            if is_separating_axis(axis, &half, [a, b, c]) {
                return false;
            }
        }
    }

    true
}

fn is_separating_axis(axis: &Vector<Real>, half: &Vector<Real>, pts: [Vector<Real>; 3]) -> bool {
    let p0 = pts[0].dot(axis);
    let p1 = pts[1].dot(axis);
    let p2 = pts[2].dot(axis);
    let radius = half.dot(&axis.abs());

    let max = p0.max(p1).max(p2);
    let min = p0.min(p1).min(p2);

    (-max).max(min) > radius
}
