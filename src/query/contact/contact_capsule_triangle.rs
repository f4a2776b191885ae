use crate::math::Real;
use crate::query::closest_points::closest_points_segment_segment;
use crate::query::Contact;
use crate::shape::{Capsule, Triangle};
use na::{self, Unit};

/// Contact between a capsule and a triangle.
///
/// The triangle plane is recomputed from its vertices at each call. The capsule
/// endpoints are first tested against the slab of width `capsule.radius` lying
/// behind the plane:
///
/// - if both endpoints are past the plane by more than the radius on the same side, there
///   is no contact;
/// - otherwise, the point of the capsule axis interpolated from the signed distances of
///   its endpoints is tested against the triangle. If it lies inside, the contact normal
///   is the plane normal;
/// - otherwise, the three triangle edges are tested against the capsule axis. The first
///   edge closer than the radius (strictly) gives the contact, with a normal pointing
///   from the edge toward the axis.
///
/// Returns `None` for a degenerate triangle. The capsule radius is assumed positive.
pub fn contact_capsule_triangle(capsule: &Capsule, triangle: &Triangle) -> Option<Contact> {
    let plane = triangle.plane()?;
    let radius = capsule.radius;

    let d1 = plane.distance_to_point(&capsule.start()) - radius;
    let d2 = plane.distance_to_point(&capsule.end()) - radius;

    if (d1 > 0.0 && d2 > 0.0) || (d1 < -radius && d2 < -radius) {
        return None;
    }

    let total = d1.abs() + d2.abs();
    let t: Real = if total > 0.0 { (d1 / total).abs() } else { 0.0 };
    let axis_point = capsule.segment.lerp(t);

    if triangle.contains_point(&axis_point) {
        let depth = d1.min(d2).abs();
        return Some(Contact::new(
            plane.project_point(&axis_point),
            plane.normal,
            depth,
        ));
    }

    let sq_radius = radius * radius;

    for edge in &triangle.edges() {
        let (on_axis, on_edge) = closest_points_segment_segment(&capsule.segment, edge);
        let sq_dist = na::distance_squared(&on_axis, &on_edge);

        if sq_dist < sq_radius {
            // The axis crosses the edge: fall back to the face normal.
            let normal = Unit::try_new(on_axis - on_edge, crate::math::DEFAULT_EPSILON)
                .unwrap_or(plane.normal);
            return Some(Contact::new(on_edge, normal, radius - sq_dist.sqrt()));
        }
    }

    None
}
