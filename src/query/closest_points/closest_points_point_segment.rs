use crate::math::{Point, Real};
use crate::shape::{Segment, SegmentPointLocation};

/// The point of `segment` closest to `pt`, and its location on the segment.
#[inline]
pub fn closest_points_point_segment(
    pt: &Point<Real>,
    segment: &Segment,
) -> (Point<Real>, SegmentPointLocation) {
    let ab = segment.scaled_direction();
    let ap = pt - segment.a;
    let ab_ap = ab.dot(&ap);
    let sqnab = ab.norm_squared();

    let location = if ab_ap <= 0.0 {
        // Voronoï region of vertex 'a'.
        SegmentPointLocation::OnVertex(0)
    } else if ab_ap >= sqnab {
        // Voronoï region of vertex 'b'.
        SegmentPointLocation::OnVertex(1)
    } else {
        // Voronoï region of the segment interior.
        let u = ab_ap / sqnab;
        SegmentPointLocation::OnEdge([1.0 - u, u])
    };

    (segment.point_at(&location), location)
}
