use crate::math::{Point, Real};
use crate::shape::{Segment, SegmentPointLocation};

/// Closest points between two segments.
///
/// The first returned point lies on `seg1`, the second on `seg2`.
#[inline]
pub fn closest_points_segment_segment(
    seg1: &Segment,
    seg2: &Segment,
) -> (Point<Real>, Point<Real>) {
    let (loc1, loc2) = closest_points_segment_segment_with_locations(seg1, seg2);
    (seg1.point_at(&loc1), seg2.point_at(&loc2))
}

/// Closest points between two segments, given as locations on each segment.
#[inline]
pub fn closest_points_segment_segment_with_locations(
    seg1: &Segment,
    seg2: &Segment,
) -> (SegmentPointLocation, SegmentPointLocation) {
    let (s, t) = closest_parameters(seg1, seg2);
    (location_at(s), location_at(t))
}

// Adapted from Real-Time Collision Detection by Christer Ericson.
fn closest_parameters(seg1: &Segment, seg2: &Segment) -> (Real, Real) {
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let r = seg1.a - seg2.a;

    let len1 = d1.norm_squared();
    let len2 = d2.norm_squared();
    let f = d2.dot(&r);

    if len1 == 0.0 && len2 == 0.0 {
        return (0.0, 0.0);
    }

    if len1 == 0.0 {
        return (0.0, na::clamp(f / len2, 0.0, 1.0));
    }

    let c = d1.dot(&r);

    if len2 == 0.0 {
        return (na::clamp(-c / len1, 0.0, 1.0), 0.0);
    }

    let b = d1.dot(&d2);
    let ae = len1 * len2;
    let bb = b * b;
    let denom = ae - bb;

    // Parallel segments: any point of the overlap works, start from `seg1.a`.
    // The test is relative so that tiny segments are not mistaken for parallel ones.
    let s = if denom > crate::math::DEFAULT_EPSILON * ae && !ulps_eq!(ae, bb) {
        na::clamp((b * f - c * len2) / denom, 0.0, 1.0)
    } else {
        0.0
    };

    let t = (b * s + f) / len2;

    if t < 0.0 {
        (na::clamp(-c / len1, 0.0, 1.0), 0.0)
    } else if t > 1.0 {
        (na::clamp((b - c) / len1, 0.0, 1.0), 1.0)
    } else {
        (s, t)
    }
}

fn location_at(t: Real) -> SegmentPointLocation {
    if t == 0.0 {
        SegmentPointLocation::OnVertex(0)
    } else if t == 1.0 {
        SegmentPointLocation::OnVertex(1)
    } else {
        SegmentPointLocation::OnEdge([1.0 - t, t])
    }
}
