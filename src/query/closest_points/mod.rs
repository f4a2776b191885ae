//! Closest points between segments and points.

pub use self::closest_points_point_segment::closest_points_point_segment;
pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, closest_points_segment_segment_with_locations,
};

mod closest_points_point_segment;
mod closest_points_segment_segment;
