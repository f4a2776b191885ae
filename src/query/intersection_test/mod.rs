//! Boolean overlap tests used to prune the octree.

pub use self::intersection_test_aabb_ball::intersection_test_aabb_ball;
pub use self::intersection_test_aabb_capsule::intersection_test_aabb_capsule;
pub use self::intersection_test_aabb_triangle::intersection_test_aabb_triangle;

mod intersection_test_aabb_ball;
mod intersection_test_aabb_capsule;
mod intersection_test_aabb_triangle;
