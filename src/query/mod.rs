//! Non-persistent geometric queries between query shapes and world triangles.
//!
//! The functions of this module have the form `[operation]_[shape1]_[shape2]()` where:
//!
//! * `[operation]` can be `closest_points`, `contact` or `intersection_test`.
//! * `[shape1]` is the query shape, e.g., `ball`, `capsule` or `aabb`.
//! * `[shape2]` is the world shape, usually `triangle`.
//!
//! Ray-casting is provided by the [`Ray`] type and the `cast_ray` methods of
//! [`Aabb`](crate::bounding_volume::Aabb) and [`Triangle`](crate::shape::Triangle).
//!
//! All the functions are pure: "no contact" is represented by `None`, never by an error.

pub use self::contact::{
    contact_aabb_triangle, contact_ball_triangle, contact_capsule_triangle, Contact, MeshContact,
};
pub use self::ray::{Ray, RayIntersection};

pub mod closest_points;
pub mod contact;
pub mod intersection_test;
pub mod ray;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::closest_points::*;
    pub use super::intersection_test::*;
    pub use super::ray::local_ray_intersection_with_triangle;
}
