//! Narrow-phase contacts between query shapes and triangles.

pub use self::contact::{Contact, MeshContact};
pub use self::contact_aabb_triangle::contact_aabb_triangle;
pub use self::contact_ball_triangle::contact_ball_triangle;
pub use self::contact_capsule_triangle::contact_capsule_triangle;

mod contact;
mod contact_aabb_triangle;
mod contact_ball_triangle;
mod contact_capsule_triangle;
