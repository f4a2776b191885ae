//! Shapes supported by worldcol3d.

pub use self::ball::Sphere;
pub use self::capsule::Capsule;
pub use self::mesh_triangle::{MeshOwner, MeshTriangle};
pub use self::plane::Plane;
pub use self::segment::{Segment, SegmentPointLocation};
pub use self::triangle::Triangle;

mod ball;
mod capsule;
mod mesh_triangle;
mod plane;
mod segment;
mod triangle;
