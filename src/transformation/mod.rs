//! Extraction of world-space triangles from scene meshes.

pub use self::mesh_data::MeshData;
pub use self::mesh_error::MeshError;
pub use self::triangle_store::{SceneSnapshot, TriangleStore};

mod mesh_data;
mod mesh_error;
mod triangle_store;
