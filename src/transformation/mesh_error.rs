/// Indicates that a mesh source cannot be turned into triangles.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshError {
    /// A non-indexed mesh must have a number of vertices multiple of three.
    #[error("the mesh has {0} vertices, which is not a multiple of three.")]
    NotTriangulated(usize),
    /// An index buffer must have a length multiple of three.
    #[error("the index buffer has {0} elements, which is not a multiple of three.")]
    IndicesNotTriangulated(usize),
    /// An index refers to a vertex that does not exist.
    #[error("the index {index} is out of bounds of the {num_vertices} vertices of the mesh.")]
    IndexOutOfBounds {
        /// The invalid index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
}
