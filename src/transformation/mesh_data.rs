use super::MeshError;
use crate::math::{Matrix4, Point, Real};
use crate::shape::{MeshOwner, MeshTriangle};

/// A renderable mesh as seen by the collision world: vertex positions in the mesh
/// local-space, an optional index buffer, and the mesh world transform.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshData {
    /// The identifier of the mesh.
    pub id: u64,
    /// The display name of the mesh.
    pub name: String,
    /// The vertex positions, in the mesh local-space.
    pub positions: Vec<Point<Real>>,
    /// The index buffer, if the mesh is indexed. Three consecutive indices form a triangle.
    pub indices: Option<Vec<u32>>,
    /// The local-to-world transform of the mesh.
    pub transform: Matrix4<Real>,
    /// Whether the mesh takes part in collision detection.
    pub collidable: bool,
}

impl MeshData {
    /// Creates a new collidable mesh.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        positions: Vec<Point<Real>>,
        indices: Option<Vec<u32>>,
        transform: Matrix4<Real>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            positions,
            indices,
            transform,
            collidable: true,
        }
    }

    /// Sets whether this mesh takes part in collision detection.
    #[must_use]
    pub fn with_collidable(mut self, collidable: bool) -> Self {
        self.collidable = collidable;
        self
    }

    /// The number of triangles this mesh describes, without validating it.
    pub fn num_triangles(&self) -> usize {
        self.indices
            .as_ref()
            .map(|idx| idx.len())
            .unwrap_or(self.positions.len())
            / 3
    }

    /// Extracts the world-space triangles of this mesh.
    ///
    /// Every vertex is transformed by `self.transform` first. Indexed meshes form one
    /// triangle per index triple, other meshes one triangle per vertex triple. Degenerate
    /// triangles are kept. The `collidable` flag is not checked here so the triangles of a
    /// single dynamic object can be extracted on their own.
    pub fn triangles(&self) -> Result<Vec<MeshTriangle>, MeshError> {
        let owner = MeshOwner::new(self.id, self.name.clone());
        let world: Vec<_> = self
            .positions
            .iter()
            .map(|pt| self.transform.transform_point(pt))
            .collect();

        match &self.indices {
            Some(indices) => {
                if indices.len() % 3 != 0 {
                    return Err(MeshError::IndicesNotTriangulated(indices.len()));
                }

                let vertex = |index: u32| {
                    world
                        .get(index as usize)
                        .copied()
                        .ok_or(MeshError::IndexOutOfBounds {
                            index,
                            num_vertices: world.len(),
                        })
                };

                indices
                    .chunks_exact(3)
                    .map(|idx| {
                        Ok(MeshTriangle::from_vertices(
                            vertex(idx[0])?,
                            vertex(idx[1])?,
                            vertex(idx[2])?,
                            owner.clone(),
                        ))
                    })
                    .collect()
            }
            None => {
                if world.len() % 3 != 0 {
                    return Err(MeshError::NotTriangulated(world.len()));
                }

                Ok(world
                    .chunks_exact(3)
                    .map(|pts| MeshTriangle::from_vertices(pts[0], pts[1], pts[2], owner.clone()))
                    .collect())
            }
        }
    }
}
