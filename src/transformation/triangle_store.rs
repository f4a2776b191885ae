use super::{MeshData, MeshError};
use crate::bounding_volume::Aabb;
use crate::shape::MeshTriangle;

/// A snapshot of the scene meshes, as sent to the octree builder.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SceneSnapshot {
    /// The meshes of the scene.
    pub meshes: Vec<MeshData>,
}

impl SceneSnapshot {
    /// Creates a new snapshot from a set of meshes.
    pub fn new(meshes: Vec<MeshData>) -> Self {
        Self { meshes }
    }

    /// Adds a mesh to this snapshot.
    pub fn push(&mut self, mesh: MeshData) {
        self.meshes.push(mesh);
    }
}

/// A flat set of world-space triangles extracted from a scene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleStore {
    triangles: Vec<MeshTriangle>,
}

impl TriangleStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store containing exactly the given triangles.
    pub fn from_triangles(triangles: Vec<MeshTriangle>) -> Self {
        Self { triangles }
    }

    /// Extracts the triangles of every collidable mesh of `scene`.
    ///
    /// Malformed meshes are skipped with a warning and contribute no triangle.
    pub fn from_scene(scene: &SceneSnapshot) -> Self {
        let mut result = Self::new();

        for mesh in &scene.meshes {
            if !mesh.collidable {
                log::debug!("Ignoring non-collidable mesh {:?}.", mesh.name);
                continue;
            }

            if let Err(err) = result.push_mesh(mesh) {
                log::warn!("Skipping mesh {:?} (id {}): {}", mesh.name, mesh.id, err);
            }
        }

        result
    }

    /// Appends the triangles of `mesh`, whether it is collidable or not.
    ///
    /// Nothing is appended if the mesh is malformed.
    pub fn push_mesh(&mut self, mesh: &MeshData) -> Result<(), MeshError> {
        let triangles = mesh.triangles()?;
        self.triangles.extend(triangles);
        Ok(())
    }

    /// Appends a single triangle.
    pub fn push(&mut self, triangle: MeshTriangle) {
        self.triangles.push(triangle);
    }

    /// The number of triangles of this store.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Is this store empty?
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The triangles of this store.
    pub fn triangles(&self) -> &[MeshTriangle] {
        &self.triangles
    }

    /// The tightest AABB enclosing every vertex of this store.
    ///
    /// Invalid if the store is empty.
    pub fn compute_aabb(&self) -> Aabb {
        Aabb::from_points(
            self.triangles
                .iter()
                .flat_map(|tri| tri.triangle.vertices()),
        )
    }

    /// Consumes this store, returning its triangles.
    pub fn into_triangles(self) -> Vec<MeshTriangle> {
        self.triangles
    }
}
