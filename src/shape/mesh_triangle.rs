//! World triangles tagged with the mesh they were extracted from.

use crate::math::{Point, Real};
use crate::shape::Triangle;
use std::sync::Arc;

/// Identity of the scene object a triangle was extracted from.
///
/// One owner is shared, through an [`Arc`], by every triangle of the same mesh.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshOwner {
    /// The identifier of the owning object.
    pub id: u64,
    /// The display name of the owning object.
    pub name: String,
}

impl MeshOwner {
    /// Creates a new shared mesh owner.
    pub fn new(id: u64, name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            id,
            name: name.into(),
        })
    }
}

/// An immutable world-space triangle with a back-reference to its owning mesh.
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshTriangle {
    /// The geometry of the triangle, in world-space.
    pub triangle: Triangle,
    /// The mesh this triangle belongs to.
    pub owner: Arc<MeshOwner>,
}

impl MeshTriangle {
    /// Creates a new mesh triangle.
    #[inline]
    pub fn new(triangle: Triangle, owner: Arc<MeshOwner>) -> Self {
        Self { triangle, owner }
    }

    /// Creates a new mesh triangle from its three world-space vertices.
    #[inline]
    pub fn from_vertices(
        a: Point<Real>,
        b: Point<Real>,
        c: Point<Real>,
        owner: Arc<MeshOwner>,
    ) -> Self {
        Self::new(Triangle::new(a, b, c), owner)
    }

    /// The display name of the owning mesh.
    #[inline]
    pub fn mesh_name(&self) -> &str {
        &self.owner.name
    }
}
