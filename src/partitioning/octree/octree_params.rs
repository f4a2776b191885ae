use crate::math::Real;

/// Parameters controlling the subdivision of an [`Octree`](super::Octree).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct OctreeParams {
    /// A node holding more triangles than this is subdivided, unless it is at `max_depth`.
    pub max_leaf_triangles: usize,
    /// The maximum depth of a leaf. The root has depth 0.
    pub max_depth: usize,
    /// Distance by which the bounds of the triangles are enlarged on each side to give
    /// the root box.
    pub margin: Real,
}

impl OctreeParams {
    /// The number of triangles above which a node is subdivided.
    pub const DEFAULT_MAX_LEAF_TRIANGLES: usize = 8;
    /// The maximum depth of a leaf.
    pub const DEFAULT_MAX_DEPTH: usize = 16;
    /// The enlargement of the root box.
    pub const DEFAULT_MARGIN: Real = 0.01;
}

impl Default for OctreeParams {
    fn default() -> Self {
        Self {
            max_leaf_triangles: Self::DEFAULT_MAX_LEAF_TRIANGLES,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            margin: Self::DEFAULT_MARGIN,
        }
    }
}
