use super::OctreeParams;
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::query::details::intersection_test_aabb_triangle;
use crate::shape::MeshTriangle;
use crate::transformation::{SceneSnapshot, TriangleStore};
use arrayvec::ArrayVec;

/// A node of an [`Octree`].
///
/// Triangles are stored at the leaves only, as indices into [`Octree::triangles`]. A
/// triangle straddling the boundary between two cells is referenced by both.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum OctreeNode {
    /// A node holding triangles directly.
    Leaf {
        /// The cell covered by this leaf.
        aabb: Aabb,
        /// The indices of the triangles overlapping the cell.
        triangles: Vec<u32>,
    },
    /// A subdivided node.
    Internal {
        /// The cell covered by this node.
        aabb: Aabb,
        /// The non-empty octants of the cell, in octant order. Octants that received no
        /// triangle are not kept.
        children: ArrayVec<Box<OctreeNode>, 8>,
    },
}

impl OctreeNode {
    /// The cell covered by this node.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        match self {
            OctreeNode::Leaf { aabb, .. } | OctreeNode::Internal { aabb, .. } => aabb,
        }
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, OctreeNode::Leaf { .. })
    }

    /// The triangle indices of this node. Empty for internal nodes.
    #[inline]
    pub fn triangles(&self) -> &[u32] {
        match self {
            OctreeNode::Leaf { triangles, .. } => triangles,
            OctreeNode::Internal { .. } => &[],
        }
    }

    /// The children of this node. Empty for leaves.
    #[inline]
    pub fn children(&self) -> &[Box<OctreeNode>] {
        match self {
            OctreeNode::Leaf { .. } => &[],
            OctreeNode::Internal { children, .. } => children,
        }
    }

    /// The number of nodes of the subtree rooted at this node, including itself.
    pub fn num_nodes(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|child| child.num_nodes())
            .sum::<usize>()
    }

    /// The depth of the deepest leaf of this subtree, relative to this node.
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// A static octree over the world-space triangles of a scene.
///
/// The tree is built once and never modified afterward: rebuilding means building a new
/// octree. All the queries take `&self`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Octree {
    pub(super) triangles: Vec<MeshTriangle>,
    pub(super) root: OctreeNode,
    pub(super) params: OctreeParams,
}

impl Default for Octree {
    fn default() -> Self {
        Self::new()
    }
}

impl Octree {
    /// An empty octree. Every query on it reports no contact.
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
            root: OctreeNode::Leaf {
                aabb: Aabb::new_invalid(),
                triangles: Vec::new(),
            },
            params: OctreeParams::default(),
        }
    }

    /// Builds an octree over the triangles of `store` with the default parameters.
    pub fn build(store: TriangleStore) -> Self {
        Self::build_with_params(store, OctreeParams::default())
    }

    /// Extracts the triangles of `scene` and builds an octree over them.
    pub fn from_scene(scene: &SceneSnapshot) -> Self {
        Self::build(TriangleStore::from_scene(scene))
    }

    /// Builds an octree over the triangles of `store`.
    ///
    /// The root box is the AABB of every triangle vertex, enlarged by `params.margin` on
    /// each side. The root is always subdivided. Any other node is subdivided when it
    /// holds more than `params.max_leaf_triangles` triangles and is shallower than
    /// `params.max_depth`.
    pub fn build_with_params(store: TriangleStore, params: OctreeParams) -> Self {
        let bounds = store.compute_aabb();
        let triangles = store.into_triangles();

        if triangles.is_empty() {
            return Self {
                params,
                ..Self::new()
            };
        }

        let aabb = bounds.loosened(params.margin.max(0.0));
        let indices = (0..triangles.len() as u32).collect();
        let builder = OctreeBuilder {
            triangles: &triangles,
            params: &params,
        };

        let root = if params.max_depth > 0 {
            builder.split(aabb, indices, 0)
        } else {
            OctreeNode::Leaf {
                aabb,
                triangles: indices,
            }
        };

        let result = Self {
            triangles,
            root,
            params,
        };

        log::debug!(
            "Built octree: {} triangles, {} nodes, depth {}.",
            result.num_triangles(),
            result.num_nodes(),
            result.depth()
        );

        result
    }

    /// The root node of this tree.
    #[inline]
    pub fn root(&self) -> &OctreeNode {
        &self.root
    }

    /// The parameters this tree was built with.
    #[inline]
    pub fn params(&self) -> &OctreeParams {
        &self.params
    }

    /// The AABB of the root cell. Invalid if the tree is empty.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        self.root.aabb()
    }

    /// All the triangles indexed by this tree.
    #[inline]
    pub fn triangles(&self) -> &[MeshTriangle] {
        &self.triangles
    }

    /// The triangle with index `id`, as referenced by the leaves.
    #[inline]
    pub fn triangle(&self, id: u32) -> Option<&MeshTriangle> {
        self.triangles.get(id as usize)
    }

    /// The number of triangles indexed by this tree.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Does this tree index no triangle at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The total number of nodes of this tree.
    pub fn num_nodes(&self) -> usize {
        self.root.num_nodes()
    }

    /// The depth of the deepest leaf. The root has depth 0.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

struct OctreeBuilder<'a> {
    triangles: &'a [MeshTriangle],
    params: &'a OctreeParams,
}

impl OctreeBuilder<'_> {
    fn split(&self, aabb: Aabb, indices: Vec<u32>, depth: usize) -> OctreeNode {
        let mut children = ArrayVec::new();

        for octant in aabb.split_at_center() {
            let overlapping: Vec<u32> = indices
                .iter()
                .copied()
                .filter(|id| {
                    intersection_test_aabb_triangle(&octant, &self.triangles[*id as usize].triangle)
                })
                .collect();

            if overlapping.is_empty() {
                continue;
            }

            let child_depth = depth + 1;

            if overlapping.len() > self.params.max_leaf_triangles
                && child_depth < self.params.max_depth
            {
                children.push(Box::new(self.split(octant, overlapping, child_depth)));
            } else {
                children.push(Box::new(OctreeNode::Leaf {
                    aabb: octant,
                    triangles: overlapping,
                }));
            }
        }

        OctreeNode::Internal { aabb, children }
    }
}
