use super::{Octree, OctreeNode};
use crate::bounding_volume::BoundingVolume;
use crate::math::DEFAULT_EPSILON;
use crate::query::details::intersection_test_aabb_triangle;
use hashbrown::HashSet;

impl Octree {
    /// Panics if the tree isn’t well-formed.
    ///
    /// The tree is well-formed if:
    /// - internal nodes have between one and eight children, each covering an octant
    ///   of its parent cell;
    /// - leaves are non-empty (unless the root is the only node) and every triangle
    ///   they reference overlaps their cell;
    /// - no leaf is deeper than the maximum depth;
    /// - every triangle is referenced by at least one leaf.
    pub fn assert_well_formed(&self) {
        if self.triangles.is_empty() {
            assert!(self.root.is_leaf());
            assert!(self.root.triangles().is_empty());
            return;
        }

        let mut referenced = HashSet::new();
        self.assert_well_formed_recurse(&self.root, 0, &mut referenced);
        assert_eq!(referenced.len(), self.triangles.len());
    }

    fn assert_well_formed_recurse(
        &self,
        node: &OctreeNode,
        depth: usize,
        referenced: &mut HashSet<u32>,
    ) {
        assert!(depth <= self.params.max_depth);

        match node {
            OctreeNode::Leaf { aabb, triangles } => {
                assert!(!triangles.is_empty());

                for id in triangles {
                    let triangle = &self.triangles[*id as usize].triangle;
                    assert!(intersection_test_aabb_triangle(aabb, triangle));
                    let _ = referenced.insert(*id);
                }
            }
            OctreeNode::Internal { aabb, children } => {
                assert!(!children.is_empty());

                // Octant corners are subject to rounding errors.
                let magnitude = aabb.mins.coords.abs().max().max(aabb.maxs.coords.abs().max());
                let tolerance = magnitude * DEFAULT_EPSILON * 4.0;

                for child in children {
                    assert!(aabb.loosened(tolerance).contains(child.aabb()));
                    self.assert_well_formed_recurse(child, depth + 1, referenced);
                }
            }
        }
    }
}
