use super::{Octree, OctreeNode};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::Real;
use crate::query::details::{intersection_test_aabb_ball, intersection_test_aabb_capsule};
use crate::query::Ray;
use crate::shape::{Capsule, Sphere};
use hashbrown::HashSet;

impl Octree {
    /// Calls `on_leaf` for every leaf whose cell, and the cells of all its ancestors,
    /// satisfy `predicate`.
    ///
    /// Leaves are visited depth-first, in octant order.
    pub fn visit_leaves<'a>(
        &'a self,
        mut predicate: impl FnMut(&Aabb) -> bool,
        mut on_leaf: impl FnMut(&'a Aabb, &'a [u32]),
    ) {
        let mut stack = vec![&self.root];

        while let Some(node) = stack.pop() {
            if !predicate(node.aabb()) {
                continue;
            }

            match node {
                OctreeNode::Leaf { aabb, triangles } => on_leaf(aabb, triangles),
                OctreeNode::Internal { children, .. } => {
                    stack.extend(children.iter().rev().map(|child| &**child))
                }
            }
        }
    }

    /// Appends to `out` the triangles of every leaf reached by `predicate`, skipping the
    /// triangles already present in `out`.
    pub fn collect_candidates(&self, predicate: impl FnMut(&Aabb) -> bool, out: &mut Vec<u32>) {
        let mut seen: HashSet<u32> = out.iter().copied().collect();

        self.visit_leaves(predicate, |_, triangles| {
            for id in triangles {
                if seen.insert(*id) {
                    out.push(*id);
                }
            }
        });
    }

    /// The triangles of the leaves intersecting `sphere`.
    pub fn sphere_triangles(&self, sphere: &Sphere) -> Vec<u32> {
        let mut result = vec![];
        self.collect_candidates(|aabb| intersection_test_aabb_ball(aabb, sphere), &mut result);
        result
    }

    /// The triangles of the leaves intersecting the AABB of `capsule`.
    pub fn capsule_triangles(&self, capsule: &Capsule) -> Vec<u32> {
        let mut result = vec![];
        self.collect_candidates(
            |aabb| intersection_test_aabb_capsule(aabb, capsule),
            &mut result,
        );
        result
    }

    /// The triangles of the leaves intersecting `query`, each paired with the cell of the
    /// first leaf it was found in.
    pub fn box_triangles(&self, query: &Aabb) -> Vec<(u32, Aabb)> {
        let mut seen = HashSet::new();
        let mut result = vec![];

        self.visit_leaves(
            |aabb| aabb.intersects(query),
            |cell, triangles| {
                for id in triangles {
                    if seen.insert(*id) {
                        result.push((*id, *cell));
                    }
                }
            },
        );

        result
    }

    /// The triangles of the leaves hit by `ray` before `max_time_of_impact`.
    pub fn ray_triangles(&self, ray: &Ray, max_time_of_impact: Real) -> Vec<u32> {
        let mut result = vec![];
        self.collect_candidates(
            |aabb| aabb.is_valid() && aabb.intersects_local_ray(ray, max_time_of_impact),
            &mut result,
        );
        result
    }
}
