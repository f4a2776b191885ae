//! Spatial partitioning of static triangle worlds.

pub use self::octree::{AggregateContact, BoxContact, Octree, OctreeNode, OctreeParams, RayHit};

mod octree;
