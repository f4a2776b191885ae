pub use self::octree_params::OctreeParams;
pub use self::octree_resolve::{AggregateContact, BoxContact, RayHit};
pub use self::octree_tree::{Octree, OctreeNode};

mod octree_params;
mod octree_queries;
mod octree_resolve;
mod octree_tree;
mod octree_validation;
