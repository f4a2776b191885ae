use crate::partitioning::AggregateContact;
use crate::shape::{Capsule, MeshTriangle};
use crate::transformation::SceneSnapshot;
use std::time::Duration;

/// A request sent to the thread owning an octree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Request {
    /// Checks that the worker is alive.
    Connect,
    /// Replaces the octree by one built from the given scene.
    Build(SceneSnapshot),
    /// Resolves the penetration of a capsule against the octree.
    Collider {
        /// The capsule, in world-space.
        capsule: Capsule,
        /// Additional triangles, tested before the octree ones.
        extra_triangles: Vec<MeshTriangle>,
    },
}

/// The answer to a [`Request`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Response {
    /// Answer to [`Request::Connect`].
    Connected {
        /// A human-readable acknowledgement.
        message: String,
    },
    /// Answer to [`Request::Build`].
    BuildComplete {
        /// The number of triangles of the new octree.
        triangle_count: usize,
        /// The time spent extracting triangles and building the octree.
        elapsed: Duration,
        /// A human-readable summary.
        message: String,
    },
    /// Answer to [`Request::Collider`]. `None` if the capsule touches nothing.
    ColliderResult(Option<AggregateContact>),
    /// The request could not be processed.
    Error {
        /// A human-readable reason.
        reason: String,
    },
}
