use super::{Request, Response};
use crate::partitioning::{Octree, OctreeParams};
use crate::transformation::TriangleStore;
use std::time::Instant;

/// Owner of an octree, processing requests one at a time.
///
/// This is the synchronous core of [`OctreeWorker`](super::OctreeWorker). It can be
/// driven directly when no background thread is needed.
#[derive(Debug, Default)]
pub struct OctreeHost {
    octree: Option<Octree>,
    params: OctreeParams,
}

impl OctreeHost {
    /// A host without octree, building with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// A host without octree, building with the given parameters.
    pub fn with_params(params: OctreeParams) -> Self {
        Self {
            octree: None,
            params,
        }
    }

    /// The octree built by the last [`Request::Build`], if any.
    pub fn octree(&self) -> Option<&Octree> {
        self.octree.as_ref()
    }

    /// Processes `request` and returns its answer.
    pub fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::Connect => Response::Connected {
                message: "octree worker ready".to_string(),
            },
            Request::Build(scene) => {
                let start = Instant::now();
                let store = TriangleStore::from_scene(&scene);
                let octree = Octree::build_with_params(store, self.params);
                let elapsed = start.elapsed();
                let triangle_count = octree.num_triangles();
                let message = format!(
                    "octree built from {} meshes: {} triangles, {} nodes, in {:.3} ms",
                    scene.meshes.len(),
                    triangle_count,
                    octree.num_nodes(),
                    elapsed.as_secs_f64() * 1000.0
                );

                log::info!("{}", message);
                self.octree = Some(octree);

                Response::BuildComplete {
                    triangle_count,
                    elapsed,
                    message,
                }
            }
            Request::Collider {
                capsule,
                extra_triangles,
            } => match &self.octree {
                Some(octree) => {
                    Response::ColliderResult(octree.capsule_intersect(&capsule, &extra_triangles))
                }
                None => Response::Error {
                    reason: "no octree has been built yet".to_string(),
                },
            },
        }
    }
}
