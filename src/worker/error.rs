/// Errors of the communication with an [`OctreeWorker`](super::OctreeWorker).
#[derive(thiserror::Error, Debug)]
pub enum WorkerError {
    /// The worker thread could not be started.
    #[error("failed to spawn the octree worker thread: {0}")]
    Spawn(#[source] std::io::Error),
    /// The worker thread is gone.
    #[error("the octree worker is disconnected.")]
    Disconnected,
}
