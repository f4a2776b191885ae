//! Hosting an octree on a background thread.
//!
//! The octree never leaves the thread that built it: the scene to index and the query
//! results are the only data crossing the channel. With the `serde-serialize` feature,
//! every [`Request`] and [`Response`] can be serialized to cross a process boundary.

pub use self::error::WorkerError;
pub use self::host::OctreeHost;
pub use self::messages::{Request, Response};
pub use self::worker::OctreeWorker;

mod error;
mod host;
mod messages;
mod worker;
