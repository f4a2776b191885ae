use super::{OctreeHost, Request, Response, WorkerError};
use crate::partitioning::OctreeParams;
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use std::collections::VecDeque;
use std::thread::{self, JoinHandle};

/// An [`OctreeHost`] running on its own thread.
///
/// Requests are processed in the order they are posted, and each one runs to completion:
/// there is no cancellation. Dropping the worker closes its request channel and waits for
/// the request being processed, if any.
#[derive(Debug)]
pub struct OctreeWorker {
    requests: Option<Sender<Request>>,
    responses: Receiver<Response>,
    // Number of posted requests whose answer was not received from the channel yet.
    in_flight: usize,
    // Answers received by `request` on behalf of earlier posts.
    backlog: VecDeque<Response>,
    thread: Option<JoinHandle<()>>,
}

impl OctreeWorker {
    /// Starts a worker building octrees with the default parameters.
    pub fn spawn() -> Result<Self, WorkerError> {
        Self::spawn_with_params(OctreeParams::default())
    }

    /// Starts a worker building octrees with the given parameters.
    pub fn spawn_with_params(params: OctreeParams) -> Result<Self, WorkerError> {
        let (request_sender, request_receiver) = unbounded::<Request>();
        let (response_sender, response_receiver) = unbounded();

        let thread = thread::Builder::new()
            .name("octree-worker".to_string())
            .spawn(move || {
                let mut host = OctreeHost::with_params(params);

                for request in request_receiver {
                    if response_sender.send(host.handle(request)).is_err() {
                        break;
                    }
                }

                log::debug!("Octree worker stopped.");
            })
            .map_err(WorkerError::Spawn)?;

        Ok(Self {
            requests: Some(request_sender),
            responses: response_receiver,
            in_flight: 0,
            backlog: VecDeque::new(),
            thread: Some(thread),
        })
    }

    /// Sends a request without waiting for its answer.
    pub fn post(&mut self, request: Request) -> Result<(), WorkerError> {
        self.requests
            .as_ref()
            .ok_or(WorkerError::Disconnected)?
            .send(request)
            .map_err(|_| WorkerError::Disconnected)?;
        self.in_flight += 1;
        Ok(())
    }

    /// Waits for the answer to the oldest posted request not answered yet.
    pub fn next_response(&mut self) -> Result<Response, WorkerError> {
        if let Some(response) = self.backlog.pop_front() {
            return Ok(response);
        }

        self.receive()
    }

    /// The answer to the oldest posted request not answered yet, if it is already available.
    pub fn try_next_response(&mut self) -> Result<Option<Response>, WorkerError> {
        if let Some(response) = self.backlog.pop_front() {
            return Ok(Some(response));
        }

        match self.responses.try_recv() {
            Ok(response) => {
                self.in_flight -= 1;
                Ok(Some(response))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }

    /// Sends a request and waits for its own answer.
    ///
    /// The answers of requests posted earlier are kept, and are still returned in order
    /// by [`OctreeWorker::next_response`].
    pub fn request(&mut self, request: Request) -> Result<Response, WorkerError> {
        while self.in_flight > 0 {
            let pending = self.receive()?;
            self.backlog.push_back(pending);
        }

        self.post(request)?;
        self.receive()
    }

    fn receive(&mut self) -> Result<Response, WorkerError> {
        let response = self
            .responses
            .recv()
            .map_err(|_| WorkerError::Disconnected)?;
        self.in_flight -= 1;
        Ok(response)
    }
}

impl Drop for OctreeWorker {
    fn drop(&mut self) {
        drop(self.requests.take());

        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::warn!("The octree worker thread panicked.");
            }
        }
    }
}
