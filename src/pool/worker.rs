//! Long-lived worker threads draining the shared job queue.

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;
use log::{debug, warn};

pub(super) type Job = Box<dyn FnOnce() + Send + 'static>;

pub(super) struct Worker {
    index: usize,
    thread: Option<JoinHandle<()>>,
}

impl Worker {
    pub(super) fn spawn(index: usize, queue: Receiver<Job>) -> io::Result<Self> {
        let thread = thread::Builder::new()
            .name(format!("squadro-worker-{index}"))
            .spawn(move || run(index, &queue))?;

        Ok(Self {
            index,
            thread: Some(thread),
        })
    }

    /// Wait for the thread to exit. The queue must already be closed.
    pub(super) fn join(&mut self) {
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("worker {} exited abnormally", self.index);
            }
        }
    }
}

fn run(index: usize, queue: &Receiver<Job>) {
    debug!("worker {index} started");
    // Ends once every sender is gone and the queue is drained.
    for job in queue.iter() {
        job();
    }
    debug!("worker {index} stopped");
}
