//! Fixed-size worker pool.
//!
//! A set of long-lived threads drains one shared queue of jobs. Submitting a
//! job returns a [`TaskHandle`] that the caller later joins to get the job's
//! value, or the panic that aborted it. Workers survive panicking jobs.
//!
//! ## Usage
//!
//! ```
//! use squadro_ai::pool::{join_all, WorkerPool};
//!
//! let pool = WorkerPool::new(2).unwrap();
//! let handles: Vec<_> = (0..4)
//!     .map(|n| pool.submit(move || n * n).unwrap())
//!     .collect();
//!
//! assert_eq!(join_all(handles).unwrap(), vec![0, 1, 4, 9]);
//! ```

mod handle;
mod worker;

use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use crossbeam_channel::{bounded, unbounded, Sender};
use log::debug;
use thiserror::Error;

pub use handle::{join_all, TaskError, TaskHandle};

use handle::panic_message;
use worker::{Job, Worker};

/// Failures of the pool itself, as opposed to the tasks it runs.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The job queue is closed.
    #[error("worker pool has shut down")]
    ShutDown,

    /// The OS refused to start a worker thread.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Threads to use when no explicit size is configured.
#[must_use]
pub fn host_parallelism() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Fixed set of worker threads sharing one job queue.
pub struct WorkerPool {
    queue: Option<Sender<Job>>,
    workers: Vec<Worker>,
}

impl WorkerPool {
    /// Start `size` workers. Zero means one per available CPU.
    pub fn new(size: usize) -> Result<Self, PoolError> {
        let size = if size == 0 { host_parallelism() } else { size };
        let (sender, receiver) = unbounded::<Job>();

        let mut workers = Vec::with_capacity(size);
        for index in 0..size {
            workers.push(Worker::spawn(index, receiver.clone())?);
        }
        debug!("worker pool started with {size} threads");

        Ok(Self {
            queue: Some(sender),
            workers,
        })
    }

    /// Number of worker threads.
    #[must_use]
    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Queue a task and return a handle to its eventual result.
    pub fn submit<F, T>(&self, task: F) -> Result<TaskHandle<T>, PoolError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let queue = self.queue.as_ref().ok_or(PoolError::ShutDown)?;
        let (result_tx, result_rx) = bounded(1);

        let job: Job = Box::new(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(task))
                .map_err(|payload| TaskError::Panicked(panic_message(payload.as_ref())));
            // Nobody is listening if the handle was dropped.
            let _ = result_tx.send(result);
        });

        queue.send(job).map_err(|_| PoolError::ShutDown)?;
        Ok(TaskHandle::new(result_rx))
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Closing the queue lets workers finish what is queued, then exit.
        drop(self.queue.take());
        for worker in &mut self.workers {
            worker.join();
        }
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("size", &self.size())
            .field("open", &self.queue.is_some())
            .finish()
    }
}
