//! Result handles for submitted tasks.

use std::any::Any;
use crossbeam_channel::Receiver;
use thiserror::Error;

/// Why a task produced no value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The task panicked; carries the panic message when it was a string.
    #[error("task panicked: {0}")]
    Panicked(String),

    /// The task was dropped before it could run.
    #[error("task was canceled before completion")]
    Canceled,
}

/// Awaitable result of one submitted task.
///
/// Dropping a handle does not cancel the task; its result is discarded.
#[derive(Debug)]
pub struct TaskHandle<T> {
    result: Receiver<Result<T, TaskError>>,
}

impl<T> TaskHandle<T> {
    pub(super) fn new(result: Receiver<Result<T, TaskError>>) -> Self {
        Self { result }
    }

    /// Block until the task finishes.
    pub fn join(self) -> Result<T, TaskError> {
        self.result.recv().unwrap_or(Err(TaskError::Canceled))
    }
}

/// Join every handle, in order, then report the first failure if any.
///
/// All handles are waited on even after a failure, so no task of the batch
/// is still running when this returns.
pub fn join_all<T>(handles: Vec<TaskHandle<T>>) -> Result<Vec<T>, TaskError> {
    let mut values = Vec::with_capacity(handles.len());
    let mut first_error = None;

    for handle in handles {
        match handle.join() {
            Ok(value) => values.push(value),
            Err(err) => {
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(values),
    }
}

pub(super) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
