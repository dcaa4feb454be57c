//! Dispatch units delivered by the event loop.
//!
//! The worker never polls for work; the host hands it one dispatch at a
//! time. An installation and an intercepted fetch each arrive as a
//! [`Task`]; the bookkeeping a settled event queues behind itself (a state
//! promotion, a controller swap) arrives as a [`MicroTask`].

use fetch_types::WorkerError;

/// One delivered event: an installation or an intercepted fetch.
///
/// Whatever the dispatch returns is the event's outcome. A failure here is
/// the event's failure, and the loop surfaces it instead of moving on.
pub struct Task {
    dispatch: Box<dyn FnOnce() -> Result<(), WorkerError> + Send>,
}

impl Task {
    /// Wrap an event dispatch in a task.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<(), WorkerError> + Send + 'static,
    {
        Self {
            dispatch: Box::new(f),
        }
    }

    /// Deliver the event. Consumes the task; an event is dispatched once.
    pub fn run(self) -> Result<(), WorkerError> {
        (self.dispatch)()
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task {{ ... }}")
    }
}

/// A reaction run after the current dispatch settles.
///
/// Reactions jump the queue: every reaction recorded while a dispatch ran
/// is delivered before the next dispatch starts, so lifecycle bookkeeping
/// lands between events rather than racing them.
pub struct MicroTask {
    reaction: Box<dyn FnOnce() -> Result<(), WorkerError> + Send>,
}

impl MicroTask {
    /// Wrap a completion reaction in a microtask.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<(), WorkerError> + Send + 'static,
    {
        Self {
            reaction: Box::new(f),
        }
    }

    /// Deliver the reaction. Consumes the microtask.
    pub fn run(self) -> Result<(), WorkerError> {
        (self.reaction)()
    }
}

impl std::fmt::Debug for MicroTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MicroTask {{ ... }}")
    }
}
