//! The loop that delivers lifecycle events to the worker.

use crate::dispatch::{MicroTask, Task};
use fetch_types::WorkerError;
use std::collections::VecDeque;

/// Delivers events to the worker, one dispatch per turn.
///
/// Each turn takes the oldest pending dispatch, runs it, then drains every
/// queued reaction before the next dispatch starts. Dispatches queued
/// first run first, which is how an installation queued ahead of a fetch
/// is guaranteed to have settled before that fetch is intercepted.
///
/// Everything is cooperative and single-threaded: a dispatch runs to
/// completion, and nothing here preempts it.
///
/// # Examples
///
/// ```
/// use event_runtime::{EventLoop, Task};
///
/// let mut event_loop = EventLoop::new();
/// event_loop.enqueue_task(Task::new(|| Ok(())));
/// event_loop.run_until_done().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct EventLoop {
    /// Pending event dispatches, oldest first
    dispatches: VecDeque<Task>,
    /// Reactions to drain after the current dispatch
    reactions: VecDeque<MicroTask>,
}

impl EventLoop {
    /// Creates an idle loop with nothing queued.
    pub fn new() -> Self {
        Self {
            dispatches: VecDeque::new(),
            reactions: VecDeque::new(),
        }
    }

    /// Queue an event dispatch behind everything already pending.
    pub fn enqueue_task(&mut self, task: Task) {
        self.dispatches.push_back(task);
    }

    /// Queue a reaction to run once the current dispatch settles.
    pub fn enqueue_microtask(&mut self, microtask: MicroTask) {
        self.reactions.push_back(microtask);
    }

    /// Number of dispatches still waiting for delivery.
    pub fn pending_tasks(&self) -> usize {
        self.dispatches.len()
    }

    /// True when nothing is queued, dispatches or reactions.
    pub fn is_idle(&self) -> bool {
        self.dispatches.is_empty() && self.reactions.is_empty()
    }

    /// Deliver everything queued, in order, until the loop is idle.
    ///
    /// # Returns
    ///
    /// `Ok(())` once idle, or the first failed delivery's error. Delivery
    /// stops there; whatever was queued behind the failure stays queued.
    /// There are no retries and no fallback at this layer.
    pub fn run_until_done(&mut self) -> Result<(), WorkerError> {
        while !self.is_idle() {
            self.process_one_cycle()?;
        }
        Ok(())
    }

    /// Drain the reaction queue completely.
    ///
    /// Reactions queued by a running reaction are drained too, before this
    /// returns.
    pub fn run_all_microtasks(&mut self) -> Result<(), WorkerError> {
        while let Some(reaction) = self.reactions.pop_front() {
            reaction.run()?;
        }
        Ok(())
    }

    /// One turn: deliver the oldest dispatch, then drain all reactions.
    pub fn process_one_cycle(&mut self) -> Result<(), WorkerError> {
        if let Some(dispatch) = self.dispatches.pop_front() {
            dispatch.run()?;
        }

        self.run_all_microtasks()
    }
}
