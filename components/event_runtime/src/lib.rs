//! Cooperative event runtime for the precache worker.
//!
//! The worker itself is two handlers; everything that *delivers* events to
//! them lives here. The model is single-threaded and cooperative:
//! - [`EventLoop`] - delivers one dispatch per turn, then drains reactions
//! - [`Task`] - a delivered event (an installation, an intercepted fetch)
//! - [`MicroTask`] - lifecycle bookkeeping run after a dispatch settles
//!
//! A failed delivery stops the loop and surfaces its error; there are no
//! retries and no fallback handling at this layer.
//!
//! # Examples
//!
//! ```
//! use event_runtime::{EventLoop, Task};
//!
//! let mut event_loop = EventLoop::new();
//! event_loop.enqueue_task(Task::new(|| Ok(())));
//! event_loop.run_until_done().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dispatch;
pub mod event_loop;

// Re-export main types at crate root
pub use dispatch::{MicroTask, Task};
pub use event_loop::EventLoop;
