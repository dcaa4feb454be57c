//! Offline precache worker.
//!
//! A worker that pre-caches a fixed set of assets at install time and then
//! serves intercepted requests cache-first with network fallback:
//! - [`on_install`] - open the named store and populate it with the assets
//! - [`on_fetch`] - serve a stored response on a hit, fetch live on a miss
//!
//! Around those two handlers sits the host machinery: the worker lifecycle
//! ([`WorkerState`], [`ServiceWorker`], [`Registration`], [`WorkerHost`]),
//! the events delivered to the handlers ([`InstallEvent`], [`FetchEvent`]),
//! and [`WorkerRuntime`], which binds everything to the event loop.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod events;
pub mod handlers;
pub mod host;
pub mod network;
pub mod runtime;
pub mod state;
pub mod worker;

// Re-export main types at crate root
pub use events::{FetchEvent, InstallEvent};
pub use handlers::{on_fetch, on_install, PRECACHE_ASSETS, PRECACHE_STORE};
pub use host::WorkerHost;
pub use network::StaticNetwork;
pub use runtime::WorkerRuntime;
pub use state::WorkerState;
pub use worker::{Registration, ServiceWorker};
