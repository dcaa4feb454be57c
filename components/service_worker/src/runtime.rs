//! Runtime orchestration for the precache worker.
//!
//! `WorkerRuntime` wires the pieces together: the cache storage, the
//! network backend, the host container, and the event loop that delivers
//! install and fetch events to the handlers.

use crate::events::{FetchEvent, InstallEvent};
use crate::handlers::{on_fetch, on_install, PRECACHE_STORE};
use crate::host::WorkerHost;
use cache_store::CacheStorage;
use event_runtime::{EventLoop, Task};
use fetch_types::{FetchRequest, FetchResponse, NetworkBackend, WorkerError};
use std::sync::Arc;

/// Hosts the worker: drives installation, activation, and fetch dispatch.
pub struct WorkerRuntime {
    /// Cache storage shared with the handlers
    storage: Arc<CacheStorage>,
    /// Live network backend
    network: Arc<dyn NetworkBackend>,
    /// Registration and controller bookkeeping
    host: Arc<WorkerHost>,
    /// Event loop delivering lifecycle events
    event_loop: EventLoop,
}

impl WorkerRuntime {
    /// Create a runtime with fresh storage around the given network backend.
    pub fn new(network: Arc<dyn NetworkBackend>) -> Self {
        Self {
            storage: Arc::new(CacheStorage::new()),
            network,
            host: Arc::new(WorkerHost::new()),
            event_loop: EventLoop::new(),
        }
    }

    /// Use an existing cache storage.
    ///
    /// Storage outlives any one worker; handing the same storage to a new
    /// runtime models a worker restart with its caches intact.
    pub fn with_storage(mut self, storage: Arc<CacheStorage>) -> Self {
        self.storage = storage;
        self
    }

    /// Get a handle to the cache storage.
    pub fn storage(&self) -> Arc<CacheStorage> {
        Arc::clone(&self.storage)
    }

    /// Get a handle to the host container.
    pub fn host(&self) -> Arc<WorkerHost> {
        Arc::clone(&self.host)
    }

    /// Whether an activated worker is currently controlling requests.
    pub fn is_controlled(&self) -> bool {
        self.host
            .controller()
            .map(|worker| worker.state().can_intercept_fetch())
            .unwrap_or(false)
    }

    /// Register a worker version and drive it through install and activate.
    ///
    /// The install event runs first: open the precache store and populate
    /// it. Its failure aborts the turn before the activation task runs, so
    /// a failed version never starts controlling requests and a previously
    /// active version is left in place.
    pub fn register(&mut self) -> Result<(), WorkerError> {
        let registration = self.host.register();

        let storage = Arc::clone(&self.storage);
        let network = Arc::clone(&self.network);
        let installing = Arc::clone(&registration);
        self.event_loop.enqueue_task(Task::new(move || {
            let cache = storage.open(PRECACHE_STORE);
            let event = InstallEvent::new();
            event.wait_until(on_install(&cache, network.as_ref()));
            match event.settle() {
                Ok(()) => installing.complete_install(),
                Err(err) => {
                    installing.fail_install();
                    Err(err)
                }
            }
        }));

        // Activation runs on the cycle after a successful install. The
        // guard makes a stale activation task (left behind by an aborted
        // turn) a no-op instead of an error.
        let host = Arc::clone(&self.host);
        let activating = Arc::clone(&registration);
        self.event_loop.enqueue_task(Task::new(move || {
            if activating.waiting().is_some() {
                host.activate_controller()
            } else {
                Ok(())
            }
        }));

        self.event_loop.run_until_done()
    }

    /// Resolve a request, through the worker when one is in control.
    ///
    /// Before a worker controls the surface, requests go straight to the
    /// network. Once controlled, every request is dispatched as a fetch
    /// event and resolved cache-first.
    pub fn handle_request(&mut self, request: &FetchRequest) -> Result<FetchResponse, WorkerError> {
        if !self.is_controlled() {
            log::debug!("uncontrolled request: {}", request.cache_key());
            return self.network.fetch(request);
        }

        let event = Arc::new(FetchEvent::new(request.clone()));

        let dispatched = Arc::clone(&event);
        let storage = Arc::clone(&self.storage);
        let network = Arc::clone(&self.network);
        self.event_loop.enqueue_task(Task::new(move || {
            let cache = storage.open(PRECACHE_STORE);
            let response = on_fetch(&cache, network.as_ref(), &dispatched.request)?;
            dispatched.respond_with(response)
        }));
        self.event_loop.run_until_done()?;

        // The dispatch has settled and dropped its handle; ours is the last.
        let event = Arc::try_unwrap(event).map_err(|_| WorkerError::InvalidState {
            expected: "settled fetch event".to_string(),
            actual: "still dispatched".to_string(),
        })?;
        event.into_response().ok_or_else(|| WorkerError::InvalidState {
            expected: "responded fetch event".to_string(),
            actual: "no response".to_string(),
        })
    }
}

impl std::fmt::Debug for WorkerRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerRuntime")
            .field("storage", &self.storage)
            .field("controlled", &self.is_controlled())
            .finish()
    }
}
