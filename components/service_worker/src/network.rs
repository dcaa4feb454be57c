//! In-memory network backend.

use fetch_types::{CacheKey, FetchRequest, FetchResponse, NetworkBackend, WorkerError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// An in-memory network serving a staged route table.
///
/// Routes are keyed by request descriptor; an unknown descriptor fails the
/// fetch the way an unresolvable path would. Every served request is
/// counted, so a scenario can assert exactly how many live fetches it
/// caused.
#[derive(Default)]
pub struct StaticNetwork {
    /// Staged responses by descriptor
    routes: RwLock<HashMap<CacheKey, FetchResponse>>,
    /// Served-request counts by descriptor
    served: RwLock<HashMap<CacheKey, u64>>,
    /// Total served requests
    total_served: AtomicU64,
}

impl StaticNetwork {
    /// Create a network with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage (or replace) the response served for a GET of `url`.
    pub fn route(&self, url: &str, response: FetchResponse) {
        let key = FetchRequest::get(url).cache_key();
        self.routes
            .write()
            .unwrap()
            .insert(key, response.with_url(url));
    }

    /// Remove the route for a GET of `url`, making it unresolvable.
    pub fn remove_route(&self, url: &str) -> bool {
        let key = FetchRequest::get(url).cache_key();
        self.routes.write().unwrap().remove(&key).is_some()
    }

    /// Total number of requests this network has served.
    pub fn fetch_count(&self) -> u64 {
        self.total_served.load(Ordering::SeqCst)
    }

    /// Number of GET requests served for `url`.
    pub fn served(&self, url: &str) -> u64 {
        let key = FetchRequest::get(url).cache_key();
        self.served.read().unwrap().get(&key).copied().unwrap_or(0)
    }
}

impl NetworkBackend for StaticNetwork {
    fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, WorkerError> {
        let key = request.cache_key();
        self.total_served.fetch_add(1, Ordering::SeqCst);
        *self.served.write().unwrap().entry(key.clone()).or_insert(0) += 1;

        self.routes
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| WorkerError::Network(format!("no route for {}", key)))
    }
}

impl std::fmt::Debug for StaticNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticNetwork")
            .field("route_count", &self.routes.read().unwrap().len())
            .field("fetch_count", &self.fetch_count())
            .finish()
    }
}
