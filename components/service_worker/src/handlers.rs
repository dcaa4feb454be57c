//! The worker's two handlers.
//!
//! Both are plain functions over an injected store and network backend; the
//! event-loop binding lives in [`crate::runtime`], not here.

use cache_store::Cache;
use fetch_types::{FetchRequest, FetchResponse, NetworkBackend, WorkerError};

/// Name of the store holding the pre-cached assets.
pub const PRECACHE_STORE: &str = "streamlit-cache";

/// Assets fetched and stored at install time: the site root, the
/// application source, and the manifest.
pub const PRECACHE_ASSETS: [&str; 3] = ["/", "/app3.py", "/static/manifest.json"];

/// Installation handler: populate the store with the fixed asset list.
///
/// Population is all-or-nothing. If any asset fails to fetch or resolves
/// non-OK, the error propagates to the install event and the installation
/// fails; there is no per-asset retry.
pub fn on_install(cache: &Cache, network: &dyn NetworkBackend) -> Result<(), WorkerError> {
    cache.add_all(network, &PRECACHE_ASSETS)?;
    log::info!("pre-cached {} assets into '{}'", PRECACHE_ASSETS.len(), cache.name());
    Ok(())
}

/// Fetch handler: serve cache-first with network fallback.
///
/// A hit returns the stored response. A miss performs exactly one live
/// fetch and returns its result unmodified; the stored set is fixed at
/// install time, so nothing is written back.
pub fn on_fetch(
    cache: &Cache,
    network: &dyn NetworkBackend,
    request: &FetchRequest,
) -> Result<FetchResponse, WorkerError> {
    if let Some(cached) = cache.match_request(request) {
        log::debug!("cache hit: {}", request.cache_key());
        return Ok(cached);
    }
    log::debug!("cache miss: {}", request.cache_key());
    network.fetch(request)
}
