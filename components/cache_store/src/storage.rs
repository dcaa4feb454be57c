//! Cache storage: all named stores.

use crate::cache::Cache;
use fetch_types::{FetchRequest, FetchResponse};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Owns every named cache store and hands out shared handles.
#[derive(Default)]
pub struct CacheStorage {
    /// All stores by name
    caches: RwLock<HashMap<String, Arc<Cache>>>,
}

impl CacheStorage {
    /// Create an empty cache storage.
    pub fn new() -> Self {
        Self {
            caches: RwLock::new(HashMap::new()),
        }
    }

    /// Open a store by name, creating it if absent.
    ///
    /// Opening an existing name returns a handle to the same store, entries
    /// included. This is what makes re-running installation idempotent.
    pub fn open(&self, name: &str) -> Arc<Cache> {
        let mut caches = self.caches.write().unwrap();
        if let Some(cache) = caches.get(name) {
            Arc::clone(cache)
        } else {
            log::debug!("creating cache store '{}'", name);
            let cache = Arc::new(Cache::new(name.to_string()));
            caches.insert(name.to_string(), Arc::clone(&cache));
            cache
        }
    }

    /// Check if a store exists.
    pub fn has(&self, name: &str) -> bool {
        self.caches.read().unwrap().contains_key(name)
    }

    /// Delete a store wholesale.
    pub fn delete(&self, name: &str) -> bool {
        self.caches.write().unwrap().remove(name).is_some()
    }

    /// Get all store names.
    pub fn keys(&self) -> Vec<String> {
        self.caches.read().unwrap().keys().cloned().collect()
    }

    /// Match a request against every store.
    pub fn match_request(&self, request: &FetchRequest) -> Option<FetchResponse> {
        for cache in self.caches.read().unwrap().values() {
            if let Some(response) = cache.match_request(request) {
                return Some(response);
            }
        }
        None
    }
}

impl std::fmt::Debug for CacheStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStorage")
            .field("cache_count", &self.caches.read().unwrap().len())
            .finish()
    }
}
