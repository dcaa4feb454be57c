//! A single named cache store.

use fetch_types::{CacheKey, FetchRequest, FetchResponse, NetworkBackend, WorkerError};
use std::collections::HashMap;
use std::sync::RwLock;

/// A single named store mapping request descriptors to stored responses.
pub struct Cache {
    /// Store name
    name: String,
    /// Stored entries (descriptor -> response)
    entries: RwLock<HashMap<CacheKey, FetchResponse>>,
}

impl Cache {
    /// Create a new empty cache store.
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Get the store name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Match a request against the store.
    pub fn match_request(&self, request: &FetchRequest) -> Option<FetchResponse> {
        self.match_key(&request.cache_key())
    }

    /// Match a descriptor against the store.
    pub fn match_key(&self, key: &CacheKey) -> Option<FetchResponse> {
        self.entries.read().unwrap().get(key).cloned()
    }

    /// Match a GET of `url` against the store.
    pub fn match_url(&self, url: &str) -> Option<FetchResponse> {
        self.match_request(&FetchRequest::get(url))
    }

    /// Store a response under the request's descriptor.
    ///
    /// Partial responses (206) cannot be stored.
    pub fn put(&self, request: &FetchRequest, response: FetchResponse) -> Result<(), WorkerError> {
        if response.status == 206 {
            return Err(WorkerError::Cache(
                "Cannot cache partial responses (206)".to_string(),
            ));
        }
        self.entries
            .write()
            .unwrap()
            .insert(request.cache_key(), response);
        Ok(())
    }

    /// Fetch a URL through the network backend and store the response.
    ///
    /// A response that resolves but is not OK (e.g. a 404) fails the
    /// operation; nothing is stored.
    pub fn add(&self, network: &dyn NetworkBackend, url: &str) -> Result<(), WorkerError> {
        let request = FetchRequest::get(url);
        let response = network.fetch(&request)?;
        if !response.ok() {
            return Err(WorkerError::PrecacheFailed {
                url: url.to_string(),
                status: response.status,
            });
        }
        self.put(&request, response)
    }

    /// Fetch and store a list of URLs as one unit.
    ///
    /// All URLs are fetched before anything is stored; if any fetch fails or
    /// resolves non-OK, the whole operation fails and the store is left
    /// untouched. Re-running with the same list overwrites the same keys.
    pub fn add_all(&self, network: &dyn NetworkBackend, urls: &[&str]) -> Result<(), WorkerError> {
        let mut staged = Vec::with_capacity(urls.len());
        for url in urls {
            let request = FetchRequest::get(*url);
            let response = network.fetch(&request)?;
            if !response.ok() {
                return Err(WorkerError::PrecacheFailed {
                    url: (*url).to_string(),
                    status: response.status,
                });
            }
            if response.status == 206 {
                return Err(WorkerError::Cache(
                    "Cannot cache partial responses (206)".to_string(),
                ));
            }
            staged.push((request.cache_key(), response));
        }

        let mut entries = self.entries.write().unwrap();
        for (key, response) in staged {
            entries.insert(key, response);
        }
        log::debug!("populated cache '{}' with {} assets", self.name, urls.len());
        Ok(())
    }

    /// Delete the entry stored under the request's descriptor.
    pub fn delete(&self, request: &FetchRequest) -> bool {
        self.entries
            .write()
            .unwrap()
            .remove(&request.cache_key())
            .is_some()
    }

    /// Get all stored descriptors.
    pub fn keys(&self) -> Vec<CacheKey> {
        self.entries.read().unwrap().keys().cloned().collect()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("name", &self.name)
            .field("entry_count", &self.len())
            .finish()
    }
}
