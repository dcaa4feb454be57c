//! Fetch request primitives.
//!
//! A request is described to the cache layer by its descriptor: the method
//! paired with the URL. Headers and body ride along for the network layer
//! but do not participate in cache keying.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP methods understood by the fetch layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
    /// PATCH
    Patch,
}

impl std::fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestMethod::Get => write!(f, "GET"),
            RequestMethod::Post => write!(f, "POST"),
            RequestMethod::Put => write!(f, "PUT"),
            RequestMethod::Delete => write!(f, "DELETE"),
            RequestMethod::Head => write!(f, "HEAD"),
            RequestMethod::Options => write!(f, "OPTIONS"),
            RequestMethod::Patch => write!(f, "PATCH"),
        }
    }
}

/// The descriptor under which a response is stored: method plus URL.
///
/// Two requests with the same method and URL map to the same cache entry
/// regardless of headers or body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Request method
    pub method: RequestMethod,
    /// Request URL
    pub url: String,
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// A fetch request as seen by the worker.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Request URL
    pub url: String,
    /// HTTP method
    pub method: RequestMethod,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body
    pub body: Option<Vec<u8>>,
}

impl FetchRequest {
    /// Create a new fetch request.
    pub fn new(url: impl Into<String>, method: RequestMethod) -> Self {
        Self {
            url: url.into(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Create a GET request for a URL.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(url, RequestMethod::Get)
    }

    /// The descriptor this request is cached under.
    pub fn cache_key(&self) -> CacheKey {
        CacheKey {
            method: self.method,
            url: self.url.clone(),
        }
    }
}
