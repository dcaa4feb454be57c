//! Fetch response primitives.

use std::collections::HashMap;

/// A fetch response: plain data, cheap to clone in and out of a store.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    /// Response status code
    pub status: u16,
    /// Status text
    pub status_text: String,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body
    pub body: Vec<u8>,
    /// URL the response was served for
    pub url: String,
}

impl FetchResponse {
    /// Create a new response with the given status and body.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            status_text: status_text(status).to_string(),
            headers: HashMap::new(),
            body,
            url: String::new(),
        }
    }

    /// Create a network-error response (status 0, no body).
    pub fn error() -> Self {
        Self {
            status: 0,
            status_text: String::new(),
            headers: HashMap::new(),
            body: Vec::new(),
            url: String::new(),
        }
    }

    /// Set the URL the response was served for.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set a response header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check if the response is OK (status 200-299).
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Get status text for common status codes.
fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        206 => "Partial Content",
        301 => "Moved Permanently",
        302 => "Found",
        304 => "Not Modified",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "",
    }
}
