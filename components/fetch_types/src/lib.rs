//! Shared fetch primitives for the precache worker.
//!
//! This crate provides the types every other component speaks:
//! - [`FetchRequest`] and [`FetchResponse`] - plain-data request/response pairs
//! - [`CacheKey`] - the request descriptor (method + URL) used to key stores
//! - [`WorkerError`] - the error type shared across the workspace
//! - [`NetworkBackend`] - the seam through which live fetches are performed
//!
//! # Examples
//!
//! ```
//! use fetch_types::{FetchRequest, RequestMethod};
//!
//! let request = FetchRequest::get("/static/manifest.json");
//! assert_eq!(request.method, RequestMethod::Get);
//! assert_eq!(request.cache_key().url, "/static/manifest.json");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod network;
pub mod request;
pub mod response;

// Re-export main types at crate root
pub use error::WorkerError;
pub use network::NetworkBackend;
pub use request::{CacheKey, FetchRequest, RequestMethod};
pub use response::FetchResponse;
