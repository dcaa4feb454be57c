//! The seam through which live fetches are performed.
//!
//! The worker never reaches for an ambient network. Whoever hosts it hands
//! in a [`NetworkBackend`], which keeps the live path swappable and lets
//! tests count exactly how many fetches a scenario performed.

use crate::{FetchRequest, FetchResponse, WorkerError};

/// Backend performing live network fetches on behalf of the worker.
pub trait NetworkBackend: Send + Sync {
    /// Perform a live fetch for the request.
    ///
    /// # Returns
    ///
    /// The response as the network produced it, or a [`WorkerError::Network`]
    /// if the request could not be resolved at all. A resolved-but-not-OK
    /// response (e.g. a 404) is returned as a response, not an error; callers
    /// decide what a non-OK status means for them.
    fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, WorkerError>;
}
