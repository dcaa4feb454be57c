//! Integration test suite for the precache worker
//!
//! This crate provides integration tests that verify the components work
//! together correctly across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use cache_store;
    pub use event_runtime;
    pub use fetch_types;
    pub use service_worker;
}
