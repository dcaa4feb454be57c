//! Named cache stores for the precache worker.
//!
//! A [`Cache`] is one named store mapping request descriptors (method + URL)
//! to stored responses. [`CacheStorage`] owns all stores by name and hands
//! out shared handles; opening an existing name returns the same store, so
//! re-running installation reuses what is already there.
//!
//! Stores never evict or invalidate on their own. Entries persist until a
//! store is deleted wholesale or a later population overwrites the same keys.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod storage;

// Re-export main types at crate root
pub use cache::Cache;
pub use storage::CacheStorage;
