//! Cache Module
//!
//! Provides a locked key/value store shared by the response cache and the
//! caught-creature registry, plus the expiring response cache itself.

mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use entry::StoreEntry;
pub use expiring::ExpiringCache;
pub use stats::StoreStats;
pub use store::{KeyedStore, Retention};
