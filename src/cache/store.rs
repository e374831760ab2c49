//! Keyed Store Module
//!
//! A thread-safe map from string keys to values. One mutex guards the map and
//! its statistics for every read, write, and sweep. The same store backs both
//! the expiring response cache and the permanent caught-creature registry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::cache::{StoreEntry, StoreStats};

// == Retention ==
/// How long entries are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retention {
    /// Entries live until the process exits
    Permanent,
    /// Entries are eligible for removal once they reach this age
    Expiring(Duration),
}

#[derive(Debug)]
struct Inner<V> {
    entries: HashMap<String, StoreEntry<V>>,
    stats: StoreStats,
}

// == Keyed Store ==
/// Shared handle to a locked key/value map.
///
/// Cloning the handle is cheap; all clones see the same entries.
#[derive(Debug)]
pub struct KeyedStore<V> {
    inner: Arc<Mutex<Inner<V>>>,
    retention: Retention,
}

impl<V> Clone for KeyedStore<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            retention: self.retention,
        }
    }
}

impl<V: Clone> KeyedStore<V> {
    // == Constructors ==
    /// Creates an empty store with the given retention policy.
    pub fn new(retention: Retention) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: HashMap::new(),
                stats: StoreStats::new(),
            })),
            retention,
        }
    }

    /// Creates an empty store whose entries are never swept.
    pub fn permanent() -> Self {
        Self::new(Retention::Permanent)
    }

    /// Creates an empty store whose entries expire after `retention`.
    pub fn expiring(retention: Duration) -> Self {
        Self::new(Retention::Expiring(retention))
    }

    /// Returns the retention policy this store was built with.
    pub fn retention(&self) -> Retention {
        self.retention
    }

    // == Put ==
    /// Stores a value, overwriting any previous value for the key.
    ///
    /// The creation time is reset on overwrite.
    pub async fn put(&self, key: impl Into<String>, value: V) {
        let mut inner = self.inner.lock().await;
        inner.entries.insert(key.into(), StoreEntry::new(value));
        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<V> {
        let mut inner = self.inner.lock().await;
        let value = inner.entries.get(key).map(|entry| entry.value.clone());
        match value {
            Some(_) => inner.stats.record_hit(),
            None => inner.stats.record_miss(),
        }
        value
    }

    // == Values ==
    /// Returns copies of every stored value, in no particular order.
    pub async fn values(&self) -> Vec<V> {
        let inner = self.inner.lock().await;
        inner
            .entries
            .values()
            .map(|entry| entry.value.clone())
            .collect()
    }

    // == Evict ==
    /// Removes every entry that has reached `retention` at `now`.
    ///
    /// The scan and removal happen under one lock acquisition. Does nothing
    /// for permanent stores. Returns the number of entries removed.
    pub async fn evict_older_than(&self, now: Instant) -> usize {
        let Retention::Expiring(retention) = self.retention else {
            return 0;
        };

        let mut inner = self.inner.lock().await;
        let before = inner.entries.len();
        inner
            .entries
            .retain(|_, entry| !entry.is_stale(now, retention));
        let removed = before - inner.entries.len();

        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
        inner.stats.record_sweep(removed);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the store statistics.
    pub async fn stats(&self) -> StoreStats {
        let inner = self.inner.lock().await;
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.entries.is_empty()
    }
}
