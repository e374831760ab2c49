//! Expiring Cache Module
//!
//! Memoizes raw response payloads for a bounded time. Owns the background
//! sweep task and the cancellation token that stops it.

use std::time::Duration;

use bytes::Bytes;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cache::{KeyedStore, StoreStats};
use crate::tasks::{spawn_sweep_task, MIN_SWEEP_INTERVAL};

// == Expiring Cache ==
/// Response cache whose entries are evicted by a periodic sweep.
///
/// An entry stays readable for at least `retention` after it was written
/// and is removed before `2 * retention` has passed.
///
/// Must be created from within a tokio runtime. Dropping the cache cancels
/// the sweep; [`ExpiringCache::shutdown`] also waits for it to finish.
#[derive(Debug)]
pub struct ExpiringCache {
    store: KeyedStore<Bytes>,
    retention: Duration,
    token: CancellationToken,
    sweeper: Option<JoinHandle<()>>,
}

impl ExpiringCache {
    /// Creates an empty cache and starts its sweep task.
    ///
    /// A `retention` below [`MIN_SWEEP_INTERVAL`] is raised to it.
    pub fn new(retention: Duration) -> Self {
        let retention = retention.max(MIN_SWEEP_INTERVAL);
        let store = KeyedStore::expiring(retention);
        let token = CancellationToken::new();
        let sweeper = spawn_sweep_task(store.clone(), retention, token.clone());

        Self {
            store,
            retention,
            token,
            sweeper: Some(sweeper),
        }
    }

    /// Returns the configured retention interval.
    pub fn retention(&self) -> Duration {
        self.retention
    }

    /// Stores `value` under `key`, replacing any previous payload.
    pub async fn put(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        debug!(key = %key, "Cache put");
        self.store.put(key, value.into()).await;
    }

    /// Returns the payload stored under `key`, if it has not been swept.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let value = self.store.get(key).await;
        debug!(key, hit = value.is_some(), "Cache lookup");
        value
    }

    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> StoreStats {
        self.store.stats().await
    }

    /// Returns the number of live entries.
    pub async fn len(&self) -> usize {
        self.store.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.store.is_empty().await
    }

    /// Stops the sweep task and waits for it to exit.
    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(handle) = self.sweeper.take() {
            if let Err(err) = handle.await {
                warn!(error = %err, "Cache sweep task did not exit cleanly");
            }
        }
        info!("Cache shut down");
    }
}

impl Drop for ExpiringCache {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
