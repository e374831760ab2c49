//! Cache Sweep Task
//!
//! Background task that periodically evicts cache entries that have reached
//! the retention interval.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::KeyedStore;

/// Shortest interval the sweep will tick at; smaller values are raised to it.
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

/// Spawns a background task that sweeps `store` every `interval`.
///
/// The first sweep runs one `interval` after the call, then once per
/// `interval`. Each sweep removes every entry aged at least `interval`, so a
/// value stays readable for at least `interval` and is gone before
/// `2 * interval` has passed.
///
/// An `interval` below [`MIN_SWEEP_INTERVAL`] is raised to it.
///
/// The task exits as soon as `token` is cancelled, at the latest one tick
/// after cancellation.
///
/// # Example
/// ```ignore
/// let store = KeyedStore::expiring(Duration::from_secs(5));
/// let token = CancellationToken::new();
/// let handle = spawn_sweep_task(store.clone(), Duration::from_secs(5), token.clone());
/// // Later, during shutdown:
/// token.cancel();
/// handle.await?;
/// ```
pub fn spawn_sweep_task<V>(
    store: KeyedStore<V>,
    interval: Duration,
    token: CancellationToken,
) -> JoinHandle<()>
where
    V: Clone + Send + 'static,
{
    let interval = interval.max(MIN_SWEEP_INTERVAL);
    let mut ticker = time::interval_at(Instant::now() + interval, interval);

    tokio::spawn(async move {
        info!(
            interval_ms = interval.as_millis() as u64,
            "Starting cache sweep task"
        );

        loop {
            let tick = tokio::select! {
                _ = token.cancelled() => break,
                tick = ticker.tick() => tick,
            };

            let removed = store.evict_older_than(tick).await;

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }

        info!("Cache sweep task stopped");
    })
}
