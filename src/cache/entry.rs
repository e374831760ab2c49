//! Store Entry Module
//!
//! Defines a single stored value together with the instant it was written.

use std::time::Duration;

use tokio::time::Instant;

// == Store Entry ==
/// A stored value and its creation time.
///
/// Creation time is read from the tokio clock so that paused-time tests
/// can drive expiry deterministically.
#[derive(Debug, Clone)]
pub struct StoreEntry<V> {
    /// The stored value
    pub value: V,
    /// When the value was written (or last overwritten)
    pub created_at: Instant,
}

impl<V> StoreEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: V) -> Self {
        Self::with_created_at(value, Instant::now())
    }

    /// Creates a new entry with an explicit creation time.
    pub fn with_created_at(value: V, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long the entry had existed at `now`.
    ///
    /// Saturates to zero when `now` precedes the creation time.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry has reached the retention interval at `now`.
    ///
    /// Boundary condition: an entry whose age equals `retention` is stale.
    pub fn is_stale(&self, now: Instant, retention: Duration) -> bool {
        self.age_at(now) >= retention
    }
}
