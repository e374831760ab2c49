//! Store Statistics Module
//!
//! Tracks lookup hits and misses, sweep evictions, and the last sweep time.

use chrono::{DateTime, Utc};

// == Store Stats ==
/// Tracks store performance metrics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreStats {
    /// Number of lookups that found a value
    pub hits: u64,
    /// Number of lookups that found nothing
    pub misses: u64,
    /// Number of entries removed by sweeps
    pub evictions: u64,
    /// Current number of entries in the store
    pub total_entries: usize,
    /// Wall-clock time of the most recent sweep, if any has run
    pub last_sweep: Option<DateTime<Utc>>,
}

impl StoreStats {
    // == Constructor ==
    /// Creates a new StoreStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Sweep ==
    /// Records a completed sweep that removed `removed` entries.
    pub fn record_sweep(&mut self, removed: usize) {
        self.evictions += removed as u64;
        self.last_sweep = Some(Utc::now());
    }

    // == Update Entry Count ==
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
