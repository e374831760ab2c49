//! Background Tasks Module
//!
//! Contains background tasks that run alongside the interactive loop.
//!
//! # Tasks
//! - Cache Sweep: Evicts expired cache entries at the retention interval

mod sweep;

pub use sweep::{spawn_sweep_task, MIN_SWEEP_INTERVAL};
