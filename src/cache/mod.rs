//! In-process result cache
//!
//! Predictions and airport listings are cached in an in-memory SQLite
//! database so repeated requests skip the remote scorer. Entries expire
//! passively: a stale row is treated as a miss the next time it is read.

pub mod key;
pub mod result_cache;
pub mod storage;

use std::time::Duration;

/// Cache TTL policy per data class
pub struct CacheTtl;

impl CacheTtl {
    // Model output only changes when the scorer is redeployed
    pub const PREDICTION: Duration = Duration::from_secs(60 * 60); // 1 hr

    // Reference data, loaded once per process
    pub const AIRPORTS: Duration = Duration::from_secs(24 * 60 * 60); // 24 hr
}

// Re-export main types
pub use key::{airports_key, prediction_key};
pub use result_cache::ResultCache;
pub use storage::{CacheStats, CacheStorage};
