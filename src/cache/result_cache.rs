//! Typed cache-aside store shared by all in-flight requests
//!
//! Values are stored as JSON, so reading a key back as a different type is a
//! decode failure and reported as a miss. Storage faults are logged and
//! swallowed: a broken cache degrades to "always miss", never to a failed
//! request.

use serde::{Serialize, de::DeserializeOwned};
use std::sync::Mutex;
use std::time::Duration;

use crate::cache::{CacheStats, CacheStorage, prediction_key};
use crate::error::CacheError;
use crate::models::PredictionRequest;

/// In-memory result cache with per-entry TTL.
///
/// The storage connection is wrapped in a Mutex for thread-safety; there is
/// no cross-key locking.
pub struct ResultCache {
    storage: Mutex<CacheStorage>,
    default_ttl: Duration,
}

impl ResultCache {
    /// Create an empty cache. `default_ttl` applies when `set` is given no TTL.
    pub fn new(default_ttl: Duration) -> Result<Self, CacheError> {
        Ok(Self {
            storage: Mutex::new(CacheStorage::open_in_memory()?),
            default_ttl,
        })
    }

    /// Deterministic key for a prediction request
    pub fn key(request: &PredictionRequest) -> String {
        prediction_key(request)
    }

    /// Get a cached value if present, unexpired and decodable as `T`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let data = match self.with_storage(|s| s.get(key)) {
            Ok(Some(data)) => data,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Cache read fault for {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_slice(&data) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("Cache entry {} did not decode as requested type: {}", key, e);
                None
            }
        }
    }

    /// Insert or overwrite a value; the expiry clock starts now
    pub fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Option<Duration>) {
        let ttl = ttl.unwrap_or(self.default_ttl);

        let result = serde_json::to_vec(value)
            .map_err(|e| CacheError::Serialization(e.to_string()))
            .and_then(|json| self.with_storage(|s| s.put(key, &json, ttl)));

        if let Err(e) = result {
            log::warn!("Cache write fault for {}: {}", key, e);
        }
    }

    /// Remove an entry. No-op if absent.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.with_storage(|s| s.delete_by_key(key)) {
            log::warn!("Cache remove fault for {}: {}", key, e);
        }
    }

    pub fn stats(&self) -> Option<CacheStats> {
        self.with_storage(|s| s.stats())
            .inspect_err(|e| log::warn!("Cache stats fault: {}", e))
            .ok()
    }

    fn with_storage<R>(
        &self,
        f: impl FnOnce(&CacheStorage) -> Result<R, CacheError>,
    ) -> Result<R, CacheError> {
        let guard = self.storage.lock().map_err(|_| CacheError::Poisoned)?;
        f(&guard)
    }
}
