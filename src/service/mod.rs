//! Prediction orchestration
//!
//! Validates requests, serves predictions and airport listings cache-aside,
//! and converts scorer failures into error envelopes. Nothing in here lets a
//! scorer or cache fault escape to the HTTP layer.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::cache::{CacheStats, CacheTtl, ResultCache, airports_key};
use crate::catalog::AirportSource;
use crate::client::DelayScorer;
use crate::models::{Airport, PredictionRequest, PredictionResult, ResponseEnvelope};

/// Retention per data class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub prediction_ttl: Duration,
    pub airport_ttl: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            prediction_ttl: CacheTtl::PREDICTION,
            airport_ttl: CacheTtl::AIRPORTS,
        }
    }
}

/// Point-in-time service counters
#[derive(Debug, Clone, Default)]
pub struct ServiceStats {
    pub prediction_hits: u64,
    pub prediction_misses: u64,
    pub validation_failures: u64,
    pub scorer_failures: u64,
    pub airport_hits: u64,
    pub airport_misses: u64,
    /// `None` if the cache could not report
    pub cache: Option<CacheStats>,
}

#[derive(Debug, Default)]
struct Counters {
    prediction_hits: AtomicU64,
    prediction_misses: AtomicU64,
    validation_failures: AtomicU64,
    scorer_failures: AtomicU64,
    airport_hits: AtomicU64,
    airport_misses: AtomicU64,
}

/// Orchestrates validation, caching and scoring for each request.
pub struct PredictionService {
    cache: Arc<ResultCache>,
    scorer: Arc<dyn DelayScorer>,
    airports: Arc<dyn AirportSource>,
    policy: CachePolicy,
    counters: Counters,
}

impl PredictionService {
    pub fn new(
        cache: Arc<ResultCache>,
        scorer: Arc<dyn DelayScorer>,
        airports: Arc<dyn AirportSource>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            cache,
            scorer,
            airports,
            policy,
            counters: Counters::default(),
        }
    }

    pub fn scorer(&self) -> &Arc<dyn DelayScorer> {
        &self.scorer
    }

    /// Predict the delay probability for a flight.
    ///
    /// Invalid input short-circuits before the cache. A cache hit never
    /// contacts the scorer. Scorer failures come back as a failed envelope
    /// carrying a user-safe message.
    pub async fn predict(&self, request: &PredictionRequest) -> ResponseEnvelope {
        if let Err(e) = request.validate() {
            self.counters
                .validation_failures
                .fetch_add(1, Ordering::Relaxed);
            log::debug!("Rejected prediction request: {}", e);
            return ResponseEnvelope::failed(e.to_string());
        }

        let key = ResultCache::key(request);

        if let Some(cached) = self.cache.get::<PredictionResult>(&key) {
            self.counters.prediction_hits.fetch_add(1, Ordering::Relaxed);
            log::debug!("Cache hit: predict_delay");
            return ResponseEnvelope::ok(cached);
        }

        self.counters
            .prediction_misses
            .fetch_add(1, Ordering::Relaxed);
        log::debug!("Cache miss: predict_delay");

        match self.scorer.predict(request).await {
            Ok(result) => {
                self.cache
                    .set(&key, &result, Some(self.policy.prediction_ttl));
                ResponseEnvelope::ok(result)
            }
            Err(e) => {
                self.counters.scorer_failures.fetch_add(1, Ordering::Relaxed);
                log::warn!(
                    "Scoring failed for {} -> {} (day {}): {}",
                    request.origin_airport_id,
                    request.dest_airport_id,
                    request.day_of_week,
                    e
                );
                ResponseEnvelope::failed(e.user_message())
            }
        }
    }

    /// Drop the cached prediction for `request`, if any
    pub fn evict_prediction(&self, request: &PredictionRequest) {
        self.cache.remove(&ResultCache::key(request));
        log::debug!(
            "Evicted cached prediction for {} -> {} (day {})",
            request.origin_airport_id,
            request.dest_airport_id,
            request.day_of_week
        );
    }

    /// All airports ordered by name, cached for the airport retention period
    pub fn list_airports(&self) -> Vec<Airport> {
        let key = airports_key();

        if let Some(cached) = self.cache.get::<Vec<Airport>>(&key) {
            self.counters.airport_hits.fetch_add(1, Ordering::Relaxed);
            log::debug!("Cache hit: list_airports");
            return cached;
        }

        self.counters.airport_misses.fetch_add(1, Ordering::Relaxed);
        let airports = self.airports.list_all();
        self.cache.set(&key, &airports, Some(self.policy.airport_ttl));
        airports
    }

    /// Single airport lookup, served straight from the catalog
    pub fn get_airport(&self, id: i32) -> Option<Airport> {
        self.airports.get_by_id(id)
    }

    pub fn stats(&self) -> ServiceStats {
        ServiceStats {
            prediction_hits: self.counters.prediction_hits.load(Ordering::Relaxed),
            prediction_misses: self.counters.prediction_misses.load(Ordering::Relaxed),
            validation_failures: self.counters.validation_failures.load(Ordering::Relaxed),
            scorer_failures: self.counters.scorer_failures.load(Ordering::Relaxed),
            airport_hits: self.counters.airport_hits.load(Ordering::Relaxed),
            airport_misses: self.counters.airport_misses.load(Ordering::Relaxed),
            cache: self.cache.stats(),
        }
    }
}
