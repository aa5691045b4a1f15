//! Mock delay scorer for testing
//!
//! Provides an in-process implementation of `DelayScorer` so the
//! orchestrator can be tested without a running scorer.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::{DelayScorer, ScorerResult, ScorerState};
use crate::error::ScorerError;
use crate::models::{PredictionRequest, PredictionResult};

/// Mock scorer for testing.
///
/// # Example
/// ```ignore
/// let mock = MockDelayScorer::ready().with_result(sample_result()).await;
/// let result = mock.predict(&request).await?;
/// assert_eq!(mock.call_counts().await.predict, 1);
/// ```
pub struct MockDelayScorer {
    /// Result to return from predict
    result: Arc<Mutex<PredictionResult>>,
    /// Whether the health probe reports the model as loaded
    model_loaded: Arc<Mutex<bool>>,
    /// Readiness, flipped by a successful initialize
    state: Arc<Mutex<ScorerState>>,
    /// Error returned by every predict call while set
    error: Arc<Mutex<Option<ScorerError>>>,
    /// Artificial scoring latency
    latency: Arc<Mutex<Option<Duration>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured predict requests for test assertions
    captured_requests: Arc<Mutex<Vec<PredictionRequest>>>,
}

impl Default for MockDelayScorer {
    fn default() -> Self {
        Self {
            result: Arc::new(Mutex::new(sample_result())),
            model_loaded: Arc::new(Mutex::new(true)),
            state: Arc::new(Mutex::new(ScorerState::Uninitialized)),
            error: Arc::new(Mutex::new(None)),
            latency: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks scorer call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub initialize: usize,
    pub predict: usize,
}

/// Canned prediction returned unless a test configures another
pub fn sample_result() -> PredictionResult {
    PredictionResult {
        delay_probability: 0.2817,
        confidence_percent: 89.6,
        logistic_probability: 0.2712,
        historical_pair_probability: 0.3062,
        method: "Trained Model".to_string(),
        has_historical_data: Some(true),
        historical_events: Some(26),
        historical_total: Some(84),
    }
}

impl MockDelayScorer {
    /// Create an uninitialized mock whose health probe succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that has already been initialized
    pub fn ready() -> Self {
        let mut mock = Self::default();
        mock.state = Arc::new(Mutex::new(ScorerState::Ready));
        mock
    }

    /// Configure the prediction returned from predict.
    pub async fn with_result(self, result: PredictionResult) -> Self {
        *self.result.lock().await = result;
        self
    }

    /// Configure whether the health probe reports the model as loaded.
    pub async fn with_model_loaded(self, loaded: bool) -> Self {
        *self.model_loaded.lock().await = loaded;
        self
    }

    /// Configure an error returned by every predict call.
    pub async fn with_error(self, error: ScorerError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Configure a delay applied to every predict call.
    pub async fn with_latency(self, latency: Duration) -> Self {
        *self.latency.lock().await = Some(latency);
        self
    }

    /// Clear a configured error so later calls succeed.
    pub async fn clear_error(&self) {
        *self.error.lock().await = None;
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured predict requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<PredictionRequest> {
        self.captured_requests.lock().await.clone()
    }
}

#[async_trait]
impl DelayScorer for MockDelayScorer {
    async fn initialize(&self) -> ScorerResult<()> {
        self.call_count.lock().await.initialize += 1;

        if !*self.model_loaded.lock().await {
            return Err(ScorerError::ServiceUnavailable(
                "Scorer reports model not loaded".to_string(),
            ));
        }

        *self.state.lock().await = ScorerState::Ready;
        Ok(())
    }

    async fn predict(&self, request: &PredictionRequest) -> ScorerResult<PredictionResult> {
        if *self.state.lock().await != ScorerState::Ready {
            return Err(ScorerError::NotInitialized);
        }

        self.call_count.lock().await.predict += 1;
        self.captured_requests.lock().await.push(request.clone());

        let latency = *self.latency.lock().await;
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        if let Some(error) = self.error.lock().await.as_ref() {
            return Err(error.clone());
        }

        Ok(self.result.lock().await.clone())
    }

    async fn is_ready(&self) -> bool {
        *self.state.lock().await == ScorerState::Ready
    }
}
