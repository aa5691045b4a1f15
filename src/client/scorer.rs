//! HTTP proxy to the remote delay scorer

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response};
use tokio::sync::RwLock;

use super::models::{ScoreRequest, ScoreResponse, ScorerErrorBody, ScorerHealth};
use super::{DelayScorer, ScorerResult};
use crate::error::ScorerError;
use crate::models::{PredictionRequest, PredictionResult};

/// Upper bound on a single scorer round-trip
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Readiness of the scorer proxy. Transitions only from `Uninitialized` to `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerState {
    Uninitialized,
    Ready,
}

/// Remote scorer client
pub struct HttpDelayScorer {
    http: HttpClient,
    base_url: String,
    state: RwLock<ScorerState>,
}

impl HttpDelayScorer {
    /// Create a new scorer proxy for `base_url` (e.g. `http://localhost:5108`)
    pub fn new(base_url: &str, timeout: Duration) -> ScorerResult<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScorerError::ServiceUnavailable(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            state: RwLock::new(ScorerState::Uninitialized),
        })
    }

    pub async fn state(&self) -> ScorerState {
        *self.state.read().await
    }

    /// Fetch the remote health document without touching readiness
    pub async fn probe(&self) -> ScorerResult<ScorerHealth> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ScorerError::from)?;

        let response = Self::check_status(response).await?;

        response.json::<ScorerHealth>().await.map_err(|e| {
            ScorerError::ServiceUnavailable(format!("Failed to parse health response: {}", e))
        })
    }

    /// Turn a non-success status into `ServiceUnavailable`, keeping the remote message
    async fn check_status(response: Response) -> ScorerResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ScorerErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);

        Err(ScorerError::ServiceUnavailable(format!(
            "Scorer returned {}: {}",
            status, detail
        )))
    }

    /// Decode a `/predict` body.
    ///
    /// Invalid JSON means the transport delivered garbage (unavailable); valid
    /// JSON that lacks required fields is a malformed response.
    fn decode_prediction(body: &[u8]) -> ScorerResult<PredictionResult> {
        let value: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
            ScorerError::ServiceUnavailable(format!("Unparsable scorer response: {}", e))
        })?;

        let response: ScoreResponse = serde_json::from_value(value)
            .map_err(|e| ScorerError::MalformedResponse(e.to_string()))?;

        if !(0.0..=1.0).contains(&response.delay_probability) {
            return Err(ScorerError::MalformedResponse(format!(
                "DelayProbability {} outside [0, 1]",
                response.delay_probability
            )));
        }

        Ok(response.into())
    }
}

#[async_trait]
impl DelayScorer for HttpDelayScorer {
    async fn initialize(&self) -> ScorerResult<()> {
        if self.state().await == ScorerState::Ready {
            return Ok(());
        }

        let health = self.probe().await?;
        if !health.model_loaded {
            return Err(ScorerError::ServiceUnavailable(format!(
                "Scorer reports model not loaded (status: {})",
                health.status.as_deref().unwrap_or("unknown")
            )));
        }

        *self.state.write().await = ScorerState::Ready;
        log::info!("Delay scorer at {} is ready", self.base_url);
        Ok(())
    }

    async fn predict(&self, request: &PredictionRequest) -> ScorerResult<PredictionResult> {
        if self.state().await != ScorerState::Ready {
            return Err(ScorerError::NotInitialized);
        }

        let url = format!("{}/predict", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&ScoreRequest::from(request))
            .send()
            .await
            .map_err(ScorerError::from)?;

        let response = Self::check_status(response).await?;

        let body = response.bytes().await.map_err(|e| {
            ScorerError::ServiceUnavailable(format!("Failed to read scorer response: {}", e))
        })?;

        Self::decode_prediction(&body)
    }

    async fn is_ready(&self) -> bool {
        self.state().await == ScorerState::Ready
    }
}
