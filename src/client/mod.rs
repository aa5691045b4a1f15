//! Remote delay scorer client

use async_trait::async_trait;

use crate::error::ScorerError;
use crate::models::{PredictionRequest, PredictionResult};

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod scorer;

#[cfg(test)]
pub use mock::MockDelayScorer;
pub use scorer::{HttpDelayScorer, ScorerState};

/// Result type for scorer operations
pub type ScorerResult<T> = std::result::Result<T, ScorerError>;

/// Delay scorer trait
///
/// A scorer starts uninitialized. `initialize` probes the remote health
/// endpoint and flips it to ready; there is no way back short of a restart.
#[async_trait]
pub trait DelayScorer: Send + Sync {
    /// Probe the remote scorer and mark this proxy ready if the model is loaded
    async fn initialize(&self) -> ScorerResult<()>;

    /// Score a single request. Fails with `NotInitialized` before `initialize` succeeds.
    async fn predict(&self, request: &PredictionRequest) -> ScorerResult<PredictionResult>;

    /// Whether `initialize` has succeeded
    async fn is_ready(&self) -> bool;
}
