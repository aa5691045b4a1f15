//! Wire models for the remote scorer's `/predict` and `/health` endpoints
//!
//! The scorer speaks its training-set column names (`DayOfWeek`,
//! `OriginAirportID`, `CRSDepTime`, ...), not the camelCase names of the
//! public API, so requests and responses are translated at this boundary.

use serde::{Deserialize, Serialize};

use crate::models::{PredictionRequest, PredictionResult};

/// Body of `POST {base}/predict`
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRequest<'a> {
    #[serde(rename = "Month")]
    pub month: i32,

    #[serde(rename = "DayOfWeek")]
    pub day_of_week: i32,

    #[serde(rename = "Carrier")]
    pub carrier: &'a str,

    #[serde(rename = "OriginAirportID")]
    pub origin_airport_id: i32,

    #[serde(rename = "DestAirportID")]
    pub dest_airport_id: i32,

    /// Scheduled departure, `hhmm`
    #[serde(rename = "CRSDepTime")]
    pub crs_dep_time: i32,
}

impl<'a> From<&'a PredictionRequest> for ScoreRequest<'a> {
    fn from(request: &'a PredictionRequest) -> Self {
        Self {
            month: request.month,
            day_of_week: request.day_of_week,
            carrier: &request.carrier,
            origin_airport_id: request.origin_airport_id,
            dest_airport_id: request.dest_airport_id,
            crs_dep_time: request.scheduled_departure_time,
        }
    }
}

/// Successful `/predict` response body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScoreResponse {
    pub delay_probability: f64,
    pub confidence_percent: f64,
    pub logistic_probability: f64,
    pub historical_pair_probability: f64,
    pub prediction_method: String,

    #[serde(default)]
    pub has_historical_data: Option<bool>,

    #[serde(default)]
    pub historical_events: Option<u32>,

    #[serde(default)]
    pub historical_total: Option<u32>,
}

impl From<ScoreResponse> for PredictionResult {
    fn from(response: ScoreResponse) -> Self {
        Self {
            delay_probability: response.delay_probability,
            confidence_percent: response.confidence_percent,
            logistic_probability: response.logistic_probability,
            historical_pair_probability: response.historical_pair_probability,
            method: response.prediction_method,
            has_historical_data: response.has_historical_data,
            historical_events: response.historical_events,
            historical_total: response.historical_total,
        }
    }
}

/// `GET {base}/health` response body
#[derive(Debug, Clone, Deserialize)]
pub struct ScorerHealth {
    #[serde(default)]
    pub status: Option<String>,

    /// Only an explicit `true` counts as ready
    #[serde(default)]
    pub model_loaded: bool,
}

/// Error body the scorer returns alongside 4xx/5xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ScorerErrorBody {
    pub error: String,
}
