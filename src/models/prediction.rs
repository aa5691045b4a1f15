//! Prediction request/response models

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

fn default_month() -> i32 {
    1
}

fn default_carrier() -> String {
    "AA".to_string()
}

fn default_departure_time() -> i32 {
    800
}

/// Inbound prediction request.
///
/// Every field participates in the prediction cache key, so two requests with
/// identical values always share a cached result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    /// ISO day of week, 1 (Monday) through 7 (Sunday)
    pub day_of_week: i32,

    pub origin_airport_id: i32,

    pub dest_airport_id: i32,

    #[serde(default = "default_month")]
    pub month: i32,

    /// Reporting carrier code
    #[serde(default = "default_carrier")]
    pub carrier: String,

    /// Scheduled departure in local `hhmm` form (e.g. 800, 1745)
    #[serde(default = "default_departure_time")]
    pub scheduled_departure_time: i32,
}

impl PredictionRequest {
    /// Build a request with the documented defaults for the optional fields.
    #[cfg(test)]
    pub fn new(day_of_week: i32, origin_airport_id: i32, dest_airport_id: i32) -> Self {
        Self {
            day_of_week,
            origin_airport_id,
            dest_airport_id,
            month: default_month(),
            carrier: default_carrier(),
            scheduled_departure_time: default_departure_time(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=7).contains(&self.day_of_week) {
            return Err(ValidationError::DayOfWeekOutOfRange(self.day_of_week));
        }
        Ok(())
    }
}

/// Delay prediction produced by the remote scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Blended delay probability in `[0, 1]`
    pub delay_probability: f64,

    pub confidence_percent: f64,

    /// Probability from the logistic model alone
    pub logistic_probability: f64,

    /// Smoothed historical delay rate for the route and weekday
    pub historical_pair_probability: f64,

    /// Name of the method that produced the estimate
    pub method: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_historical_data: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_events: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_total: Option<u32>,
}

/// Uniform wrapper returned by the prediction endpoint.
///
/// Exactly one of `result` / `error` is set, matching `success`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<PredictionResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn ok(result: PredictionResult) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
        }
    }
}
