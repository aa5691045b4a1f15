//! Domain models shared by the prediction service and the HTTP surface

pub mod airport;
pub mod prediction;

pub use airport::Airport;
pub use prediction::{PredictionRequest, PredictionResult, ResponseEnvelope};
