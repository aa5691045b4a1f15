//! Remote scorer wire models

mod scoring;

pub use scoring::{ScoreRequest, ScoreResponse, ScorerErrorBody, ScorerHealth};
