//! Error types for the flight delay service

use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Scorer(#[from] ScorerError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Rejected prediction input. Checked before the cache or scorer is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("DayOfWeek must be between 1-7")]
    DayOfWeekOutOfRange(i32),
}

/// Failures talking to the remote delay scorer
#[derive(Debug, Clone, Error)]
pub enum ScorerError {
    #[error("Scorer unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Malformed scorer response: {0}")]
    MalformedResponse(String),

    #[error("Scorer has not been initialized")]
    NotInitialized,
}

impl ScorerError {
    /// Caller-facing description that never carries remote or internal detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            ScorerError::ServiceUnavailable(_) => {
                "Prediction service is currently unavailable. Please try again later."
            }
            ScorerError::MalformedResponse(_) => {
                "Prediction service returned an invalid response."
            }
            ScorerError::NotInitialized => "Prediction service is not ready yet.",
        }
    }
}

impl From<reqwest::Error> for ScorerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScorerError::ServiceUnavailable("Request timed out".to_string())
        } else if err.is_connect() {
            ScorerError::ServiceUnavailable("Failed to connect to scorer".to_string())
        } else {
            ScorerError::ServiceUnavailable(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Cache storage faults. Never surfaced to API callers.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Cache serialization error: {0}")]
    Serialization(String),

    #[error("Cache lock poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorer_unavailable_message() {
        let err = ScorerError::ServiceUnavailable("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_scorer_user_message_hides_detail() {
        let err = ScorerError::ServiceUnavailable("10.0.0.4:5108 refused".to_string());
        assert!(!err.user_message().contains("10.0.0.4"));

        let err = ScorerError::MalformedResponse("missing field `DelayProbability`".to_string());
        assert!(!err.user_message().contains("DelayProbability"));
    }

    #[test]
    fn test_scorer_not_initialized_message() {
        let err = ScorerError::NotInitialized;
        assert!(err.to_string().contains("initialized"));
        assert!(err.user_message().contains("not ready"));
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound("/etc/flightdelay.yaml".to_string());
        assert!(err.to_string().contains("/etc/flightdelay.yaml"));
    }

    #[test]
    fn test_config_error_invalid() {
        let err = ConfigError::Invalid("bad format".to_string());
        assert!(err.to_string().contains("bad format"));
    }

    #[test]
    fn test_error_from_scorer_error() {
        let err: Error = ScorerError::NotInitialized.into();

        match err {
            Error::Scorer(ScorerError::NotInitialized) => (),
            _ => panic!("Expected Error::Scorer(ScorerError::NotInitialized)"),
        }
    }

    #[test]
    fn test_error_from_config_error() {
        let err: Error = ConfigError::Invalid("x".to_string()).into();

        match err {
            Error::Config(ConfigError::Invalid(_)) => (),
            _ => panic!("Expected Error::Config(ConfigError::Invalid)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
