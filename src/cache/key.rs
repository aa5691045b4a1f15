//! Cache key generation using SHA-256 hashes

use sha2::{Digest, Sha256};

use crate::models::PredictionRequest;

/// Generate a deterministic cache key from an endpoint and its parameters.
///
/// The key is a SHA-256 hash of the endpoint and the parameters sorted by
/// name, so the same inputs always produce the same key regardless of the
/// order they were supplied in.
pub fn cache_key(endpoint: &str, params: &[(&str, &str)]) -> String {
    let mut hasher = Sha256::new();

    hasher.update(endpoint.as_bytes());
    hasher.update(b"|");

    let mut sorted_params: Vec<_> = params.iter().collect();
    sorted_params.sort_by_key(|(k, _)| *k);

    for (k, v) in sorted_params {
        hasher.update(k.as_bytes());
        hasher.update(b"=");
        hasher.update(v.as_bytes());
        hasher.update(b"&");
    }

    format!("{:x}", hasher.finalize())
}

/// Key for a single prediction. Every request field participates.
pub fn prediction_key(request: &PredictionRequest) -> String {
    let day_of_week = request.day_of_week.to_string();
    let origin = request.origin_airport_id.to_string();
    let dest = request.dest_airport_id.to_string();
    let month = request.month.to_string();
    let departure = request.scheduled_departure_time.to_string();

    cache_key(
        "predict_delay",
        &[
            ("day_of_week", day_of_week.as_str()),
            ("origin_airport_id", origin.as_str()),
            ("dest_airport_id", dest.as_str()),
            ("month", month.as_str()),
            ("carrier", request.carrier.as_str()),
            ("scheduled_departure_time", departure.as_str()),
        ],
    )
}

/// Fixed key for the full airport listing
pub fn airports_key() -> String {
    cache_key("list_airports", &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> PredictionRequest {
        PredictionRequest {
            day_of_week: 1,
            origin_airport_id: 10397,
            dest_airport_id: 10721,
            month: 6,
            carrier: "AA".to_string(),
            scheduled_departure_time: 800,
        }
    }

    #[test]
    fn test_cache_key_deterministic() {
        let key1 = cache_key("predict_delay", &[("month", "6"), ("carrier", "AA")]);
        let key2 = cache_key("predict_delay", &[("carrier", "AA"), ("month", "6")]);

        // Same inputs in different order should produce same key
        assert_eq!(key1, key2);
    }

    #[test]
    fn test_cache_key_different_endpoints() {
        let key1 = cache_key("predict_delay", &[]);
        let key2 = cache_key("list_airports", &[]);

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_prediction_key_identical_requests_collide() {
        assert_eq!(prediction_key(&base_request()), prediction_key(&base_request()));
    }

    #[test]
    fn test_prediction_key_every_field_matters() {
        let base = prediction_key(&base_request());

        let variants = [
            PredictionRequest {
                day_of_week: 2,
                ..base_request()
            },
            PredictionRequest {
                origin_airport_id: 12892,
                ..base_request()
            },
            PredictionRequest {
                dest_airport_id: 12892,
                ..base_request()
            },
            PredictionRequest {
                month: 7,
                ..base_request()
            },
            PredictionRequest {
                carrier: "DL".to_string(),
                ..base_request()
            },
            PredictionRequest {
                scheduled_departure_time: 1745,
                ..base_request()
            },
        ];

        for variant in &variants {
            assert_ne!(base, prediction_key(variant), "{:?}", variant);
        }
    }

    #[test]
    fn test_prediction_key_swapped_airports_differ() {
        let swapped = PredictionRequest {
            origin_airport_id: 10721,
            dest_airport_id: 10397,
            ..base_request()
        };

        assert_ne!(prediction_key(&base_request()), prediction_key(&swapped));
    }

    #[test]
    fn test_airports_key_is_constant() {
        assert_eq!(airports_key(), airports_key());
        assert_ne!(airports_key(), prediction_key(&base_request()));
    }
}
