//! Serve command implementation

use std::sync::Arc;

use crate::cache::ResultCache;
use crate::catalog::AirportCatalog;
use crate::cli::args::GlobalOptions;
use crate::client::HttpDelayScorer;
use crate::error::Result;
use crate::server::{self, AppState};
use crate::service::PredictionService;

/// Build the service graph and serve HTTP until shutdown.
///
/// A scorer that fails its startup probe does not stop the server; prediction
/// requests then come back as error envelopes.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let config = opts.resolve_config()?;
    let policy = config.cache_policy();

    let scorer = Arc::new(HttpDelayScorer::new(
        &config.scorer_url,
        config.scorer_timeout(),
    )?);
    let catalog = Arc::new(AirportCatalog::new(&config.airports_path));
    let cache = Arc::new(ResultCache::new(policy.prediction_ttl)?);

    let service = Arc::new(PredictionService::new(cache, scorer, catalog, policy));

    if let Err(e) = service.scorer().initialize().await {
        log::error!(
            "Delay scorer at {} failed to initialize, predictions will fail: {}",
            config.scorer_url,
            e
        );
    }

    server::serve(config.bind_address, AppState::new(Arc::clone(&service))).await?;

    let stats = service.stats();
    log::info!(
        "Predictions: {} hits, {} misses, {} scorer failures, {} rejected. Airport listings: {} hits, {} misses",
        stats.prediction_hits,
        stats.prediction_misses,
        stats.scorer_failures,
        stats.validation_failures,
        stats.airport_hits,
        stats.airport_misses
    );
    if let Some(cache) = stats.cache {
        log::debug!(
            "Cache at shutdown: {} live, {} expired, {} bytes",
            cache.valid_entries,
            cache.expired_entries,
            cache.total_size_bytes
        );
    }

    Ok(())
}
