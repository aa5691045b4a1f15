//! Status command implementation

use colored::Colorize;

use crate::catalog::AirportCatalog;
use crate::cli::args::GlobalOptions;
use crate::client::HttpDelayScorer;
use crate::config::Config;
use crate::error::Result;

/// Show resolved configuration, airport dataset and scorer health.
///
/// Only a configuration problem is an error; an unreachable scorer or a
/// missing dataset is reported and the command still succeeds.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Flight Delay Service Status".bold());

    let config = opts.resolve_config()?;

    match opts.config_ref() {
        Some(path) => println!("Config file: {}", path.cyan()),
        None => {
            let default_path = Config::default_path()?;
            if default_path.exists() {
                println!("Config file: {}", default_path.display().to_string().cyan());
            } else {
                println!("Config file: {}", "(defaults)".dimmed());
            }
        }
    }
    println!("Bind address: {}", config.bind_address);
    println!(
        "Cache TTLs: predictions {}s, airports {}s",
        config.cache.prediction_ttl_secs, config.cache.airport_ttl_secs
    );
    println!();

    let catalog = AirportCatalog::new(&config.airports_path);
    if catalog.is_empty() {
        println!(
            "{} No airports loaded from {}",
            "✗".red(),
            catalog.path().display()
        );
    } else {
        println!(
            "{} {} airports loaded from {}",
            "✓".green(),
            catalog.len(),
            catalog.path().display()
        );
    }

    let scorer = HttpDelayScorer::new(&config.scorer_url, config.scorer_timeout())?;
    match scorer.probe().await {
        Ok(health) if health.model_loaded => {
            println!("{} Scorer at {} has its model loaded", "✓".green(), config.scorer_url);
        }
        Ok(health) => {
            println!(
                "{} Scorer at {} is up but reports no model loaded (status: {})",
                "⚠".yellow(),
                config.scorer_url,
                health.status.as_deref().unwrap_or("unknown")
            );
        }
        Err(e) => {
            println!("{} Scorer at {} unreachable", "✗".red(), config.scorer_url);
            log::debug!("Scorer probe failed: {}", e);
        }
    }

    println!();
    Ok(())
}
