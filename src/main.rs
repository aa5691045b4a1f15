//! Flight delay prediction API

use anyhow::Context;
use clap::Parser;

mod cache;
mod catalog;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod server;
mod service;

use cli::{Cli, Commands, GlobalOptions};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Serve => cli::serve::run(&opts).await.context("Server failed"),
        Commands::Status => cli::status::run(&opts)
            .await
            .context("Could not resolve configuration"),
        Commands::Version => {
            println!("flightdelay version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// `RUST_LOG` wins over `--debug`; the default level is info.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
    log::debug!("Debug logging enabled");
}
