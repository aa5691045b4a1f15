//! CLI command definitions and handlers

use std::net::SocketAddr;

use clap::{Parser, Subcommand};

pub mod args;
pub mod serve;
pub mod status;

pub use args::GlobalOptions;

/// Flight delay prediction API
#[derive(Parser, Debug)]
#[command(name = "flightdelay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Override config file location
    #[arg(long, global = true, env = "FLIGHTDELAY_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "FLIGHTDELAY_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Base URL of the remote delay scorer
    #[arg(long, global = true, env = "FLIGHTDELAY_SCORER_URL", hide_env = true)]
    pub scorer_url: Option<String>,

    /// Path to the airport reference CSV
    #[arg(long, global = true, env = "FLIGHTDELAY_AIRPORTS", hide_env = true)]
    pub airports: Option<String>,

    /// Address to bind the HTTP server to
    #[arg(long, global = true, env = "FLIGHTDELAY_BIND", hide_env = true)]
    pub bind: Option<SocketAddr>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the prediction API server
    Serve,

    /// Show configuration, airport dataset and scorer status
    Status,

    /// Display version information
    Version,
}
