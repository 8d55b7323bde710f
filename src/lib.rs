//! rTimecast library root.
//! Exposes the forecast engine, the CLI parser, the high-level run() function and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

pub use crate::core::forecast::{
    DEFAULT_FUTURE_DAYS, ForecastEngine, ForecastParams, get_forecast_time_series, get_predictions,
};

use clap::Parser;
use cli::context::Context;
use cli::parser::{Cli, Commands};
use errors::AppResult;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Predict { .. } => cli::commands::predict::handle(&cli.command, ctx),
        Commands::Forecast { .. } => cli::commands::forecast::handle(&cli.command, ctx),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
    }
}

/// Install the diagnostic subscriber. `RTIMECAST_LOG` / `RUST_LOG` win over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("RTIMECAST_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics
    init_tracing(cli.verbose);

    // 3️⃣ resolve config, entries path and "today" once
    let ctx = Context::from_cli(&cli)?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &ctx)
}
