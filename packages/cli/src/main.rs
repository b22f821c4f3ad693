#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Terminal dashboard for the crime prediction API.
//!
//! A thin consumer of the prediction pipeline: probes API health, lists
//! available periods, and renders per-model grid statistics, layer
//! colors, and PEI/accuracy metrics for a selected period.

mod dashboard;

use clap::{Parser, Subcommand};
use crime_predict_predictions::PredictionClient;

#[derive(Parser)]
#[command(name = "crime_predict", about = "Crime prediction map data explorer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the prediction API health endpoint
    Health,
    /// List periods with available prediction data
    Periods,
    /// Fetch grids and metrics for one period and print per-model stats
    Snapshot {
        /// Period in YYYYMM form (e.g. 202302)
        #[arg(long, default_value = "202302")]
        period: u32,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let client = PredictionClient::from_env();
    log::debug!("Using prediction API at {}", client.base_url());

    match cli.command {
        Commands::Health => {
            if client.check_health().await {
                println!("API healthy at {}", client.base_url());
            } else {
                return Err(
                    format!("API server at {} is not responding", client.base_url()).into(),
                );
            }
        }
        Commands::Periods => {
            let resp = client.fetch_available_periods().await?;
            println!("{} periods available", resp.count);
            for info in &resp.periods_detail {
                println!(
                    "  {} - {} ({})",
                    info.period,
                    info.period_label,
                    info.available_models.join(", ")
                );
            }
        }
        Commands::Snapshot { period } => {
            if !client.check_health().await {
                return Err(
                    format!("API server at {} is not responding", client.base_url()).into(),
                );
            }

            let snapshot = client.fetch_period_snapshot(period).await?;
            print!("{}", dashboard::render_snapshot(&snapshot));
        }
    }

    Ok(())
}
