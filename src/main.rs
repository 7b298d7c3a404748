//! Command-line entry point for the TOPSIS ranking tool.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use topsis::adapters::{CsvTableReader, CsvTableWriter, FileDelivery, ResendMailer};
use topsis::application::{AnalysisReport, AnalysisRequest, RunAnalysisHandler};
use topsis::config::AppConfig;
use topsis::ports::ResultDelivery;

/// Rank alternatives across weighted, directional criteria using TOPSIS.
#[derive(Debug, Parser)]
#[command(name = "topsis", version, about)]
struct Cli {
    /// Source table (.csv): identifier column first, numeric criteria after.
    input: PathBuf,

    /// Comma-separated weights, one per criterion (e.g. "1,1,1,2").
    weights: String,

    /// Comma-separated impacts, '+' or '-' per criterion (e.g. "+,+,-,+").
    impacts: String,

    /// Path the ranked result table is written to.
    output: PathBuf,

    /// Also email the result table to this address (requires TOPSIS__EMAIL__*
    /// environment configuration).
    #[arg(long, value_name = "ADDRESS")]
    email_to: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(report) => println!("Results saved to {}", report.output.display()),
        Err(message) => {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<AnalysisReport, String> {
    let mut deliveries: Vec<Arc<dyn ResultDelivery>> = vec![Arc::new(FileDelivery::new())];

    if let Some(recipient) = &cli.email_to {
        let config = AppConfig::load().map_err(|err| err.to_string())?;
        config.validate().map_err(|err| err.to_string())?;
        deliveries.push(Arc::new(ResendMailer::new(config.email, recipient.as_str())));
    }

    let handler = RunAnalysisHandler::new(
        Arc::new(CsvTableReader::new()),
        Arc::new(CsvTableWriter::new()),
        deliveries,
    );

    let request = AnalysisRequest {
        input: cli.input,
        weights: cli.weights,
        impacts: cli.impacts,
        output: cli.output,
    };
    handler.run(&request).map_err(|err| err.to_string())
}
