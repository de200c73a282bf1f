mod analysis;
mod catalog;
mod web;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::analysis::{scan_catalog, summarize, AnalysisConfig, RiskLevel};
use crate::catalog::CatalogLoader;
use crate::web::Config;

#[derive(Parser)]
#[command(name = "debris-watch")]
#[command(about = "Satellite and debris proximity monitoring")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        #[arg(long, default_value = "config.yaml")]
        config: String,
    },
    /// Scan a catalog file once and print the alerts
    Scan { catalog: PathBuf },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(&config),
        Commands::Scan { catalog } => scan(catalog),
    }
}

fn serve(config_path: &str) -> ExitCode {
    let config = match Config::from_file(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config {}: {}", config_path, e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(web::run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn scan(catalog_path: PathBuf) -> ExitCode {
    let loader = CatalogLoader::new(catalog_path);
    let snapshot = match loader.load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading catalog {}: {}", loader.path().display(), e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = scan_catalog(&AnalysisConfig::default(), &snapshot.objects);
    let stats = summarize(&snapshot.objects, &outcome.alerts);

    println!(
        "Catalog: {} objects ({} satellites, {} debris)",
        stats.total_objects, stats.satellites_count, stats.debris_count
    );
    if snapshot.skipped > 0 {
        println!("Skipped {} malformed record(s)", snapshot.skipped);
    }

    if outcome.alerts.is_empty() {
        println!("No proximity alerts");
    } else {
        println!("Alerts:");
        for alert in &outcome.alerts {
            println!(
                "  {:6} {} <-> {} ({} km)",
                risk_name(alert.risk_level),
                alert.satellite,
                alert.debris,
                alert.distance_km
            );
        }
        println!("{} high-risk conjunction(s)", stats.high_risk_count);
    }

    ExitCode::SUCCESS
}

fn risk_name(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "HIGH",
        RiskLevel::Medium => "MEDIUM",
        RiskLevel::Low => "LOW",
    }
}
