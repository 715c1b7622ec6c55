mod chart;
mod ephemeris;
mod horoscope;
mod web;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::chart::{ChartRequest, ChartService};
use crate::ephemeris::KeplerianEphemeris;
use crate::web::Config;

#[derive(Parser)]
#[command(name = "natal-chart")]
#[command(about = "Natal chart computation service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// YAML config file; defaults apply when omitted
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Compute one chart and print it as JSON
    Chart {
        /// Local date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Local time, HH:MM
        #[arg(long)]
        time: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// UTC offset, e.g. +03:00
        #[arg(long, allow_hyphen_values = true)]
        tz: Option<String>,
        /// Orbital element table to use instead of the embedded one
        #[arg(long)]
        elements: Option<PathBuf>,
    },
    /// Validate a config file
    ValidateConfig { config: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()).await,
        Commands::Chart {
            date,
            time,
            lat,
            lon,
            tz,
            elements,
        } => chart(
            ChartRequest {
                date,
                time,
                lat,
                lon,
                tz,
            },
            elements,
        ),
        Commands::ValidateConfig { config } => validate_config(&config),
    }
}

async fn serve(path: Option<&str>) -> ExitCode {
    let mut config = match path {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    if let Err(e) = config.apply_port(std::env::var("PORT").ok()) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn chart(request: ChartRequest, elements: Option<PathBuf>) -> ExitCode {
    let ephemeris = match KeplerianEphemeris::load(elements.as_deref()) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error loading ephemeris: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let service = ChartService::new(std::sync::Arc::new(ephemeris));
    let response = match service.compute(&request) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&response) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error encoding chart: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn validate_config(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = web::load_ephemeris(&config) {
        eprintln!("Ephemeris error: {}", e);
        return ExitCode::FAILURE;
    }

    println!("Config is valid (bind {})", config.web.bind);
    println!(
        "  ephemeris: {}",
        config
            .ephemeris
            .elements_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".to_string())
    );
    println!("  horoscope timeout: {:?}", config.horoscope.timeout);
    println!("  translation model: {}", config.translation.model);
    ExitCode::SUCCESS
}
