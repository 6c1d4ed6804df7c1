//! Geostationary navigation CLI.
//!
//! Converts between geographic coordinates, scan angles and image pixels
//! for a configured geostationary imager, and queries the satellite
//! metadata tables. Results are printed as JSON on stdout; logs go to
//! stderr.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use geonav::cli::{Args, Command};
use geonav::{commands, settings};

fn main() -> Result<()> {
    // Load .env before clap reads GEONAV_CONFIG
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Metadata lookups need no navigation configuration
    let config = match &args.command {
        Command::Satellite { .. } => projection::NavigationConfig::default(),
        _ => settings::load(&args)?,
    };
    info!(command = ?args.command, "Running");

    let output = commands::run(&args.command, &config)?;
    let text = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", text);

    Ok(())
}
