//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "geonav")]
#[command(about = "Geostationary satellite navigation: geographic, scan-angle and pixel conversions")]
pub struct Args {
    /// Navigation configuration file (YAML); GEONAV_* variables otherwise
    #[arg(short, long, env = "GEONAV_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Sub-satellite longitude in degrees east
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub sub_lon: Option<f64>,

    /// Scan convention: GOES or GEOS
    #[arg(long, global = true)]
    pub convention: Option<String>,

    /// Reference ellipsoid: WGS84 or GRS80
    #[arg(long, global = true)]
    pub geoid: Option<String>,

    /// ABI full-disk resolution in km (0.5, 1 or 2)
    #[arg(long, global = true)]
    pub resolution: Option<f64>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log level
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Geographic point to scan angles (radians)
    Forward {
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
    },

    /// Scan angles (radians) to a geographic point
    Inverse {
        #[arg(allow_negative_numbers = true)]
        lambda: f64,
        #[arg(allow_negative_numbers = true)]
        theta: f64,
    },

    /// Geographic point to image pixel coordinates
    ToPixel {
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
    },

    /// Image pixel coordinates to a geographic point
    FromPixel {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },

    /// Look up catalogued navigation metadata
    Satellite {
        /// Series name, e.g. GOES, MSG, Himawari
        series: String,

        /// Spacecraft number within the series
        number: u32,

        /// Instrument channel
        #[arg(long)]
        channel: Option<u32>,
    },

    /// Convert a geographic rectangle to image coordinates, or report the
    /// image's geographic bounds when no rectangle is given
    Bbox {
        /// "min_lon,min_lat,max_lon,max_lat"
        #[arg(allow_hyphen_values = true)]
        rect: Option<String>,
    },
}
