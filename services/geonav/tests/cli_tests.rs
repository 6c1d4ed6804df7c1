//! Tests for the geonav command-line tool.
//!
//! These drive the library side of the binary: argument parsing,
//! configuration precedence and the JSON produced by each subcommand.

use clap::Parser;
use geonav::cli::{Args, Command};
use geonav::{commands, settings};
use projection::NavigationConfig;
use std::io::Write;

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(argv).unwrap()
}

fn goes_east() -> NavigationConfig {
    NavigationConfig::default()
}

// ============================================================================
// Argument parsing
// ============================================================================

#[test]
fn test_negative_positionals() {
    let args = parse(&["geonav", "forward", "-95.0", "39.0"]);
    assert_eq!(
        args.command,
        Command::Forward {
            lon: -95.0,
            lat: 39.0
        }
    );
}

#[test]
fn test_global_options_after_subcommand() {
    let args = parse(&[
        "geonav",
        "inverse",
        "0.01",
        "-0.02",
        "--sub-lon=-137.2",
        "--convention",
        "GEOS",
    ]);
    assert_eq!(args.sub_lon, Some(-137.2));
    assert_eq!(args.convention.as_deref(), Some("GEOS"));
    assert_eq!(args.log_level, "warn");
}

#[test]
fn test_missing_subcommand_is_error() {
    assert!(Args::try_parse_from(["geonav"]).is_err());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_yaml_config_with_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "sub_satellite_longitude: 0.0\nscan_convention: GEOS\ngeoid: WGS84\n"
    )
    .unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let args = parse(&["geonav", "--config", &path, "--sub-lon=9.5", "bbox"]);
    let config = settings::load(&args).unwrap();

    assert_eq!(config.sub_satellite_longitude, 9.5);
    assert_eq!(config.scan_convention, "GEOS");
    assert_eq!(config.geoid.as_deref(), Some("WGS84"));
}

#[test]
fn test_invalid_override_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "scan_convention: GOES").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let args = parse(&["geonav", "--config", &path, "--geoid", "airy", "bbox"]);
    assert!(settings::load(&args).is_err());

    let args = parse(&["geonav", "--config", &path, "--resolution", "3", "bbox"]);
    assert!(settings::load(&args).is_err());
}

#[test]
fn test_bad_yaml_is_error() {
    assert!(settings::from_yaml_str("sub_satellite_longitude: [1, 2]").is_err());
    let config = settings::from_yaml_str("abi_resolution_km: 1.0").unwrap();
    assert_eq!(config.grid_size().unwrap(), (10848, 10848));
}

#[test]
fn test_missing_config_file_is_error() {
    let args = parse(&["geonav", "--config", "/nonexistent/geonav.yaml", "bbox"]);
    assert!(settings::load(&args).is_err());
}

// ============================================================================
// Subcommands
// ============================================================================

#[test]
fn test_forward_and_inverse() {
    let config = goes_east();
    let out = commands::run(
        &Command::Forward {
            lon: -95.0,
            lat: 39.0,
        },
        &config,
    )
    .unwrap();
    assert_eq!(out["visible"], true);
    let lambda = out["lambda"].as_f64().unwrap();
    let theta = out["theta"].as_f64().unwrap();

    let back = commands::run(&Command::Inverse { lambda, theta }, &config).unwrap();
    assert!((back["longitude"].as_f64().unwrap() + 95.0).abs() < 1e-6);
    assert!((back["latitude"].as_f64().unwrap() - 39.0).abs() < 1e-6);
}

#[test]
fn test_hidden_point_reports_not_visible() {
    let out = commands::run(
        &Command::Forward {
            lon: 105.0,
            lat: 0.0,
        },
        &goes_east(),
    )
    .unwrap();
    assert_eq!(out["visible"], false);
    assert!(out["lambda"].is_null());

    let out = commands::run(&Command::FromPixel { x: 0.0, y: 0.0 }, &goes_east()).unwrap();
    assert_eq!(out["visible"], false);
}

#[test]
fn test_to_pixel_and_back() {
    let config = goes_east();
    let out = commands::run(
        &Command::ToPixel {
            lon: -75.0,
            lat: 0.0,
        },
        &config,
    )
    .unwrap();
    assert_eq!(out["in_image"], true);
    assert_eq!(out["element"], 2712);
    assert_eq!(out["line"], 2712);

    let x = out["x"].as_f64().unwrap();
    let y = out["y"].as_f64().unwrap();
    let back = commands::run(&Command::FromPixel { x, y }, &config).unwrap();
    assert!((back["longitude"].as_f64().unwrap() + 75.0).abs() < 1e-6);
}

#[test]
fn test_satellite_lookup() {
    let out = commands::run(
        &Command::Satellite {
            series: "GOES".to_string(),
            number: 16,
            channel: Some(2),
        },
        &goes_east(),
    )
    .unwrap();
    assert_eq!(out["sub_satellite_longitude"]["status"], "available");
    assert_eq!(out["sub_satellite_longitude"]["value"], -75.0);
    assert_eq!(out["channel_resolution_km"]["value"], 0.5);
    assert!((out["grid_step_radians"].as_f64().unwrap() - 14e-6).abs() < 1e-15);

    let out = commands::run(
        &Command::Satellite {
            series: "Elektro".to_string(),
            number: 2,
            channel: None,
        },
        &goes_east(),
    )
    .unwrap();
    assert_eq!(out["sub_satellite_longitude"]["status"], "unknown");
    assert!(out["channel_resolution_km"].is_null());
}

#[test]
fn test_bbox_commands() {
    let config = goes_east();
    let out = commands::run(
        &Command::Bbox {
            rect: Some("-130,20,-60,55".to_string()),
        },
        &config,
    )
    .unwrap();
    assert_eq!(out["visible"], true);
    assert!(out["projected"]["min_x"].as_f64().unwrap() > 0.0);

    let out = commands::run(
        &Command::Bbox {
            rect: Some("90,-10,120,10".to_string()),
        },
        &config,
    )
    .unwrap();
    assert_eq!(out["visible"], false);

    assert!(commands::run(
        &Command::Bbox {
            rect: Some("1,2,3".to_string())
        },
        &config
    )
    .is_err());

    let out = commands::run(&Command::Bbox { rect: None }, &config).unwrap();
    assert_eq!(out["image"]["max_x"], 5424.0);
    assert!(out["geographic"]["min_y"].as_f64().unwrap() < -60.0);
}
