//! Subcommand implementations. Each returns the JSON document to print.

use anyhow::{anyhow, Result};
use geonav_common::{BoundingBox, GeodeticPoint, ProjectionPoint, ScanAnglePoint};
use projection::satellite::{channel_resolution_by_name, sub_satellite_longitude_by_name};
use projection::{
    grid_radians_from_resolution, round_half_up, MapProjection, NavigationConfig, TableEntry,
};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::cli::Command;

#[derive(Debug, Serialize)]
struct ScanResult {
    visible: bool,
    lambda: Option<f64>,
    theta: Option<f64>,
}

#[derive(Debug, Serialize)]
struct EarthResult {
    visible: bool,
    longitude: Option<f64>,
    latitude: Option<f64>,
}

#[derive(Debug, Serialize)]
struct PixelResult {
    visible: bool,
    x: Option<f64>,
    y: Option<f64>,
    element: Option<i64>,
    line: Option<i64>,
    in_image: bool,
}

#[derive(Debug, Serialize)]
struct SatelliteResult {
    series: String,
    number: u32,
    channel: Option<u32>,
    sub_satellite_longitude: TableEntry<f64>,
    channel_resolution_km: Option<TableEntry<f64>>,
    grid_step_radians: Option<f64>,
}

#[derive(Debug, Serialize)]
struct RectResult {
    visible: bool,
    projected: Option<BoundingBox>,
}

#[derive(Debug, Serialize)]
struct BoundsResult {
    projection: String,
    image: BoundingBox,
    geographic: Option<BoundingBox>,
}

impl From<Option<GeodeticPoint>> for EarthResult {
    fn from(point: Option<GeodeticPoint>) -> Self {
        Self {
            visible: point.is_some(),
            longitude: point.map(|p| p.longitude),
            latitude: point.map(|p| p.latitude),
        }
    }
}

/// Run one subcommand against a validated configuration.
pub fn run(command: &Command, config: &NavigationConfig) -> Result<Value> {
    let value = match command {
        Command::Forward { lon, lat } => {
            let geometry = config.build_geometry()?;
            let scan = geometry.earth_to_sat(GeodeticPoint::new(*lon, *lat));
            serde_json::to_value(ScanResult {
                visible: scan.is_some(),
                lambda: scan.map(|s| s.lambda),
                theta: scan.map(|s| s.theta),
            })?
        }
        Command::Inverse { lambda, theta } => {
            let geometry = config.build_geometry()?;
            let earth = geometry.sat_to_earth(ScanAnglePoint::new(*lambda, *theta));
            serde_json::to_value(EarthResult::from(earth))?
        }
        Command::ToPixel { lon, lat } => {
            let projection = config.build_projection()?;
            let pixel = projection.try_lat_lon_to_proj(GeodeticPoint::new(*lon, *lat));
            let in_image = pixel
                .map(|p| projection.default_map_area().contains_point(p.x, p.y))
                .unwrap_or(false);
            serde_json::to_value(PixelResult {
                visible: pixel.is_some(),
                x: pixel.map(|p| p.x),
                y: pixel.map(|p| p.y),
                element: pixel.map(|p| round_half_up(p.x)),
                line: pixel.map(|p| round_half_up(p.y)),
                in_image,
            })?
        }
        Command::FromPixel { x, y } => {
            let projection = config.build_projection()?;
            let earth = projection.try_proj_to_lat_lon(ProjectionPoint::new(*x, *y));
            serde_json::to_value(EarthResult::from(earth))?
        }
        Command::Satellite {
            series,
            number,
            channel,
        } => serde_json::to_value(satellite(series, *number, *channel))?,
        Command::Bbox { rect: Some(rect) } => {
            let rect: BoundingBox = rect
                .parse()
                .map_err(|e| anyhow!("Invalid rectangle '{}': {}", rect, e))?;
            let projection = config.build_projection()?;
            let projected = projection.lat_lon_rect_to_proj_rect(&rect);
            serde_json::to_value(RectResult {
                visible: projected.is_some(),
                projected,
            })?
        }
        Command::Bbox { rect: None } => {
            let projection = config.build_projection()?;
            serde_json::to_value(BoundsResult {
                projection: projection.name(),
                image: projection.default_map_area(),
                geographic: projection.geographic_bounds(),
            })?
        }
    };
    Ok(value)
}

fn satellite(series: &str, number: u32, channel: Option<u32>) -> SatelliteResult {
    let sub_lon = sub_satellite_longitude_by_name(series, number);
    let resolution = channel.map(|c| channel_resolution_by_name(series, number, c));

    if matches!(sub_lon, TableEntry::Unknown) || matches!(resolution, Some(TableEntry::Unknown)) {
        warn!(series, number, channel = ?channel, "Satellite not catalogued");
    }

    SatelliteResult {
        series: series.to_string(),
        number,
        channel,
        sub_satellite_longitude: sub_lon,
        channel_resolution_km: resolution,
        grid_step_radians: resolution
            .and_then(|r| r.value())
            .map(grid_radians_from_resolution),
    }
}
