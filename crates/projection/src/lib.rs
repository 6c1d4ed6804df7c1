//! Geostationary satellite navigation.
//!
//! Converts between geographic coordinates, instrument scan angles and
//! Fixed Grid Format pixel coordinates for geostationary imagers, and
//! exposes the result as a map projection.

pub mod adapter;
pub mod config;
pub mod error;
pub mod fgf;
pub mod geoid;
pub mod geostationary;
pub mod legacy;
pub mod locations;
pub mod satellite;

pub use adapter::{crosses_seam, GeosProjection, MapProjection, SEAM_THRESHOLD};
pub use config::NavigationConfig;
pub use error::{ProjectionError, ProjectionResult};
pub use fgf::{round_half_up, FgfAffine};
pub use geoid::{Geoid, GeoidId};
pub use geostationary::{
    geos_to_goes, goes_to_geos, CfGridMapping, ScanConvention, ScanGeometry,
    GOES_R_ORBITAL_RADIUS_KM, MSG_ORBITAL_RADIUS_KM,
};
pub use legacy::FgfNavigation;
pub use locations::EarthLocations;
pub use satellite::{
    channel_navigation, channel_resolution, grid_radians_from_resolution,
    sub_satellite_longitude, ChannelNavigation, SatelliteSeries, TableEntry,
};
