//! Point types for the three coordinate spaces used in satellite navigation.

use serde::{Deserialize, Serialize};

/// A geographic (geodetic, not geocentric) position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodeticPoint {
    /// Longitude in degrees, positive east
    pub longitude: f64,
    /// Latitude in degrees, positive north
    pub latitude: f64,
}

impl GeodeticPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// A point with NaN coordinates, used where a position is undefined.
    pub fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    /// True when both coordinates are finite.
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }
}

/// Scan angles as seen from the satellite.
///
/// `lambda` is the east-west angle and `theta` the north-south angle, both
/// in radians. Which axis is the sweep axis depends on the scan convention
/// of the geometry that produced the point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanAnglePoint {
    pub lambda: f64,
    pub theta: f64,
}

impl ScanAnglePoint {
    pub fn new(lambda: f64, theta: f64) -> Self {
        Self { lambda, theta }
    }
}

/// A point in a map projection's plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectionPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    /// False for NaN or infinite coordinates.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
