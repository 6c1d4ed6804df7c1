//! Fixed Grid Format (FGF) mapping between pixel coordinates and scan angles.
//!
//! Each instrument channel publishes a scale and offset per axis:
//! `angle = pixel * scale + offset`. Fractional pixel coordinates are kept
//! as f64; integer element/line indices round to the nearest pixel.

use crate::error::{ProjectionError, ProjectionResult};
use crate::geostationary::ScanGeometry;
use geonav_common::{GeodeticPoint, ScanAnglePoint};
use serde::{Deserialize, Serialize};

/// Linear pixel <-> scan-angle mapping for one channel resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FgfAffine {
    /// Radians per element
    pub scale_x: f64,
    /// Scan angle of element 0 (radians)
    pub offset_x: f64,
    /// Radians per line
    pub scale_y: f64,
    /// Scan angle of line 0 (radians)
    pub offset_y: f64,
}

impl FgfAffine {
    pub fn new(scale_x: f64, offset_x: f64, scale_y: f64, offset_y: f64) -> ProjectionResult<Self> {
        for (param, value) in [("scale_x", scale_x), ("scale_y", scale_y)] {
            if !value.is_finite() || value == 0.0 {
                return Err(ProjectionError::invalid(
                    param,
                    format!("must be finite and non-zero, got {}", value),
                ));
            }
        }
        for (param, value) in [("offset_x", offset_x), ("offset_y", offset_y)] {
            if !value.is_finite() {
                return Err(ProjectionError::invalid(
                    param,
                    format!("must be finite, got {}", value),
                ));
            }
        }
        Ok(Self {
            scale_x,
            offset_x,
            scale_y,
            offset_y,
        })
    }

    /// GOES-R ABI full-disk fixed grid at the given nadir resolution.
    ///
    /// Returns the mapping and the grid size (square) for 0.5, 1 and 2 km.
    pub fn abi_full_disk(resolution_km: f64) -> Option<(FgfAffine, usize)> {
        let (scale, offset, size) = if (resolution_km - 2.0).abs() < 1e-9 {
            (56e-6, 0.151844, 5424)
        } else if (resolution_km - 1.0).abs() < 1e-9 {
            (28e-6, 0.151858, 10848)
        } else if (resolution_km - 0.5).abs() < 1e-9 {
            (14e-6, 0.151865, 21696)
        } else {
            return None;
        };
        let affine = FgfAffine {
            scale_x: scale,
            offset_x: -offset,
            scale_y: -scale,
            offset_y: offset,
        };
        Some((affine, size))
    }

    /// Fractional pixel coordinates to scan angles.
    #[inline]
    pub fn pixel_to_angle(&self, x: f64, y: f64) -> ScanAnglePoint {
        ScanAnglePoint::new(x * self.scale_x + self.offset_x, y * self.scale_y + self.offset_y)
    }

    /// Scan angles to fractional pixel coordinates.
    #[inline]
    pub fn angle_to_pixel(&self, angle: ScanAnglePoint) -> (f64, f64) {
        (
            (angle.lambda - self.offset_x) / self.scale_x,
            (angle.theta - self.offset_y) / self.scale_y,
        )
    }

    /// Scan angles to the nearest integer element and line.
    pub fn angle_to_element_line(&self, angle: ScanAnglePoint) -> (i64, i64) {
        let (x, y) = self.angle_to_pixel(angle);
        (round_half_up(x), round_half_up(y))
    }
}

/// floor(value + 0.5)
#[inline]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

impl ScanGeometry {
    /// Fractional FGF coordinates to a geographic point.
    pub fn fgf_to_earth(&self, affine: &FgfAffine, x: f64, y: f64) -> Option<GeodeticPoint> {
        self.sat_to_earth(affine.pixel_to_angle(x, y))
    }

    /// Integer element/line to a geographic point.
    pub fn element_line_to_earth(
        &self,
        affine: &FgfAffine,
        element: i64,
        line: i64,
    ) -> Option<GeodeticPoint> {
        self.fgf_to_earth(affine, element as f64, line as f64)
    }

    /// Geographic point to fractional FGF coordinates.
    pub fn earth_to_fgf(&self, affine: &FgfAffine, point: GeodeticPoint) -> Option<(f64, f64)> {
        self.earth_to_sat(point).map(|angle| affine.angle_to_pixel(angle))
    }

    /// Geographic point to the nearest integer element/line.
    pub fn earth_to_element_line(
        &self,
        affine: &FgfAffine,
        point: GeodeticPoint,
    ) -> Option<(i64, i64)> {
        self.earth_to_sat(point)
            .map(|angle| affine.angle_to_element_line(angle))
    }
}
