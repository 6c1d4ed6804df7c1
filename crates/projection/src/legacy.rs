//! Fixed-window FGF navigation.
//!
//! An older navigation scheme that covers a fixed ±8.88 degree scan window
//! with integer element/line indices counted from the window's north-west
//! corner. Scan angles are GEOS axes on a slightly different ellipsoid and
//! orbit (`h = 35786 + r_eq`). Element/line indices address the corner of
//! a pixel; [`FgfNavigation::element_line_to_earth`] navigates the pixel
//! centre by adding half a step.

use crate::error::{ProjectionError, ProjectionResult};
use crate::geoid::{Geoid, GeoidId};
use crate::geostationary::{ScanConvention, ScanGeometry};
use crate::locations::EarthLocations;
use crate::satellite::{self, SatelliteSeries, TableEntry};
use geonav_common::{GeodeticPoint, ScanAnglePoint};
use serde::Serialize;
use tracing::{debug, warn};

/// Half-width of the scan window in both axes (degrees).
pub const WINDOW_HALF_ANGLE_DEG: f64 = 8.88;

/// Satellite altitude above the equator (km).
pub const GEOSTATIONARY_ALTITUDE_KM: f64 = 35786.0;

/// Ellipsoid the fixed-window scheme navigates against.
pub const FIXED_WINDOW_GEOID: Geoid = Geoid {
    id: GeoidId::Custom,
    equatorial_radius_km: 6378.1380,
    polar_radius_km: 6356.7523,
    flattening: 1.0 / 298.257222,
};

/// Largest number of steps either axis of the window may hold.
pub const MAX_AXIS_STEPS: usize = 1 << 20;

/// One scan axis of the window, snapped to whole steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScanAxis {
    /// Scan angle of index 0 (radians)
    pub start: f64,
    /// Signed step per index (radians); points from start toward end
    pub step: f64,
    /// Pixel-centre offset (radians)
    pub offset: f64,
    pub count: usize,
}

impl ScanAxis {
    /// Snap `[start, end]` to integral multiples of `step`, truncating
    /// toward zero. A window that runs against the step flips the step
    /// and the centre offset so that indices still count up from `start`.
    fn snapped(
        param: &'static str,
        start: f64,
        end: f64,
        step: f64,
        offset: f64,
    ) -> ProjectionResult<Self> {
        if !step.is_finite() || step == 0.0 {
            return Err(ProjectionError::invalid(
                param,
                format!("must be finite and non-zero, got {}", step),
            ));
        }

        if (end - start).abs() / step.abs() > MAX_AXIS_STEPS as f64 {
            return Err(ProjectionError::invalid(
                param,
                format!("step {} gives more than {} pixels", step, MAX_AXIS_STEPS),
            ));
        }

        let start_idx = (start / step).trunc() as i64;
        let end_idx = (end / step).trunc() as i64;
        let start = start_idx as f64 * step;
        let count = end_idx.checked_sub(start_idx).ok_or_else(|| {
            ProjectionError::invalid(param, format!("step {} overflows the window", step))
        })?;

        let axis = if count < 0 {
            ScanAxis {
                start,
                step: -step,
                offset: -offset,
                count: (-count) as usize,
            }
        } else {
            ScanAxis {
                start,
                step,
                offset,
                count: count as usize,
            }
        };
        Ok(axis)
    }

    #[inline]
    fn angle(&self, index: i64) -> f64 {
        index as f64 * self.step + self.start
    }

    #[inline]
    fn index(&self, angle: f64) -> i64 {
        ((angle - self.start) / self.step) as i64
    }
}

/// Navigation over the fixed ±8.88 degree window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FgfNavigation {
    geometry: ScanGeometry,
    lambda: ScanAxis,
    theta: ScanAxis,
    /// Nadir resolution of the channel, when known (km)
    resolution_km: Option<f64>,
}

impl FgfNavigation {
    /// Window with the given east-west and north-south steps (radians).
    pub fn new(
        sub_lon_deg: f64,
        del_lambda: f64,
        del_theta: f64,
        resolution_km: Option<f64>,
    ) -> ProjectionResult<Self> {
        let geometry = ScanGeometry::with_orbital_radius(
            sub_lon_deg,
            ScanConvention::Geos,
            FIXED_WINDOW_GEOID,
            GEOSTATIONARY_ALTITUDE_KM + FIXED_WINDOW_GEOID.equatorial_radius_km,
        )?;

        let half = WINDOW_HALF_ANGLE_DEG.to_radians();
        // Both axes share a centre offset of half the east-west step
        let offset = del_lambda * 0.5;
        let lambda = ScanAxis::snapped("del_lambda", -half, half, del_lambda, offset)?;
        let theta = ScanAxis::snapped("del_theta", half, -half, del_theta, offset)?;

        debug!(
            sub_lon = sub_lon_deg,
            elements = lambda.count,
            lines = theta.count,
            "Built fixed-window navigation"
        );

        Ok(Self {
            geometry,
            lambda,
            theta,
            resolution_km,
        })
    }

    /// GOES-East 2 km window.
    pub fn goes_east() -> ProjectionResult<Self> {
        Self::new(-75.0, 56e-6, 56e-6, Some(2.0))
    }

    /// Square pixels: the same step on both axes.
    pub fn from_step(sub_lon_deg: f64, del: f64) -> ProjectionResult<Self> {
        Self::new(sub_lon_deg, del, del, None)
    }

    /// Window for one channel of a catalogued spacecraft.
    pub fn for_satellite(series: &str, number: u32, channel: u32) -> ProjectionResult<Self> {
        let unavailable = |reason: &'static str| {
            warn!(series, number, channel, reason, "No navigation metadata");
            ProjectionError::MetadataUnavailable {
                series: series.to_string(),
                number,
                channel,
                reason,
            }
        };

        let parsed =
            SatelliteSeries::from_name(series).ok_or_else(|| unavailable("unknown series"))?;
        let nav = match satellite::channel_navigation(parsed, number, channel) {
            TableEntry::Available(nav) => nav,
            TableEntry::NonOperational => {
                return Err(unavailable("satellite is not operational"))
            }
            TableEntry::Unknown => {
                return Err(unavailable("satellite or channel not catalogued"))
            }
        };

        let del = satellite::grid_radians_from_resolution(nav.resolution_km);
        Self::new(nav.sub_satellite_longitude, del, del, Some(nav.resolution_km))
    }

    pub fn geometry(&self) -> &ScanGeometry {
        &self.geometry
    }

    pub fn lambda_axis(&self) -> &ScanAxis {
        &self.lambda
    }

    pub fn theta_axis(&self) -> &ScanAxis {
        &self.theta
    }

    pub fn resolution_km(&self) -> Option<f64> {
        self.resolution_km
    }

    /// Number of elements (east-west) in the window.
    pub fn elements(&self) -> usize {
        self.lambda.count
    }

    /// Number of lines (north-south) in the window.
    pub fn lines(&self) -> usize {
        self.theta.count
    }

    /// Scan angles at the corner of a pixel.
    pub fn element_line_to_sat(&self, element: i64, line: i64) -> ScanAnglePoint {
        ScanAnglePoint::new(self.lambda.angle(element), self.theta.angle(line))
    }

    /// Pixel containing the given scan angles (truncating).
    pub fn sat_to_element_line(&self, angle: ScanAnglePoint) -> (i64, i64) {
        (self.lambda.index(angle.lambda), self.theta.index(angle.theta))
    }

    pub fn earth_to_sat(&self, point: GeodeticPoint) -> Option<ScanAnglePoint> {
        self.geometry.earth_to_sat(point)
    }

    pub fn sat_to_earth(&self, angle: ScanAnglePoint) -> Option<GeodeticPoint> {
        self.geometry.sat_to_earth(angle)
    }

    /// Geographic location of a pixel centre.
    pub fn element_line_to_earth(&self, element: i64, line: i64) -> Option<GeodeticPoint> {
        let corner = self.element_line_to_sat(element, line);
        self.sat_to_earth(ScanAnglePoint::new(
            corner.lambda + self.lambda.offset,
            corner.theta + self.theta.offset,
        ))
    }

    /// Pixel containing a geographic point.
    pub fn earth_to_element_line(&self, point: GeodeticPoint) -> Option<(i64, i64)> {
        self.earth_to_sat(point)
            .map(|angle| self.sat_to_element_line(angle))
    }

    /// Navigate every pixel of the window.
    pub fn earth_locations(&self) -> ProjectionResult<EarthLocations> {
        EarthLocations::compute(self.elements(), self.lines(), |element, line| {
            self.element_line_to_earth(element as i64, line as i64)
        })
    }
}
