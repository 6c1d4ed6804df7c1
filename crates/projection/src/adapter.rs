//! Map-projection adapter for geostationary imagery.
//!
//! Presents a [`ScanGeometry`] plus an [`FgfAffine`] behind the generic
//! [`MapProjection`] contract used by mapping layers. The projected plane
//! is the fractional FGF element/line plane of the image.

use crate::fgf::FgfAffine;
use crate::geostationary::ScanGeometry;
use geonav_common::{BoundingBox, GeodeticPoint, ProjectionPoint};

/// Minimum X separation (projection units) for a segment to count as
/// crossing the seam.
pub const SEAM_THRESHOLD: f64 = 100.0;

/// Samples per axis when converting a rectangle between planes.
const RECT_SAMPLES: usize = 32;

/// Trait for map projections used by a mapping/rendering layer.
pub trait MapProjection: Send + Sync {
    /// Human-readable projection name.
    fn name(&self) -> String;

    /// Forward: geographic -> projected. Non-visible points come back as NaN.
    fn lat_lon_to_proj(&self, point: GeodeticPoint) -> ProjectionPoint;

    /// Inverse: projected -> geographic. Off-disk points come back as NaN.
    fn proj_to_lat_lon(&self, point: ProjectionPoint) -> GeodeticPoint;

    /// True if a line from `a` to `b` should not be drawn directly.
    fn crosses_seam(&self, a: ProjectionPoint, b: ProjectionPoint) -> bool {
        crosses_seam(a, b)
    }

    /// The natural extent of the projected plane.
    fn default_map_area(&self) -> BoundingBox;

    /// Convert a geographic rectangle to the projected plane.
    ///
    /// The rectangle is sampled on a regular grid; returns None when no
    /// sample is visible.
    fn lat_lon_rect_to_proj_rect(&self, rect: &BoundingBox) -> Option<BoundingBox> {
        if !rect.is_valid() {
            return None;
        }
        let points = sample_rect(rect, RECT_SAMPLES)
            .map(|(x, y)| self.lat_lon_to_proj(GeodeticPoint::new(x, y)))
            .map(|p| (p.x, p.y));
        BoundingBox::enclosing(points)
    }
}

/// Seam test shared by all projections.
///
/// A segment crosses the seam if either end is undefined, or if the ends
/// have opposite-signed X more than [`SEAM_THRESHOLD`] apart.
pub fn crosses_seam(a: ProjectionPoint, b: ProjectionPoint) -> bool {
    if !a.is_valid() || !b.is_valid() {
        return true;
    }
    a.x * b.x < 0.0 && (a.x - b.x).abs() > SEAM_THRESHOLD
}

/// Regular grid of (x, y) samples covering a rectangle, edges included.
fn sample_rect(rect: &BoundingBox, samples: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
    let steps = samples.max(1);
    (0..=steps).flat_map(move |j| {
        let y = rect.min_y + rect.height() * j as f64 / steps as f64;
        (0..=steps).map(move |i| (rect.min_x + rect.width() * i as f64 / steps as f64, y))
    })
}

/// Geostationary projection over an FGF image plane.
///
/// Two projections are equal when every configuration parameter is equal
/// (geometry, FGF mapping and map area).
#[derive(Debug, Clone, PartialEq)]
pub struct GeosProjection {
    geometry: ScanGeometry,
    affine: FgfAffine,
    map_area: BoundingBox,
}

impl GeosProjection {
    pub fn new(geometry: ScanGeometry, affine: FgfAffine, map_area: BoundingBox) -> Self {
        Self {
            geometry,
            affine,
            map_area,
        }
    }

    /// Projection whose map area is an image of `width` x `height` pixels
    /// starting at element/line (0, 0).
    pub fn for_grid(geometry: ScanGeometry, affine: FgfAffine, width: usize, height: usize) -> Self {
        Self::new(
            geometry,
            affine,
            BoundingBox::new(0.0, 0.0, width as f64, height as f64),
        )
    }

    pub fn geometry(&self) -> &ScanGeometry {
        &self.geometry
    }

    pub fn affine(&self) -> &FgfAffine {
        &self.affine
    }

    /// Forward conversion that keeps visibility information.
    pub fn try_lat_lon_to_proj(&self, point: GeodeticPoint) -> Option<ProjectionPoint> {
        self.geometry
            .earth_to_fgf(&self.affine, point)
            .map(|(x, y)| ProjectionPoint::new(x, y))
    }

    /// Inverse conversion that keeps visibility information.
    pub fn try_proj_to_lat_lon(&self, point: ProjectionPoint) -> Option<GeodeticPoint> {
        if !point.is_valid() {
            return None;
        }
        self.geometry.fgf_to_earth(&self.affine, point.x, point.y)
    }

    /// Geographic envelope of the visible part of the map area.
    ///
    /// x is longitude and y latitude. None if no part of the map area sees
    /// the earth.
    pub fn geographic_bounds(&self) -> Option<BoundingBox> {
        let points = sample_rect(&self.map_area, 50)
            .filter_map(|(x, y)| self.try_proj_to_lat_lon(ProjectionPoint::new(x, y)))
            .map(|p| (p.longitude, p.latitude));
        BoundingBox::enclosing(points)
    }

    /// Check if a geographic point is visible and falls inside the map area.
    pub fn contains(&self, point: GeodeticPoint) -> bool {
        self.try_lat_lon_to_proj(point)
            .map(|p| self.map_area.contains_point(p.x, p.y))
            .unwrap_or(false)
    }
}

impl MapProjection for GeosProjection {
    fn name(&self) -> String {
        format!(
            "geostationary {} {:.2} ({})",
            self.geometry.convention(),
            self.geometry.sub_satellite_longitude(),
            self.geometry.geoid().id
        )
    }

    fn lat_lon_to_proj(&self, point: GeodeticPoint) -> ProjectionPoint {
        self.try_lat_lon_to_proj(point)
            .unwrap_or_else(ProjectionPoint::nan)
    }

    fn proj_to_lat_lon(&self, point: ProjectionPoint) -> GeodeticPoint {
        self.try_proj_to_lat_lon(point)
            .unwrap_or_else(GeodeticPoint::nan)
    }

    fn default_map_area(&self) -> BoundingBox {
        self.map_area
    }
}
