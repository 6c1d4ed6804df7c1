//! Configuration for a navigated image.

use crate::adapter::GeosProjection;
use crate::error::{ProjectionError, ProjectionResult};
use crate::fgf::FgfAffine;
use crate::geoid::Geoid;
use crate::geostationary::{ScanConvention, ScanGeometry};
use serde::{Deserialize, Serialize};

/// Navigation configuration for one instrument channel.
///
/// Identifiers are kept as strings so that a bad value surfaces from
/// [`NavigationConfig::validate`] rather than at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Sub-satellite longitude in degrees east.
    pub sub_satellite_longitude: f64,

    /// "GOES" or "GEOS".
    pub scan_convention: String,

    /// "WGS84" or "GRS80"; the convention's default when absent.
    pub geoid: Option<String>,

    /// Orbital radius in km; the convention's default when absent.
    pub orbital_radius_km: Option<f64>,

    /// ABI full-disk resolution used when no explicit FGF mapping is given.
    pub abi_resolution_km: f64,

    /// Explicit FGF scale/offset pairs.
    pub fgf: Option<FgfAffine>,

    /// Image size in pixels. Required with an explicit FGF mapping.
    pub grid_width: Option<usize>,
    pub grid_height: Option<usize>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            sub_satellite_longitude: -75.0,
            scan_convention: "GOES".to_string(),
            geoid: None,
            orbital_radius_km: None,
            abi_resolution_km: 2.0,
            fgf: None,
            grid_width: None,
            grid_height: None,
        }
    }
}

impl NavigationConfig {
    /// Load configuration from `GEONAV_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup, starting from defaults.
    ///
    /// Unparseable numbers are ignored. The FGF mapping is taken only when
    /// all four scale/offset variables are present.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let number = |key: &str| lookup(key).and_then(|v| v.trim().parse::<f64>().ok());
        let size = |key: &str| lookup(key).and_then(|v| v.trim().parse::<usize>().ok());

        if let Some(lon) = number("GEONAV_SUB_LON") {
            config.sub_satellite_longitude = lon;
        }

        if let Some(val) = lookup("GEONAV_SCAN_CONVENTION") {
            config.scan_convention = val;
        }

        if let Some(val) = lookup("GEONAV_GEOID") {
            config.geoid = Some(val);
        }

        config.orbital_radius_km = number("GEONAV_ORBITAL_RADIUS_KM");

        if let Some(res) = number("GEONAV_ABI_RESOLUTION_KM") {
            config.abi_resolution_km = res;
        }

        if let (Some(scale_x), Some(offset_x), Some(scale_y), Some(offset_y)) = (
            number("GEONAV_FGF_SCALE_X"),
            number("GEONAV_FGF_OFFSET_X"),
            number("GEONAV_FGF_SCALE_Y"),
            number("GEONAV_FGF_OFFSET_Y"),
        ) {
            config.fgf = Some(FgfAffine {
                scale_x,
                offset_x,
                scale_y,
                offset_y,
            });
        }

        config.grid_width = size("GEONAV_GRID_WIDTH");
        config.grid_height = size("GEONAV_GRID_HEIGHT");

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.build_geometry().map_err(|e| e.to_string())?;
        self.build_affine().map_err(|e| e.to_string())?;

        match (self.grid_width, self.grid_height) {
            (Some(0), _) | (_, Some(0)) => {
                return Err("grid_width and grid_height must be > 0".to_string())
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err("grid_width and grid_height must be given together".to_string())
            }
            (None, None) if self.fgf.is_some() => {
                return Err("an explicit fgf mapping needs grid_width and grid_height".to_string())
            }
            _ => {}
        }

        Ok(())
    }

    /// Scan geometry described by this configuration.
    pub fn build_geometry(&self) -> ProjectionResult<ScanGeometry> {
        let convention: ScanConvention = self.scan_convention.parse()?;
        let geoid = match &self.geoid {
            Some(name) => Geoid::from_name(name)?,
            None => convention.default_geoid(),
        };
        let h = self
            .orbital_radius_km
            .unwrap_or_else(|| convention.default_orbital_radius_km());
        ScanGeometry::with_orbital_radius(self.sub_satellite_longitude, convention, geoid, h)
    }

    /// FGF mapping: the explicit one, or the ABI full-disk grid.
    pub fn build_affine(&self) -> ProjectionResult<FgfAffine> {
        match &self.fgf {
            Some(f) => FgfAffine::new(f.scale_x, f.offset_x, f.scale_y, f.offset_y),
            None => FgfAffine::abi_full_disk(self.abi_resolution_km)
                .map(|(affine, _)| affine)
                .ok_or_else(|| {
                    ProjectionError::invalid(
                        "abi_resolution_km",
                        format!("expected 0.5, 1 or 2, got {}", self.abi_resolution_km),
                    )
                }),
        }
    }

    /// Image size in pixels (width, height).
    pub fn grid_size(&self) -> ProjectionResult<(usize, usize)> {
        if let (Some(w), Some(h)) = (self.grid_width, self.grid_height) {
            return Ok((w, h));
        }
        if self.fgf.is_some() {
            return Err(ProjectionError::invalid(
                "grid_width",
                "an explicit fgf mapping needs grid_width and grid_height",
            ));
        }
        FgfAffine::abi_full_disk(self.abi_resolution_km)
            .map(|(_, size)| (size, size))
            .ok_or_else(|| {
                ProjectionError::invalid(
                    "abi_resolution_km",
                    format!("expected 0.5, 1 or 2, got {}", self.abi_resolution_km),
                )
            })
    }

    /// Projection adapter over the configured image.
    pub fn build_projection(&self) -> ProjectionResult<GeosProjection> {
        let (width, height) = self.grid_size()?;
        Ok(GeosProjection::for_grid(
            self.build_geometry()?,
            self.build_affine()?,
            width,
            height,
        ))
    }
}
