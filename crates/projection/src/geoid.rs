//! Reference ellipsoids used by geostationary imager navigation.
//!
//! Radii are in kilometres. The two named ellipsoids share their radii and
//! differ only in flattening; operators publish navigation against one or
//! the other (GOES-R ABI against GRS80, MSG SEVIRI against WGS84).

use crate::error::{ProjectionError, ProjectionResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Identifier of a reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GeoidId {
    Wgs84,
    Grs80,
    /// Built from grid-mapping attributes rather than a named constant
    Custom,
}

impl FromStr for GeoidId {
    type Err = ProjectionError;

    /// Accepts the named ellipsoids only; a custom ellipsoid has no name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WGS84" | "WGS-84" => Ok(GeoidId::Wgs84),
            "GRS80" | "GRS-80" => Ok(GeoidId::Grs80),
            _ => Err(ProjectionError::UnknownGeoid(s.to_string())),
        }
    }
}

impl fmt::Display for GeoidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeoidId::Wgs84 => "WGS84",
            GeoidId::Grs80 => "GRS80",
            GeoidId::Custom => "custom",
        };
        write!(f, "{}", name)
    }
}

/// Earth ellipsoid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geoid {
    pub id: GeoidId,
    /// Semi-major axis (km)
    pub equatorial_radius_km: f64,
    /// Semi-minor axis (km)
    pub polar_radius_km: f64,
    /// Flattening (dimensionless)
    pub flattening: f64,
}

impl Geoid {
    pub const WGS84: Geoid = Geoid {
        id: GeoidId::Wgs84,
        equatorial_radius_km: 6378.1370,
        polar_radius_km: 6356.7523,
        flattening: 1.0 / 298.257223563,
    };

    pub const GRS80: Geoid = Geoid {
        id: GeoidId::Grs80,
        equatorial_radius_km: 6378.1370,
        polar_radius_km: 6356.7523,
        flattening: 1.0 / 298.257222101,
    };

    /// Look up a named ellipsoid.
    pub fn named(id: GeoidId) -> Option<Geoid> {
        match id {
            GeoidId::Wgs84 => Some(Self::WGS84),
            GeoidId::Grs80 => Some(Self::GRS80),
            GeoidId::Custom => None,
        }
    }

    /// Look up a named ellipsoid by identifier string ("WGS84", "GRS80").
    pub fn from_name(name: &str) -> ProjectionResult<Geoid> {
        let id: GeoidId = name.parse()?;
        Self::named(id).ok_or_else(|| ProjectionError::UnknownGeoid(name.to_string()))
    }

    /// Build an ellipsoid from CF grid-mapping attributes given in metres.
    ///
    /// When `inverse_flattening` is absent the flattening is derived from
    /// the two axes.
    pub fn from_axes_m(
        semi_major_axis_m: f64,
        semi_minor_axis_m: f64,
        inverse_flattening: Option<f64>,
    ) -> ProjectionResult<Geoid> {
        if !(semi_major_axis_m.is_finite() && semi_major_axis_m > 0.0) {
            return Err(ProjectionError::invalid(
                "semi_major_axis",
                format!("must be positive, got {}", semi_major_axis_m),
            ));
        }
        if !(semi_minor_axis_m.is_finite() && semi_minor_axis_m > 0.0) {
            return Err(ProjectionError::invalid(
                "semi_minor_axis",
                format!("must be positive, got {}", semi_minor_axis_m),
            ));
        }
        if semi_minor_axis_m > semi_major_axis_m {
            return Err(ProjectionError::invalid(
                "semi_minor_axis",
                format!(
                    "{} exceeds semi_major_axis {}",
                    semi_minor_axis_m, semi_major_axis_m
                ),
            ));
        }

        let flattening = match inverse_flattening {
            Some(invf) if invf.is_finite() && invf > 1.0 => 1.0 / invf,
            Some(invf) => {
                return Err(ProjectionError::invalid(
                    "inverse_flattening",
                    format!("must be greater than 1, got {}", invf),
                ))
            }
            None => 1.0 - semi_minor_axis_m / semi_major_axis_m,
        };

        Ok(Geoid {
            id: GeoidId::Custom,
            equatorial_radius_km: semi_major_axis_m / 1000.0,
            polar_radius_km: semi_minor_axis_m / 1000.0,
            flattening,
        })
    }

    pub fn inverse_flattening(&self) -> f64 {
        1.0 / self.flattening
    }

    /// (r_pol / r_eq)^2, the geographic to geocentric latitude factor.
    #[inline]
    pub fn polar_ratio_squared(&self) -> f64 {
        (self.polar_radius_km * self.polar_radius_km)
            / (self.equatorial_radius_km * self.equatorial_radius_km)
    }

    /// First eccentricity squared from the radii: (r_eq^2 - r_pol^2) / r_eq^2
    #[inline]
    pub fn eccentricity_squared(&self) -> f64 {
        1.0 - self.polar_ratio_squared()
    }

    /// 1 / (1 - f)^2
    #[inline]
    pub fn fp(&self) -> f64 {
        1.0 / ((1.0 - self.flattening) * (1.0 - self.flattening))
    }
}
