//! Per-pixel earth locations for a whole navigation grid.
//!
//! Longitudes and latitudes are stored row-major as f64 with NaN for
//! pixels that do not see the earth. A packed validity bitmap records
//! which pixels were navigated so callers can skip the NaN checks.
//!
//! Rows are computed in parallel with rayon; each task owns one row.

use crate::error::{ProjectionError, ProjectionResult};
use crate::fgf::FgfAffine;
use crate::geostationary::ScanGeometry;
use geonav_common::GeodeticPoint;
use rayon::prelude::*;

/// Navigated longitude/latitude for every pixel of a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthLocations {
    pub width: usize,
    pub height: usize,
    /// Longitudes (degrees), `longitudes[line * width + element]`
    pub longitudes: Vec<f64>,
    /// Latitudes (degrees), same layout as `longitudes`
    pub latitudes: Vec<f64>,
    /// Bit N is 1 if pixel N sees the earth.
    pub valid_bitmap: Vec<u64>,
}

impl EarthLocations {
    /// Navigate every (element, line) of a `width` x `height` grid.
    ///
    /// `locate` is called once per pixel from rayon worker threads.
    /// Fails if `width * height` overflows.
    pub fn compute<F>(width: usize, height: usize, locate: F) -> ProjectionResult<Self>
    where
        F: Fn(usize, usize) -> Option<GeodeticPoint> + Sync,
    {
        let pixels = width.checked_mul(height).ok_or_else(|| {
            ProjectionError::invalid("height", format!("{} x {} pixels overflows", width, height))
        })?;
        let mut longitudes = vec![f64::NAN; pixels];
        let mut latitudes = vec![f64::NAN; pixels];

        if width > 0 {
            longitudes
                .par_chunks_mut(width)
                .zip(latitudes.par_chunks_mut(width))
                .enumerate()
                .for_each(|(line, (lon_row, lat_row))| {
                    for element in 0..width {
                        if let Some(p) = locate(element, line) {
                            lon_row[element] = p.longitude;
                            lat_row[element] = p.latitude;
                        }
                    }
                });
        }

        // Bits are set serially; words would otherwise be shared between rows
        let mut valid_bitmap = vec![0u64; pixels.div_ceil(64)];
        for (idx, lon) in longitudes.iter().enumerate() {
            if !lon.is_nan() {
                valid_bitmap[idx / 64] |= 1u64 << (idx % 64);
            }
        }

        Ok(Self {
            width,
            height,
            longitudes,
            latitudes,
            valid_bitmap,
        })
    }

    /// Earth locations of an FGF image, pixel (0, 0) at element/line 0.
    pub fn for_fgf_grid(
        geometry: &ScanGeometry,
        affine: &FgfAffine,
        width: usize,
        height: usize,
    ) -> ProjectionResult<Self> {
        Self::compute(width, height, |element, line| {
            geometry.fgf_to_earth(affine, element as f64, line as f64)
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn index(&self, element: usize, line: usize) -> usize {
        line * self.width + element
    }

    /// Check if a pixel sees the earth.
    #[inline]
    pub fn is_valid(&self, pixel_idx: usize) -> bool {
        if pixel_idx >= self.len() {
            return false;
        }
        let word_idx = pixel_idx / 64;
        let bit_idx = pixel_idx % 64;
        (self.valid_bitmap[word_idx] & (1u64 << bit_idx)) != 0
    }

    /// Location of a pixel, None if it does not see the earth.
    #[inline]
    pub fn get(&self, element: usize, line: usize) -> Option<GeodeticPoint> {
        if element >= self.width || line >= self.height {
            return None;
        }
        let idx = self.index(element, line);
        if self.is_valid(idx) {
            Some(GeodeticPoint::new(self.longitudes[idx], self.latitudes[idx]))
        } else {
            None
        }
    }

    /// Count pixels that see the earth.
    pub fn valid_count(&self) -> usize {
        self.valid_bitmap
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geostationary::ScanConvention;

    #[test]
    fn test_bitmap_tracks_locator() {
        // Checkerboard over a 10 x 7 grid; 70 pixels spans two bitmap words
        let grid = EarthLocations::compute(10, 7, |e, l| {
            if (e + l) % 2 == 0 {
                Some(GeodeticPoint::new(e as f64, l as f64))
            } else {
                None
            }
        })
        .unwrap();
        assert_eq!(grid.len(), 70);
        assert_eq!(grid.valid_bitmap.len(), 2);
        assert_eq!(grid.valid_count(), 35);

        assert_eq!(grid.get(4, 6), Some(GeodeticPoint::new(4.0, 6.0)));
        assert_eq!(grid.get(3, 6), None);
        assert!(grid.latitudes[grid.index(3, 6)].is_nan());
        assert!(!grid.is_valid(70));
        assert_eq!(grid.get(10, 0), None);
    }

    #[test]
    fn test_empty_grid() {
        let grid = EarthLocations::compute(0, 5, |_, _| None).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.valid_count(), 0);
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let result = EarthLocations::compute(usize::MAX, 2, |_, _| None);
        assert!(matches!(
            result,
            Err(ProjectionError::InvalidParameter { param: "height", .. })
        ));
    }

    #[test]
    fn test_fgf_grid_matches_single_conversions() {
        let geometry = ScanGeometry::new(-75.0, ScanConvention::Goes).unwrap();
        // 2 km ABI spacing, coarsened 100x so a small grid spans the disk
        let affine = FgfAffine::new(5.6e-3, -0.151844, -5.6e-3, 0.151844).unwrap();
        let grid = EarthLocations::for_fgf_grid(&geometry, &affine, 55, 55).unwrap();

        assert!(grid.valid_count() > 0);
        assert!(grid.valid_count() < 55 * 55);
        // Corner looks past the limb
        assert!(grid.get(0, 0).is_none());

        for (e, l) in [(27, 27), (10, 30), (40, 12)] {
            let expected = geometry.fgf_to_earth(&affine, e as f64, l as f64).unwrap();
            assert_eq!(grid.get(e, l), Some(expected));
        }
    }
}
