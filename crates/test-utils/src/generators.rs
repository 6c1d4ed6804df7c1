//! Sample point generators.
//!
//! Deterministic point sets for sweeping the navigation code over an area.

/// Regular grid of (longitude, latitude) points, edges included.
///
/// # Example
///
/// ```
/// use test_utils::lon_lat_grid;
///
/// let points = lon_lat_grid((-10.0, -5.0, 10.0, 5.0), 3);
/// assert_eq!(points.len(), 9);
/// assert_eq!(points[0], (-10.0, -5.0));
/// assert_eq!(points[8], (10.0, 5.0));
/// ```
pub fn lon_lat_grid(bbox: (f64, f64, f64, f64), per_axis: usize) -> Vec<(f64, f64)> {
    let (min_lon, min_lat, max_lon, max_lat) = bbox;
    let n = per_axis.max(2);
    let mut points = Vec::with_capacity(n * n);
    for j in 0..n {
        let lat = min_lat + (max_lat - min_lat) * j as f64 / (n - 1) as f64;
        for i in 0..n {
            let lon = min_lon + (max_lon - min_lon) * i as f64 / (n - 1) as f64;
            points.push((lon, lat));
        }
    }
    points
}

/// Points within `radius_deg` of the sub-satellite point in both
/// longitude and latitude, longitudes wrapped into [-180, 180].
pub fn points_near_nadir(sub_lon: f64, radius_deg: f64, per_axis: usize) -> Vec<(f64, f64)> {
    lon_lat_grid(
        (
            sub_lon - radius_deg,
            -radius_deg,
            sub_lon + radius_deg,
            radius_deg,
        ),
        per_axis,
    )
    .into_iter()
    .map(|(lon, lat)| (wrap_longitude(lon), lat))
    .collect()
}

/// Wrap a longitude into [-180, 180].
pub fn wrap_longitude(lon: f64) -> f64 {
    let mut lon = lon % 360.0;
    if lon > 180.0 {
        lon -= 360.0;
    } else if lon < -180.0 {
        lon += 360.0;
    }
    lon
}

/// Integer (element, line) samples spread over a `width` x `height` image.
pub fn pixel_samples(width: usize, height: usize, per_axis: usize) -> Vec<(usize, usize)> {
    let n = per_axis.max(2);
    let mut pixels = Vec::with_capacity(n * n);
    for j in 0..n {
        let line = (height.saturating_sub(1)) * j / (n - 1);
        for i in 0..n {
            let element = (width.saturating_sub(1)) * i / (n - 1);
            pixels.push((element, line));
        }
    }
    pixels
}
