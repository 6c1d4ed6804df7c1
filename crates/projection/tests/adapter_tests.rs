//! Tests for the map-projection adapter.

use geonav_common::{BoundingBox, GeodeticPoint, ProjectionPoint};
use projection::{
    crosses_seam, FgfAffine, GeosProjection, MapProjection, ScanConvention, ScanGeometry,
};
use test_utils::fixtures::{abi, bbox, places};
use test_utils::{assert_coords_approx_eq, lon_lat_grid, pixel_samples};

fn full_disk(sub_lon: f64, convention: ScanConvention) -> GeosProjection {
    let geometry = ScanGeometry::new(sub_lon, convention).unwrap();
    let (affine, size) = FgfAffine::abi_full_disk(2.0).unwrap();
    GeosProjection::for_grid(geometry, affine, size, size)
}

fn rect((min_x, min_y, max_x, max_y): (f64, f64, f64, f64)) -> BoundingBox {
    BoundingBox::new(min_x, min_y, max_x, max_y)
}

#[test]
fn test_forward_inverse_through_trait_object() {
    let proj: Box<dyn MapProjection> = Box::new(full_disk(-75.0, ScanConvention::Goes));
    let (lon, lat) = places::MIAMI;

    let p = proj.lat_lon_to_proj(GeodeticPoint::new(lon, lat));
    assert!(p.is_valid());
    assert!(proj.default_map_area().contains_point(p.x, p.y));

    let back = proj.proj_to_lat_lon(p);
    assert_coords_approx_eq!((back.longitude, back.latitude), (lon, lat), 1e-6);
}

#[test]
fn test_hidden_points_are_nan() {
    let proj = full_disk(-75.0, ScanConvention::Goes);
    let (lon, lat) = places::TOKYO;
    let p = proj.lat_lon_to_proj(GeodeticPoint::new(lon, lat));
    assert!(p.x.is_nan() && p.y.is_nan());

    // Image corner looks into space
    let g = proj.proj_to_lat_lon(ProjectionPoint::new(0.0, 0.0));
    assert!(g.longitude.is_nan() && g.latitude.is_nan());
    assert!(!proj
        .proj_to_lat_lon(ProjectionPoint::new(f64::NAN, 10.0))
        .is_valid());
}

#[test]
fn test_sampled_pixels_invert_consistently() {
    let proj = full_disk(0.0, ScanConvention::Geos);
    for (e, l) in pixel_samples(5424, 5424, 9) {
        let p = ProjectionPoint::new(e as f64, l as f64);
        let Some(earth) = proj.try_proj_to_lat_lon(p) else {
            continue;
        };
        let q = proj.lat_lon_to_proj(earth);
        assert_coords_approx_eq!((q.x, q.y), (p.x, p.y), 1e-3);
    }
}

#[test]
fn test_conus_rect_fits_in_full_disk() {
    let proj = full_disk(-75.0, ScanConvention::Goes);
    let projected = proj.lat_lon_rect_to_proj_rect(&rect(bbox::CONUS)).unwrap();

    let area = proj.default_map_area();
    assert!(projected.min_x >= area.min_x && projected.max_x <= area.max_x);
    assert!(projected.min_y >= area.min_y && projected.max_y <= area.max_y);
    // North-west corner of CONUS is up and to the left
    assert!(projected.min_x < 1000.0 && projected.min_y < 1000.0, "{:?}", projected);
    assert!(projected.max_x > 3000.0, "{:?}", projected);
}

#[test]
fn test_rect_behind_earth_is_none() {
    let proj = full_disk(-75.0, ScanConvention::Goes);
    assert!(proj
        .lat_lon_rect_to_proj_rect(&rect(bbox::MARITIME_CONTINENT))
        .is_none());
    assert!(proj.lat_lon_rect_to_proj_rect(&rect(bbox::INVALID)).is_none());
}

#[test]
fn test_global_rect_covers_visible_disk() {
    let proj = full_disk(-75.0, ScanConvention::Goes);
    let projected = proj.lat_lon_rect_to_proj_rect(&rect(bbox::GLOBAL)).unwrap();
    assert!(projected.min_x < 100.0 && projected.max_x > 5300.0, "{:?}", projected);
    assert!(projected.min_y < 100.0 && projected.max_y > 5300.0, "{:?}", projected);
}

#[test]
fn test_seam_through_trait() {
    let proj = full_disk(-75.0, ScanConvention::Goes);
    assert!(proj.crosses_seam(
        ProjectionPoint::new(-150.0, 0.0),
        ProjectionPoint::new(150.0, 0.0)
    ));
    assert!(!proj.crosses_seam(
        ProjectionPoint::new(10.0, 0.0),
        ProjectionPoint::new(20.0, 0.0)
    ));
    assert!(crosses_seam(
        ProjectionPoint::new(10.0, 0.0),
        ProjectionPoint::new(f64::INFINITY, 0.0)
    ));
}

#[test]
fn test_segments_between_visible_points_do_not_cross() {
    let proj = full_disk(-75.0, ScanConvention::Goes);
    let points: Vec<ProjectionPoint> = lon_lat_grid(bbox::CONUS, 6)
        .into_iter()
        .map(|(lon, lat)| proj.lat_lon_to_proj(GeodeticPoint::new(lon, lat)))
        .collect();
    for pair in points.windows(2) {
        assert!(!proj.crosses_seam(pair[0], pair[1]));
    }
}

#[test]
fn test_equality_is_over_configuration() {
    let a = full_disk(-75.0, ScanConvention::Goes);
    let b = full_disk(-75.0, ScanConvention::Goes);
    assert_eq!(a, b);

    assert_ne!(a, full_disk(-75.2, ScanConvention::Goes));
    assert_ne!(a, full_disk(-75.0, ScanConvention::Geos));

    let geometry = ScanGeometry::new(-75.0, ScanConvention::Goes).unwrap();
    let conus = FgfAffine::new(
        abi::CONUS_2KM.scale_x,
        abi::CONUS_2KM.offset_x,
        abi::CONUS_2KM.scale_y,
        abi::CONUS_2KM.offset_y,
    )
    .unwrap();
    let sector = GeosProjection::for_grid(geometry, conus, 2500, abi::CONUS_2KM_HEIGHT);
    assert_ne!(a, sector);
    assert_eq!(a.geometry(), sector.geometry());
}

#[test]
fn test_conus_sector_geographic_bounds() {
    let geometry = ScanGeometry::new(-75.0, ScanConvention::Goes).unwrap();
    let conus = FgfAffine::new(
        abi::CONUS_2KM.scale_x,
        abi::CONUS_2KM.offset_x,
        abi::CONUS_2KM.scale_y,
        abi::CONUS_2KM.offset_y,
    )
    .unwrap();
    let sector = GeosProjection::for_grid(geometry, conus, 2500, abi::CONUS_2KM_HEIGHT);
    let bounds = sector.geographic_bounds().unwrap();

    let (lon, lat) = places::KANSAS;
    assert!(bounds.contains_point(lon, lat), "{:?}", bounds);
    assert!(sector.contains(GeodeticPoint::new(lon, lat)));
    let (lon, lat) = places::BUENOS_AIRES;
    assert!(!sector.contains(GeodeticPoint::new(lon, lat)));
}
