//! Tests for scan-geometry navigation and the FGF mapping.

use geonav_common::{GeodeticPoint, ScanAnglePoint};
use projection::{FgfAffine, Geoid, ScanConvention, ScanGeometry};
use proptest::prelude::*;
use test_utils::fixtures::{abi, places, sub_lon};
use test_utils::{assert_approx_eq, longitude_difference, points_near_nadir};

fn geometry(sub_lon: f64, convention: ScanConvention) -> ScanGeometry {
    ScanGeometry::new(sub_lon, convention).unwrap()
}

fn affine(grid: abi::FixedGrid) -> FgfAffine {
    FgfAffine::new(grid.scale_x, grid.offset_x, grid.scale_y, grid.offset_y).unwrap()
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_roundtrip_near_nadir_all_satellites() {
    for convention in [ScanConvention::Goes, ScanConvention::Geos] {
        for sub in [
            sub_lon::GOES_EAST,
            sub_lon::GOES_WEST,
            sub_lon::MSG_PRIME,
            sub_lon::HIMAWARI,
        ] {
            let geom = geometry(sub, convention);
            for (lon, lat) in points_near_nadir(sub, 55.0, 12) {
                let scan = geom
                    .earth_to_sat(GeodeticPoint::new(lon, lat))
                    .unwrap_or_else(|| panic!("({}, {}) hidden from {}", lon, lat, sub));
                let back = geom.sat_to_earth(scan).unwrap();
                assert_approx_eq!(longitude_difference(back.longitude, lon), 0.0, 1e-6);
                assert_approx_eq!(back.latitude, lat, 1e-6);
            }
        }
    }
}

#[test]
fn test_reference_places() {
    let east = geometry(sub_lon::GOES_EAST, ScanConvention::Goes);
    let msg = geometry(sub_lon::MSG_PRIME, ScanConvention::Geos);
    let himawari = geometry(sub_lon::HIMAWARI, ScanConvention::Geos);

    for (lon, lat) in [places::KANSAS, places::MIAMI, places::BUENOS_AIRES] {
        assert!(east.is_visible(GeodeticPoint::new(lon, lat)));
    }
    for (lon, lat) in [places::LONDON, places::NAIROBI] {
        assert!(msg.is_visible(GeodeticPoint::new(lon, lat)));
    }
    for (lon, lat) in [places::TOKYO, places::SYDNEY] {
        assert!(himawari.is_visible(GeodeticPoint::new(lon, lat)));
        assert!(!east.is_visible(GeodeticPoint::new(lon, lat)));
    }
    // Honolulu is on the far side for MSG only
    let (lon, lat) = places::HONOLULU;
    assert!(himawari.is_visible(GeodeticPoint::new(lon, lat)));
    assert!(!msg.is_visible(GeodeticPoint::new(lon, lat)));
}

#[test]
fn test_kansas_scan_angles() {
    let geom = geometry(sub_lon::GOES_EAST, ScanConvention::Goes);
    let (lon, lat) = places::KANSAS;
    let scan = geom.earth_to_sat(GeodeticPoint::new(lon, lat)).unwrap();
    assert_approx_eq!(scan.lambda, -0.044983, 1e-5);
    assert_approx_eq!(scan.theta, 0.106062, 1e-5);
}

#[test]
fn test_inverse_longitude_always_normalized() {
    for sub in [-180.0, -179.5, 179.5, 180.0] {
        let geom = geometry(sub, ScanConvention::Geos);
        for lambda in [-0.14, -0.07, 0.0, 0.07, 0.14] {
            for theta in [-0.1, 0.0, 0.1] {
                if let Some(p) = geom.sat_to_earth(ScanAnglePoint::new(lambda, theta)) {
                    assert!(
                        (-180.0..=180.0).contains(&p.longitude),
                        "sub {} gave {}",
                        sub,
                        p.longitude
                    );
                }
            }
        }
    }
}

#[test]
fn test_far_side_of_earth_not_visible() {
    for convention in [ScanConvention::Goes, ScanConvention::Geos] {
        for sub in [-75.0, 0.0, 140.7] {
            let geom = geometry(sub, convention);
            let antipode = if sub > 0.0 { sub - 180.0 } else { sub + 180.0 };
            assert!(geom.earth_to_sat(GeodeticPoint::new(antipode, 0.0)).is_none());
            assert!(geom.earth_to_sat(GeodeticPoint::new(antipode, 30.0)).is_none());
        }
    }
}

#[test]
fn test_scan_angle_off_disk() {
    for convention in [ScanConvention::Goes, ScanConvention::Geos] {
        let geom = geometry(-75.0, convention);
        assert!(geom.sat_to_earth(ScanAnglePoint::new(0.5, 0.5)).is_none());
        // Just beyond the limb on each axis
        assert!(geom.sat_to_earth(ScanAnglePoint::new(0.153, 0.0)).is_none());
        assert!(geom.sat_to_earth(ScanAnglePoint::new(0.0, -0.153)).is_none());
        // Just inside
        assert!(geom.sat_to_earth(ScanAnglePoint::new(0.15, 0.0)).is_some());
    }
}

#[test]
fn test_geoid_choice_shifts_latitude_slightly() {
    let grs = ScanGeometry::with_geoid(-75.0, ScanConvention::Goes, Geoid::GRS80).unwrap();
    let wgs = ScanGeometry::with_geoid(-75.0, ScanConvention::Goes, Geoid::WGS84).unwrap();
    let scan = ScanAnglePoint::new(-0.05, 0.1);
    let a = grs.sat_to_earth(scan).unwrap();
    let b = wgs.sat_to_earth(scan).unwrap();
    assert_approx_eq!(a.longitude, b.longitude, 1e-9);
    assert_approx_eq!(a.latitude, b.latitude, 1e-5);
    assert_ne!(grs, wgs);
}

// ============================================================================
// FGF pixels
// ============================================================================

#[test]
fn test_abi_fixture_matches_builtin_grids() {
    for grid in abi::ALL {
        let (builtin, size) = FgfAffine::abi_full_disk(grid.resolution_km).unwrap();
        assert_eq!(builtin, affine(grid));
        assert_eq!(size, grid.size);
    }
}

#[test]
fn test_kansas_in_conus_sector() {
    let geom = geometry(sub_lon::GOES_EAST, ScanConvention::Goes);
    let conus = affine(abi::CONUS_2KM);
    let (lon, lat) = places::KANSAS;

    let (x, y) = geom.earth_to_fgf(&conus, GeodeticPoint::new(lon, lat)).unwrap();
    assert_approx_eq!(x, 1006.23, 0.05);
    assert_approx_eq!(y, 395.54, 0.05);

    let (element, line) = geom
        .earth_to_element_line(&conus, GeodeticPoint::new(lon, lat))
        .unwrap();
    assert_eq!((element, line), (1006, 396));
}

#[test]
fn test_full_disk_pixel_roundtrip_every_resolution() {
    let geom = geometry(sub_lon::GOES_EAST, ScanConvention::Goes);
    for grid in abi::ALL {
        let affine = affine(grid);
        let quarter = (grid.size / 4) as i64;
        for (e, l) in [(quarter, quarter), (2 * quarter, quarter), (3 * quarter, 3 * quarter)] {
            let earth = geom.element_line_to_earth(&affine, e, l).unwrap();
            assert_eq!(geom.earth_to_element_line(&affine, earth), Some((e, l)));
        }
    }
}

#[test]
fn test_roundtrip_toward_the_limb() {
    for convention in [ScanConvention::Goes, ScanConvention::Geos] {
        let geom = geometry(sub_lon::GOES_EAST, convention);
        for (lon, lat) in [(-75.0, 78.0), (-35.0, 78.0), (-75.0, -78.0), (-115.0, 75.0)] {
            let scan = geom.earth_to_sat(GeodeticPoint::new(lon, lat)).unwrap();
            let back = geom.sat_to_earth(scan).unwrap();
            assert!(
                longitude_difference(back.longitude, lon).abs() < 1e-4,
                "{:?} from ({}, {})",
                back,
                lon,
                lat
            );
            assert!((back.latitude - lat).abs() < 1e-4, "{:?} from ({}, {})", back, lon, lat);
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_roundtrip_both_conventions(
        sub in -180.0..180.0_f64,
        dlon in -55.0..55.0_f64,
        lat in -55.0..55.0_f64,
        goes in any::<bool>(),
    ) {
        let convention = if goes { ScanConvention::Goes } else { ScanConvention::Geos };
        let geom = ScanGeometry::new(sub, convention).unwrap();
        let lon = test_utils::wrap_longitude(sub + dlon);

        let scan = geom.earth_to_sat(GeodeticPoint::new(lon, lat));
        prop_assert!(scan.is_some(), "({}, {}) hidden from {}", lon, lat, sub);
        let back = geom.sat_to_earth(scan.unwrap());
        prop_assert!(back.is_some());
        let back = back.unwrap();

        prop_assert!((-180.0..=180.0).contains(&back.longitude));
        prop_assert!(longitude_difference(back.longitude, lon).abs() < 1e-6);
        prop_assert!((back.latitude - lat).abs() < 1e-6);
    }

    #[test]
    fn prop_fgf_pixel_roundtrip(
        x in 0.0..5424.0_f64,
        y in 0.0..5424.0_f64,
    ) {
        let affine = affine(abi::FULL_DISK_2KM);
        let angle = affine.pixel_to_angle(x, y);
        let (bx, by) = affine.angle_to_pixel(angle);
        prop_assert!((bx - x).abs() < 1e-6);
        prop_assert!((by - y).abs() < 1e-6);
    }

    #[test]
    fn prop_sub_satellite_point_is_origin(sub in -180.0..=180.0_f64, goes in any::<bool>()) {
        let convention = if goes { ScanConvention::Goes } else { ScanConvention::Geos };
        let geom = ScanGeometry::new(sub, convention).unwrap();
        let scan = geom.earth_to_sat(geom.nadir()).unwrap();
        prop_assert_eq!(scan.lambda, 0.0);
        prop_assert_eq!(scan.theta, 0.0);
    }
}
