//! Common navigation fixtures for geonav tests.
//!
//! Published constants and well-known places that show up across the
//! test suite.

/// Sub-satellite longitudes (degrees east) of operational imagers.
pub mod sub_lon {
    /// GOES-East (GOES-16)
    pub const GOES_EAST: f64 = -75.0;

    /// GOES-West (GOES-18)
    pub const GOES_WEST: f64 = -137.2;

    /// Meteosat prime service (MSG)
    pub const MSG_PRIME: f64 = 0.0;

    /// Himawari-8/9
    pub const HIMAWARI: f64 = 140.7;
}

/// GOES-R ABI full-disk fixed-grid constants.
pub mod abi {
    /// Fixed-grid scale/offset for one resolution (radians).
    #[derive(Debug, Clone, Copy)]
    pub struct FixedGrid {
        pub resolution_km: f64,
        pub scale_x: f64,
        pub offset_x: f64,
        pub scale_y: f64,
        pub offset_y: f64,
        pub size: usize,
    }

    /// 2 km infrared channels
    pub const FULL_DISK_2KM: FixedGrid = FixedGrid {
        resolution_km: 2.0,
        scale_x: 56e-6,
        offset_x: -0.151844,
        scale_y: -56e-6,
        offset_y: 0.151844,
        size: 5424,
    };

    /// 1 km channels
    pub const FULL_DISK_1KM: FixedGrid = FixedGrid {
        resolution_km: 1.0,
        scale_x: 28e-6,
        offset_x: -0.151858,
        scale_y: -28e-6,
        offset_y: 0.151858,
        size: 10848,
    };

    /// 0.5 km red visible channel
    pub const FULL_DISK_HALF_KM: FixedGrid = FixedGrid {
        resolution_km: 0.5,
        scale_x: 14e-6,
        offset_x: -0.151865,
        scale_y: -14e-6,
        offset_y: 0.151865,
        size: 21696,
    };

    pub const ALL: [FixedGrid; 3] = [FULL_DISK_2KM, FULL_DISK_1KM, FULL_DISK_HALF_KM];

    /// CONUS sector at 2 km as written in GOES-16 files
    pub const CONUS_2KM: FixedGrid = FixedGrid {
        resolution_km: 2.0,
        scale_x: 56e-6,
        offset_x: -0.101332,
        scale_y: -56e-6,
        offset_y: 0.128212,
        size: 2500,
    };

    pub const CONUS_2KM_HEIGHT: usize = 1500;
}

/// Named places as (longitude, latitude) in degrees.
pub mod places {
    pub const KANSAS: (f64, f64) = (-95.0, 39.0);
    pub const MIAMI: (f64, f64) = (-80.19, 25.76);
    pub const BUENOS_AIRES: (f64, f64) = (-58.38, -34.60);
    pub const LONDON: (f64, f64) = (-0.13, 51.51);
    pub const NAIROBI: (f64, f64) = (36.82, -1.29);
    pub const TOKYO: (f64, f64) = (139.69, 35.69);
    pub const SYDNEY: (f64, f64) = (151.21, -33.87);
    pub const HONOLULU: (f64, f64) = (-157.86, 21.31);
}

/// Geographic rectangles as (min_lon, min_lat, max_lon, max_lat).
pub mod bbox {
    /// Whole globe
    pub const GLOBAL: (f64, f64, f64, f64) = (-180.0, -90.0, 180.0, 90.0);

    /// Continental United States
    pub const CONUS: (f64, f64, f64, f64) = (-130.0, 20.0, -60.0, 55.0);

    /// Europe
    pub const EUROPE: (f64, f64, f64, f64) = (-15.0, 35.0, 45.0, 72.0);

    /// Maritime continent, behind the earth for GOES-East
    pub const MARITIME_CONTINENT: (f64, f64, f64, f64) = (90.0, -10.0, 120.0, 10.0);

    /// Invalid bbox (min > max)
    pub const INVALID: (f64, f64, f64, f64) = (10.0, 10.0, 5.0, 5.0);
}
