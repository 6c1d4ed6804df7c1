//! Static navigation metadata for historical geostationary imagers.
//!
//! Two lookups: the sub-satellite longitude of a spacecraft, and the nadir
//! spatial resolution of one of its channels. Both distinguish a retired
//! spacecraft that is still inside a series' numbering (`NonOperational`)
//! from a combination the tables do not describe at all (`Unknown`).

use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

/// FGF step per kilometre of nadir resolution (radians).
pub const RADIANS_PER_KM: f64 = 28e-6;

/// Operator series of a geostationary imager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SatelliteSeries {
    Goes,
    /// MTSAT / Himawari
    Mtsat,
    /// First-generation Meteosat, numbered continuously into MSG
    Meteosat,
    Msg,
    Fy2,
    Kalpana,
    Insat,
}

impl SatelliteSeries {
    pub const ALL: [SatelliteSeries; 7] = [
        SatelliteSeries::Goes,
        SatelliteSeries::Mtsat,
        SatelliteSeries::Meteosat,
        SatelliteSeries::Msg,
        SatelliteSeries::Fy2,
        SatelliteSeries::Kalpana,
        SatelliteSeries::Insat,
    ];

    /// Parse an operator series name. Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "GOES" => Some(SatelliteSeries::Goes),
            "MTSAT" | "HIMAWARI" => Some(SatelliteSeries::Mtsat),
            "METEOSAT" => Some(SatelliteSeries::Meteosat),
            "MSG" => Some(SatelliteSeries::Msg),
            "FY-2" | "FY2" => Some(SatelliteSeries::Fy2),
            "KALPANA" => Some(SatelliteSeries::Kalpana),
            "INSAT" => Some(SatelliteSeries::Insat),
            _ => None,
        }
    }
}

impl fmt::Display for SatelliteSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SatelliteSeries::Goes => "GOES",
            SatelliteSeries::Mtsat => "MTSAT",
            SatelliteSeries::Meteosat => "Meteosat",
            SatelliteSeries::Msg => "MSG",
            SatelliteSeries::Fy2 => "FY-2",
            SatelliteSeries::Kalpana => "Kalpana",
            SatelliteSeries::Insat => "INSAT",
        };
        write!(f, "{}", name)
    }
}

/// Result of a metadata lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum TableEntry<T> {
    Available(T),
    /// Retired spacecraft inside the series' numbering; skip quietly.
    NonOperational,
    /// Combination not described by the tables; likely a data error.
    Unknown,
}

impl<T> TableEntry<T> {
    pub fn value(self) -> Option<T> {
        match self {
            TableEntry::Available(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, TableEntry::Available(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> TableEntry<U> {
        match self {
            TableEntry::Available(v) => TableEntry::Available(f(v)),
            TableEntry::NonOperational => TableEntry::NonOperational,
            TableEntry::Unknown => TableEntry::Unknown,
        }
    }
}

struct SubPointTable {
    series: SatelliteSeries,
    /// Lower numbers are retired spacecraft
    first_operational: u32,
    entries: &'static [(u32, f64)],
}

static SUB_POINTS: &[SubPointTable] = &[
    SubPointTable {
        series: SatelliteSeries::Goes,
        first_operational: 10,
        entries: &[
            (10, -60.0),
            (11, -135.0),
            (12, -75.0),
            (13, -105.0),
            (14, -89.5),
            (15, -105.0),
            (16, -75.0),
            (17, -135.0),
        ],
    },
    SubPointTable {
        series: SatelliteSeries::Mtsat,
        first_operational: 1,
        // 1/6 are MTSAT-1R (Himawari-6), 2/7 are MTSAT-2 (Himawari-7)
        entries: &[(1, 140.0), (2, 145.0), (6, 140.0), (7, 145.0)],
    },
    SubPointTable {
        series: SatelliteSeries::Meteosat,
        first_operational: 6,
        // Indian Ocean positions; older navigation tables list 6 and 7 west
        entries: &[(6, 67.5), (7, 57.5), (8, 9.5), (9, 0.0)],
    },
    SubPointTable {
        series: SatelliteSeries::Msg,
        first_operational: 8,
        entries: &[(8, 9.5), (9, 0.0)],
    },
    SubPointTable {
        series: SatelliteSeries::Fy2,
        first_operational: 3,
        entries: &[(3, 123.5), (4, 86.5), (5, 105.0)],
    },
    SubPointTable {
        series: SatelliteSeries::Kalpana,
        first_operational: 1,
        // Older navigation tables list 123.5
        entries: &[(1, 74.0)],
    },
    SubPointTable {
        series: SatelliteSeries::Insat,
        first_operational: 1,
        entries: &[(1, 93.5)],
    },
];

struct ResolutionRow {
    series: SatelliteSeries,
    numbers: RangeInclusive<u32>,
    channels: RangeInclusive<u32>,
    default_km: f64,
    overrides: &'static [(RangeInclusive<u32>, f64)],
}

/// Numbers below these are retired imagers for the resolution lookup.
static RESOLUTION_NON_OPERATIONAL_BELOW: &[(SatelliteSeries, u32)] = &[
    (SatelliteSeries::Goes, 8),
    (SatelliteSeries::Meteosat, 6),
    (SatelliteSeries::Msg, 8),
];

static RESOLUTIONS: &[ResolutionRow] = &[
    // GOES-8 to 11 imager: visible 1 km, water vapour 8 km
    ResolutionRow {
        series: SatelliteSeries::Goes,
        numbers: 8..=11,
        channels: 1..=5,
        default_km: 4.0,
        overrides: &[(1..=1, 1.0), (3..=3, 8.0)],
    },
    // GOES-12 and 13 imager: CO2 channel at 8 km
    ResolutionRow {
        series: SatelliteSeries::Goes,
        numbers: 12..=13,
        channels: 1..=6,
        default_km: 4.0,
        overrides: &[(1..=1, 1.0), (5..=5, 8.0)],
    },
    ResolutionRow {
        series: SatelliteSeries::Goes,
        numbers: 14..=15,
        channels: 1..=6,
        default_km: 4.0,
        overrides: &[(1..=1, 1.0)],
    },
    // GOES-R and S ABI
    ResolutionRow {
        series: SatelliteSeries::Goes,
        numbers: 16..=17,
        channels: 1..=16,
        default_km: 2.0,
        overrides: &[(1..=2, 0.5)],
    },
    // GOES sounder
    ResolutionRow {
        series: SatelliteSeries::Goes,
        numbers: 21..=39,
        channels: 1..=19,
        default_km: 10.0,
        overrides: &[],
    },
    ResolutionRow {
        series: SatelliteSeries::Mtsat,
        numbers: 1..=7,
        channels: 1..=5,
        default_km: 4.0,
        overrides: &[(1..=1, 1.0)],
    },
    // MVIRI
    ResolutionRow {
        series: SatelliteSeries::Meteosat,
        numbers: 6..=7,
        channels: 1..=3,
        default_km: 5.0,
        overrides: &[(1..=1, 2.5)],
    },
    // SEVIRI, channel 12 is HRV
    ResolutionRow {
        series: SatelliteSeries::Meteosat,
        numbers: 8..=9,
        channels: 1..=12,
        default_km: 3.0,
        overrides: &[(12..=12, 1.0)],
    },
    ResolutionRow {
        series: SatelliteSeries::Msg,
        numbers: 8..=9,
        channels: 1..=12,
        default_km: 3.0,
        overrides: &[(12..=12, 1.0)],
    },
    ResolutionRow {
        series: SatelliteSeries::Fy2,
        numbers: 1..=5,
        channels: 1..=5,
        default_km: 5.0,
        overrides: &[(1..=1, 1.25)],
    },
    ResolutionRow {
        series: SatelliteSeries::Kalpana,
        numbers: 1..=1,
        channels: 1..=3,
        default_km: 8.0,
        overrides: &[(1..=1, 2.0)],
    },
    // INSAT-3A to 3C VHRR plus CCD camera bands
    ResolutionRow {
        series: SatelliteSeries::Insat,
        numbers: 1..=3,
        channels: 1..=7,
        default_km: 8.0,
        overrides: &[(1..=1, 2.0), (5..=7, 1.0)],
    },
    // INSAT-3D and 3DR imager
    ResolutionRow {
        series: SatelliteSeries::Insat,
        numbers: 4..=5,
        channels: 1..=6,
        default_km: 4.0,
        overrides: &[(1..=2, 1.0), (3..=3, 8.0)],
    },
    // INSAT sounder
    ResolutionRow {
        series: SatelliteSeries::Insat,
        numbers: 21..=39,
        channels: 1..=19,
        default_km: 10.0,
        overrides: &[],
    },
];

/// Sub-satellite longitude (degrees east) of a spacecraft.
pub fn sub_satellite_longitude(series: SatelliteSeries, number: u32) -> TableEntry<f64> {
    let Some(table) = SUB_POINTS.iter().find(|t| t.series == series) else {
        return TableEntry::Unknown;
    };
    if number < table.first_operational {
        return TableEntry::NonOperational;
    }
    table
        .entries
        .iter()
        .find(|(n, _)| *n == number)
        .map(|&(_, lon)| TableEntry::Available(lon))
        .unwrap_or(TableEntry::Unknown)
}

/// Nadir spatial resolution (km) of one channel of a spacecraft.
pub fn channel_resolution(series: SatelliteSeries, number: u32, channel: u32) -> TableEntry<f64> {
    let row = RESOLUTIONS
        .iter()
        .find(|r| r.series == series && r.numbers.contains(&number));

    match row {
        Some(row) if row.channels.contains(&channel) => {
            let km = row
                .overrides
                .iter()
                .find(|(channels, _)| channels.contains(&channel))
                .map(|&(_, km)| km)
                .unwrap_or(row.default_km);
            TableEntry::Available(km)
        }
        Some(_) => TableEntry::Unknown,
        None => {
            let retired = RESOLUTION_NON_OPERATIONAL_BELOW
                .iter()
                .any(|&(s, below)| s == series && number < below);
            if retired {
                TableEntry::NonOperational
            } else {
                TableEntry::Unknown
            }
        }
    }
}

/// Sub-satellite longitude by series name; unrecognised names are Unknown.
pub fn sub_satellite_longitude_by_name(series: &str, number: u32) -> TableEntry<f64> {
    match SatelliteSeries::from_name(series) {
        Some(s) => sub_satellite_longitude(s, number),
        None => TableEntry::Unknown,
    }
}

/// Channel resolution by series name; unrecognised names are Unknown.
pub fn channel_resolution_by_name(series: &str, number: u32, channel: u32) -> TableEntry<f64> {
    match SatelliteSeries::from_name(series) {
        Some(s) => channel_resolution(s, number, channel),
        None => TableEntry::Unknown,
    }
}

/// Navigation parameters of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelNavigation {
    pub sub_satellite_longitude: f64,
    pub resolution_km: f64,
}

/// Both lookups at once. Unknown takes precedence over NonOperational.
pub fn channel_navigation(
    series: SatelliteSeries,
    number: u32,
    channel: u32,
) -> TableEntry<ChannelNavigation> {
    let lon = sub_satellite_longitude(series, number);
    let res = channel_resolution(series, number, channel);
    match (lon, res) {
        (TableEntry::Available(lon), TableEntry::Available(km)) => {
            TableEntry::Available(ChannelNavigation {
                sub_satellite_longitude: lon,
                resolution_km: km,
            })
        }
        (TableEntry::Unknown, _) | (_, TableEntry::Unknown) => TableEntry::Unknown,
        _ => TableEntry::NonOperational,
    }
}

/// FGF step (radians) for a nadir resolution in km.
pub fn grid_radians_from_resolution(resolution_km: f64) -> f64 {
    resolution_km * RADIANS_PER_KM
}
