//! Common types shared by the geonav crates.

pub mod bbox;
pub mod point;

pub use bbox::{BboxParseError, BoundingBox};
pub use point::{GeodeticPoint, ProjectionPoint, ScanAnglePoint};
