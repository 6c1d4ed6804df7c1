//! Error types for navigation configuration.
//!
//! Geometric non-visibility is never an error: transforms return `None`
//! for points behind the earth or scan angles off the disk. These errors
//! are raised only while a geometry or navigation window is being built.

use thiserror::Error;

/// Result type alias using ProjectionError.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// Scan convention identifier is neither GOES nor GEOS.
    #[error("unknown scan convention: {0}")]
    UnknownScanConvention(String),

    /// Geoid identifier is neither WGS84 nor GRS80.
    #[error("unknown geoid: {0}")]
    UnknownGeoid(String),

    /// A numeric construction parameter is out of range.
    #[error("invalid parameter '{param}': {message}")]
    InvalidParameter { param: &'static str, message: String },

    /// Satellite metadata has no usable entry for the requested key.
    #[error("no navigation metadata for {series} {number} channel {channel}: {reason}")]
    MetadataUnavailable {
        series: String,
        number: u32,
        channel: u32,
        reason: &'static str,
    },
}

impl ProjectionError {
    pub(crate) fn invalid(param: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param,
            message: message.into(),
        }
    }
}
