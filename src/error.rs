//! Error types for geohash encoding, decoding and navigation.

use thiserror::Error;

/// Errors returned by geocell operations.
///
/// Every failure is reported where it is detected. A [`crate::Geohash`]
/// that was constructed successfully never produces `InvalidGeohash` again.
#[derive(Debug, Error)]
pub enum GeohashError {
    /// Latitude or longitude outside the geographic domain, non-finite, or
    /// unparsable coordinate text.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Precision outside `1..=12`.
    #[error("Invalid precision {0}: must be between 1 and 12")]
    InvalidPrecision(usize),

    /// Empty, longer than 12 characters, or containing a non-alphabet character.
    #[error("Invalid geohash {0:?}")]
    InvalidGeohash(String),

    /// Direction other than N, S, E or W.
    #[error("Invalid direction {0:?}: expected one of N, S, E, W")]
    InvalidDirection(String),

    /// Negative or non-finite resolution in degrees.
    #[error("Invalid resolution {0}: must be a finite, non-negative number of degrees")]
    InvalidResolution(f64),

    /// Non-positive or non-finite earth radius.
    #[error("Invalid radius {0}: must be finite and positive")]
    InvalidRadius(f64),

    /// Malformed or unexpected external input, such as GeoJSON that is not a
    /// Feature.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration values that fail validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeohashError>;
