//! Validation for coordinates, precisions and resolutions.

use crate::alphabet::MAX_PRECISION;
use crate::error::{GeohashError, Result};

/// Validates latitude and longitude in degrees.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0]
///
/// # Examples
///
/// ```
/// use geocell::validation::validate_lat_lon;
///
/// assert!(validate_lat_lon(52.205, 0.119).is_ok());
/// assert!(validate_lat_lon(95.0, 0.0).is_err());
/// assert!(validate_lat_lon(0.0, f64::NAN).is_err());
/// ```
pub fn validate_lat_lon(lat: f64, lon: f64) -> Result<()> {
    if !lat.is_finite() {
        return Err(GeohashError::InvalidCoordinate(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lon.is_finite() {
        return Err(GeohashError::InvalidCoordinate(format!(
            "Longitude must be finite, got: {}",
            lon
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeohashError::InvalidCoordinate(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lon) {
        return Err(GeohashError::InvalidCoordinate(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lon
        )));
    }

    Ok(())
}

/// Validates a geohash precision (string length).
pub fn validate_precision(precision: usize) -> Result<usize> {
    if (1..=MAX_PRECISION).contains(&precision) {
        Ok(precision)
    } else {
        Err(GeohashError::InvalidPrecision(precision))
    }
}

/// Validates a resolution in degrees.
pub fn validate_resolution(degrees: f64) -> Result<f64> {
    if degrees.is_finite() && degrees >= 0.0 {
        Ok(degrees)
    } else {
        Err(GeohashError::InvalidResolution(degrees))
    }
}

/// Parses `"lat,lon"` text into degrees.
///
/// Whitespace around either number is ignored. The parsed values are
/// range-checked.
///
/// # Examples
///
/// ```
/// use geocell::validation::parse_lat_lon;
///
/// assert_eq!(parse_lat_lon("52.205, 0.119").unwrap(), (52.205, 0.119));
/// assert!(parse_lat_lon("52.205").is_err());
/// assert!(parse_lat_lon("north,east").is_err());
/// ```
pub fn parse_lat_lon(text: &str) -> Result<(f64, f64)> {
    let mut parts = text.split(',');
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(GeohashError::InvalidCoordinate(format!(
            "Expected \"lat,lon\", got: {:?}",
            text
        )));
    };

    let parse = |part: &str, axis: &str| {
        part.trim().parse::<f64>().map_err(|e| {
            GeohashError::InvalidCoordinate(format!("{} {:?}: {}", axis, part.trim(), e))
        })
    };

    let lat = parse(lat, "Latitude")?;
    let lon = parse(lon, "Longitude")?;
    validate_lat_lon(lat, lon)?;
    Ok((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        assert!(validate_lat_lon(40.7128, -74.0060).is_ok());
        assert!(validate_lat_lon(90.0, 180.0).is_ok());
        assert!(validate_lat_lon(-90.0, -180.0).is_ok());
        assert!(validate_lat_lon(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(validate_lat_lon(90.1, 0.0).is_err());
        assert!(validate_lat_lon(-95.0, 0.0).is_err());
        assert!(validate_lat_lon(f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(validate_lat_lon(0.0, 180.1).is_err());
        assert!(validate_lat_lon(0.0, -200.0).is_err());
        assert!(validate_lat_lon(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_precision_bounds() {
        assert!(validate_precision(0).is_err());
        assert_eq!(validate_precision(1).unwrap(), 1);
        assert_eq!(validate_precision(12).unwrap(), 12);
        assert!(matches!(
            validate_precision(13),
            Err(GeohashError::InvalidPrecision(13))
        ));
    }

    #[test]
    fn test_resolution_bounds() {
        assert!(validate_resolution(0.0).is_ok());
        assert!(validate_resolution(1e-9).is_ok());
        assert!(validate_resolution(-1.0).is_err());
        assert!(validate_resolution(f64::NAN).is_err());
    }

    #[test]
    fn test_parse_lat_lon() {
        assert_eq!(parse_lat_lon("-33.8688,151.2093").unwrap(), (-33.8688, 151.2093));
        assert_eq!(parse_lat_lon("  0 , 0 ").unwrap(), (0.0, 0.0));
        assert!(parse_lat_lon("1,2,3").is_err());
        assert!(parse_lat_lon("91,0").is_err());
        assert!(parse_lat_lon("").is_err());
    }
}
