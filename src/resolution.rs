//! Conversion between geohash precision and angular resolution.
//!
//! A geohash of length `p` carries `5p` bits, longitude first, so longitude
//! gets `ceil(5p / 2)` halvings of 360° and latitude `floor(5p / 2)` halvings
//! of 180°.

use crate::alphabet::{BITS_PER_CHAR, MAX_PRECISION};
use crate::error::Result;
use crate::validation::{validate_precision, validate_resolution};

fn lon_resolution(precision: usize) -> f64 {
    let bits = BITS_PER_CHAR * precision;
    360.0 / (1u64 << bits.div_ceil(2)) as f64
}

fn lat_resolution(precision: usize) -> f64 {
    let bits = BITS_PER_CHAR * precision;
    180.0 / (1u64 << (bits / 2)) as f64
}

/// Longitudinal and latitudinal resolution in degrees, as `(res_lon, res_lat)`.
///
/// `prec_lat` defaults to `prec_lon`.
///
/// # Examples
///
/// ```
/// use geocell::resolution;
///
/// assert_eq!(resolution(1, None).unwrap(), (45.0, 45.0));
/// assert_eq!(resolution(2, None).unwrap(), (11.25, 5.625));
/// assert!(resolution(0, None).is_err());
/// ```
pub fn resolution(prec_lon: usize, prec_lat: Option<usize>) -> Result<(f64, f64)> {
    let prec_lon = validate_precision(prec_lon)?;
    let prec_lat = validate_precision(prec_lat.unwrap_or(prec_lon))?;
    Ok((lon_resolution(prec_lon), lat_resolution(prec_lat)))
}

/// Shortest precision whose cells are at least as fine as both resolutions.
///
/// `res_lat` defaults to `res_lon`. Returns 12 when no precision is fine
/// enough.
///
/// # Examples
///
/// ```
/// use geocell::precision_for;
///
/// assert_eq!(precision_for(45.0, None).unwrap(), 1);
/// assert_eq!(precision_for(1.0, None).unwrap(), 4);
/// assert_eq!(precision_for(0.0, None).unwrap(), 12);
/// ```
pub fn precision_for(res_lon: f64, res_lat: Option<f64>) -> Result<usize> {
    let res_lon = validate_resolution(res_lon)?;
    let res_lat = validate_resolution(res_lat.unwrap_or(res_lon))?;

    let precision = (1..=MAX_PRECISION)
        .find(|&p| lon_resolution(p) <= res_lon && lat_resolution(p) <= res_lat)
        .unwrap_or(MAX_PRECISION);
    Ok(precision)
}
