//! Geohash encoding and decoding.
//!
//! Encoding bisects the world box one bit at a time, alternating between
//! longitude and latitude and starting with longitude. Every five bits form
//! one base-32 symbol. Decoding replays the same bisections to recover the
//! cell's bounding box.

use crate::alphabet::{self, BITS_PER_CHAR, MAX_PRECISION};
use crate::error::{GeohashError, Result};
use crate::validation::{validate_lat_lon, validate_precision};
use geocell_types::bbox::BoundingBox;
use geocell_types::coordinate::Coordinate;

/// Round-trip tolerance used when `encode` has to infer the precision.
pub const DEFAULT_EPSILON: f64 = f64::EPSILON;

/// Encode a latitude/longitude as a geohash.
///
/// With `precision` set, the geohash has exactly that many characters.
/// Without it, the shortest geohash whose human-readable decoding (see
/// [`decode`]) reproduces `lat` and `lon` is returned, falling back to 12
/// characters.
///
/// # Errors
///
/// `InvalidCoordinate` for out-of-range or non-finite input and
/// `InvalidPrecision` for a precision outside `1..=12`.
///
/// # Examples
///
/// ```
/// use geocell::encode;
///
/// assert_eq!(encode(52.205, 0.119, Some(7)).unwrap(), "u120fxw");
/// assert_eq!(encode(52.205, 0.119, Some(12)).unwrap(), "u120fxwshvkg");
/// assert_eq!(encode(52.205, 0.1188, None).unwrap(), "u120fxw");
/// assert_eq!(encode(0.0, 0.0, Some(12)).unwrap(), "s00000000000");
/// ```
pub fn encode(lat: f64, lon: f64, precision: Option<usize>) -> Result<String> {
    match precision {
        Some(precision) => encode_with_precision(lat, lon, precision),
        None => encode_auto(lat, lon, DEFAULT_EPSILON),
    }
}

/// Encode to a fixed number of characters.
pub fn encode_with_precision(lat: f64, lon: f64, precision: usize) -> Result<String> {
    check_coordinate(lat, lon)?;
    let precision = validate_precision(precision)?;
    Ok(bisect(lat, lon, precision))
}

/// Encode with the shortest precision whose human-readable decoding lies
/// within `epsilon` of the input on both axes.
pub fn encode_auto(lat: f64, lon: f64, epsilon: f64) -> Result<String> {
    check_coordinate(lat, lon)?;

    for precision in 1..=MAX_PRECISION {
        let hash = bisect(lat, lon, precision);
        let approx = rounded_center(&bounds_of_valid(&hash))?;
        if (lat - approx.lat).abs() < epsilon && (lon - approx.lon).abs() < epsilon {
            return Ok(hash);
        }
    }

    log::debug!(
        "No shorter geohash reproduces ({}, {}), using precision {}",
        lat,
        lon,
        MAX_PRECISION
    );
    Ok(bisect(lat, lon, MAX_PRECISION))
}

fn check_coordinate(lat: f64, lon: f64) -> Result<()> {
    validate_lat_lon(lat, lon).inspect_err(|e| {
        log::warn!("Rejecting geohash encode: {}", e);
    })
}

/// Interleaved bisection. Inputs must already be validated.
fn bisect(lat: f64, lon: f64, precision: usize) -> String {
    let mut bbox = BoundingBox::WORLD;
    let mut hash = String::with_capacity(precision);
    let mut on_lon = true;

    for _ in 0..precision {
        let mut value = 0u8;
        for _ in 0..BITS_PER_CHAR {
            value <<= 1;
            if on_lon {
                let mid = (bbox.west + bbox.east) * 0.5;
                if lon < mid {
                    bbox.east = mid;
                } else {
                    bbox.west = mid;
                    value |= 1;
                }
            } else {
                let mid = (bbox.south + bbox.north) * 0.5;
                if lat < mid {
                    bbox.north = mid;
                } else {
                    bbox.south = mid;
                    value |= 1;
                }
            }
            on_lon = !on_lon;
        }
        hash.push(alphabet::symbol(value));
    }

    hash
}

/// Bounding box of an already validated, lowercase geohash.
pub(crate) fn bounds_of_valid(hash: &str) -> BoundingBox {
    let mut bbox = BoundingBox::WORLD;
    let mut on_lon = true;

    for c in hash.chars() {
        let Some(value) = alphabet::value_of(c) else {
            unreachable!("geohash {:?} was not validated", hash);
        };
        for shift in (0..BITS_PER_CHAR).rev() {
            let bit = (value >> shift) & 1 == 1;
            if on_lon {
                let mid = (bbox.west + bbox.east) * 0.5;
                if bit {
                    bbox.west = mid;
                } else {
                    bbox.east = mid;
                }
            } else {
                let mid = (bbox.south + bbox.north) * 0.5;
                if bit {
                    bbox.south = mid;
                } else {
                    bbox.north = mid;
                }
            }
            on_lon = !on_lon;
        }
    }

    bbox
}

/// South/west/north/east bounds of a geohash cell.
///
/// # Examples
///
/// ```
/// use geocell::bounds;
///
/// let b = bounds("u120fxw").unwrap();
/// assert!((b.south - 52.20428467).abs() < 1e-8);
/// assert!((b.west - 0.11810303).abs() < 1e-8);
/// assert!((b.north - 52.20565796).abs() < 1e-8);
/// assert!((b.east - 0.11947632).abs() < 1e-8);
/// ```
pub fn bounds(geohash: &str) -> Result<BoundingBox> {
    let hash = alphabet::normalize(geohash)?;
    Ok(bounds_of_valid(&hash))
}

/// Center of a geohash cell at full floating point precision.
pub fn decode_exact(geohash: &str) -> Result<Coordinate> {
    Ok(bounds(geohash)?.center())
}

/// Center of a geohash cell as text, rounded to the precision the cell
/// actually carries.
///
/// Each axis is rounded to `floor(2 - log10(extent))` decimals, with
/// trailing zeros removed.
///
/// # Examples
///
/// ```
/// use geocell::decode;
///
/// assert_eq!(decode("u120fxw").unwrap(), ("52.205".to_string(), "0.1188".to_string()));
/// assert_eq!(decode("sunny").unwrap(), ("23.708".to_string(), "42.473".to_string()));
/// assert_eq!(decode("fur").unwrap(), ("69.6".to_string(), "-45.7".to_string()));
/// ```
pub fn decode(geohash: &str) -> Result<(String, String)> {
    let bbox = bounds(geohash)?;
    Ok(rounded_center_text(&bbox))
}

/// [`decode`], parsed back into degrees.
///
/// # Examples
///
/// ```
/// use geocell::decode2;
///
/// let center = decode2("geek").unwrap();
/// assert_eq!(center.lat, 65.48);
/// assert_eq!(center.lon, -17.75);
/// ```
pub fn decode2(geohash: &str) -> Result<Coordinate> {
    let bbox = bounds(geohash)?;
    rounded_center(&bbox)
}

/// Half the cell height and half the cell width, as `(lat_err, lon_err)` in
/// degrees.
///
/// # Examples
///
/// ```
/// use geocell::decode_error;
///
/// assert_eq!(decode_error("fu").unwrap(), (2.8125, 5.625));
/// assert_eq!(decode_error("f").unwrap(), (22.5, 22.5));
/// ```
pub fn decode_error(geohash: &str) -> Result<(f64, f64)> {
    let bbox = bounds(geohash)?;
    Ok((bbox.height() * 0.5, bbox.width() * 0.5))
}

pub(crate) fn rounded_center_text(bbox: &BoundingBox) -> (String, String) {
    let center = bbox.center();
    (
        format_degrees(center.lat, bbox.height()),
        format_degrees(center.lon, bbox.width()),
    )
}

fn rounded_center(bbox: &BoundingBox) -> Result<Coordinate> {
    let (lat, lon) = rounded_center_text(bbox);
    let parse = |text: &str| {
        text.parse::<f64>()
            .map_err(|e| GeohashError::InvalidCoordinate(format!("{:?}: {}", text, e)))
    };
    Ok(Coordinate::new(parse(&lat)?, parse(&lon)?))
}

fn format_degrees(value: f64, extent: f64) -> String {
    let decimals = (2.0 - extent.log10()).floor().max(0.0) as usize;
    let mut text = format!("{:.*}", decimals, value);

    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}
