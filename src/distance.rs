//! Distance estimates between geohash cells.
//!
//! Three tiers, from cheapest to most accurate:
//!
//! 1. [`distance1`]: characteristic size of the smallest cell containing
//!    both geohashes, from their common prefix. A coarse upper bound that
//!    never decodes anything.
//! 2. [`distance2`]: equirectangular (flat-earth) distance between the cell
//!    centers.
//! 3. [`distance3`]: haversine great-circle distance between the cell centers.

use crate::alphabet::{self, MAX_PRECISION};
use crate::codec::bounds_of_valid;
use crate::error::{GeohashError, Result};
use geocell_types::formula::{self, R_M};
use serde::{Deserialize, Serialize};

/// Approximate cell dimensions in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    /// Latitudinal height
    pub height: f64,
    /// Longitudinal width
    pub width: f64,
    /// Radius of the circle with the same area, `sqrt(height * width / π)`
    pub radius: f64,
}

const fn size(height: f64, width: f64, radius: f64) -> CellSize {
    CellSize {
        height,
        width,
        radius,
    }
}

/// Cell sizes indexed by precision. Index 0 is the whole world.
pub const CELL_SIZES: [CellSize; MAX_PRECISION + 1] = [
    size(20032e3, 20000e3, 11292815.096),
    size(5003e3, 5000e3, 2821794.075),
    size(650e3, 1225e3, 503442.397),
    size(156e3, 156e3, 88013.575),
    size(19500.0, 39100.0, 15578.683),
    size(4890.0, 4890.0, 2758.887),
    size(610.0, 1220.0, 486.710),
    size(153.0, 153.0, 86.321),
    size(19.1, 38.2, 15.239),
    size(4.77, 4.77, 2.691),
    size(0.596, 1.19, 0.475),
    size(0.149, 0.149, 0.084),
    size(0.0186, 0.0372, 0.015),
];

/// Size of cells at `precision`, clamped to `1..=12`.
pub fn cell_size(precision: usize) -> CellSize {
    CELL_SIZES[precision.clamp(1, MAX_PRECISION)]
}

/// Size of the cell a geohash denotes.
///
/// # Examples
///
/// ```
/// use geocell::sizes;
///
/// let size = sizes("u120fxw").unwrap();
/// assert_eq!((size.height, size.width), (153.0, 153.0));
/// ```
pub fn sizes(geohash: &str) -> Result<CellSize> {
    let hash = alphabet::normalize(geohash)?;
    Ok(cell_size(hash.len()))
}

fn validate_radius(radius: f64) -> Result<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(GeohashError::InvalidRadius(radius))
    }
}

pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count()
}

pub(crate) fn prefix_distance(a: &str, b: &str) -> f64 {
    CELL_SIZES[common_prefix_len(a, b).min(MAX_PRECISION)].radius
}

/// Tier 1: characteristic radius (meters) of the cell at the common prefix
/// length of two geohashes.
///
/// # Examples
///
/// ```
/// use geocell::distance1;
///
/// assert_eq!(distance1("u120fxwsh", "u120fxws0").unwrap(), 15.239);
/// ```
pub fn distance1(a: &str, b: &str) -> Result<f64> {
    let a = alphabet::normalize(a)?;
    let b = alphabet::normalize(b)?;
    Ok(prefix_distance(&a, &b))
}

/// Tier 2: equirectangular distance between the two cell centers.
///
/// `radius` defaults to the mean earth radius [`R_M`] in meters; the result
/// is in the same units. No latitude adjustment or longitude wrapping is
/// applied; see [`crate::Geohash::distance2_to`] for those.
///
/// # Examples
///
/// ```
/// use geocell::distance2;
///
/// let d = distance2("u120fxwsh", "u120fxws0", None).unwrap();
/// assert!((d - 19.0879).abs() < 1e-4);
/// ```
pub fn distance2(a: &str, b: &str, radius: Option<f64>) -> Result<f64> {
    let radius = validate_radius(radius.unwrap_or(R_M))?;
    let (a, b) = (center_of(a)?, center_of(b)?);
    Ok(formula::equirectangular(&a, &b, radius, false, false))
}

/// Tier 3: haversine great-circle distance between the two cell centers.
///
/// # Examples
///
/// ```
/// use geocell::distance3;
///
/// let d = distance3("u120fxwsh", "u120fxws0", None).unwrap();
/// assert!((d - 11.6978).abs() < 1e-4);
/// ```
pub fn distance3(a: &str, b: &str, radius: Option<f64>) -> Result<f64> {
    let radius = validate_radius(radius.unwrap_or(R_M))?;
    let (a, b) = (center_of(a)?, center_of(b)?);
    Ok(formula::haversine(&a, &b, radius, false))
}

/// Distance tier used by [`distance_between`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceTier {
    /// Common-prefix cell radius, see [`distance1`]
    Prefix,
    /// Equirectangular approximation, see [`distance2`]
    FlatEarth,
    /// Haversine, see [`distance3`]
    #[default]
    GreatCircle,
}

/// Distance between two geohashes using the given tier.
///
/// `radius` is ignored by [`DistanceTier::Prefix`], whose result is always
/// in meters.
///
/// # Examples
///
/// ```
/// use geocell::{DistanceTier, distance_between};
///
/// let coarse = distance_between("u120fxwsh", "u120fxws0", DistanceTier::Prefix, None)?;
/// let fine = distance_between("u120fxwsh", "u120fxws0", DistanceTier::GreatCircle, None)?;
/// assert!(fine < coarse);
/// # Ok::<(), geocell::GeohashError>(())
/// ```
pub fn distance_between(a: &str, b: &str, tier: DistanceTier, radius: Option<f64>) -> Result<f64> {
    match tier {
        DistanceTier::Prefix => distance1(a, b),
        DistanceTier::FlatEarth => distance2(a, b, radius),
        DistanceTier::GreatCircle => distance3(a, b, radius),
    }
}

fn center_of(geohash: &str) -> Result<geocell_types::coordinate::Coordinate> {
    let hash = alphabet::normalize(geohash)?;
    Ok(bounds_of_valid(&hash).center())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix() {
        assert_eq!(common_prefix_len("u120fxwsh", "u120fxws0"), 8);
        assert_eq!(common_prefix_len("u120", "s000"), 0);
        assert_eq!(common_prefix_len("u12", "u120fx"), 3);
    }

    #[test]
    fn test_distance1_uses_prefix_cell() {
        assert_eq!(distance1("u", "s").unwrap(), CELL_SIZES[0].radius);
        assert_eq!(distance1("u120", "u12z").unwrap(), 88013.575);
        // identical geohashes share the full cell
        assert_eq!(distance1("u120fxw", "u120fxw").unwrap(), 86.321);
        assert_eq!(distance1("U120FXW", "u120fxw").unwrap(), 86.321);
    }

    #[test]
    fn test_distance1_is_an_upper_bound_for_neighbors() {
        let d1 = distance1("u120fxw", "u120fxx").unwrap();
        let d3 = distance3("u120fxw", "u120fxx", None).unwrap();
        assert!(d3 < d1 * 2.0);
    }

    #[test]
    fn test_unadjusted_flat_earth_overestimates() {
        // the last bit of "2" is a longitude bit, so the cells sit side by side
        let d2 = distance2("gcpvj0", "gcpvj2", None).unwrap();
        let d3 = distance3("gcpvj0", "gcpvj2", None).unwrap();
        // without latitude adjustment the flat-earth distance overestimates
        assert!(d2 > d3);
        assert!(d2 < d3 * 2.0);
    }

    #[test]
    fn test_custom_radius_scales() {
        let meters = distance3("u120fxwsh", "u120fxws0", None).unwrap();
        let unit = distance3("u120fxwsh", "u120fxws0", Some(1.0)).unwrap();
        assert!((meters / unit - R_M).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_radius() {
        assert!(matches!(
            distance3("u", "s", Some(0.0)),
            Err(GeohashError::InvalidRadius(_))
        ));
        assert!(distance2("u", "s", Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_distance_between_dispatches() {
        let (a, b) = ("u120fxwsh", "u120fxws0");
        assert_eq!(
            distance_between(a, b, DistanceTier::Prefix, None).unwrap(),
            distance1(a, b).unwrap()
        );
        assert_eq!(
            distance_between(a, b, DistanceTier::FlatEarth, Some(1.0)).unwrap(),
            distance2(a, b, Some(1.0)).unwrap()
        );
        assert_eq!(
            distance_between(a, b, DistanceTier::default(), None).unwrap(),
            distance3(a, b, None).unwrap()
        );
    }

    #[test]
    fn test_cell_size_clamps() {
        assert_eq!(cell_size(0), CELL_SIZES[1]);
        assert_eq!(cell_size(99), CELL_SIZES[12]);
        assert_eq!(sizes("u120fxwshvkg").unwrap().radius, 0.015);
    }
}
