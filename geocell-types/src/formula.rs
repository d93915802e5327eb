//! Distance formulas between two coordinates.
//!
//! A local flat-earth approximation and the haversine great-circle distance.
//! Both take degrees and return the distance in the units of the radius.

use crate::coordinate::Coordinate;
use geo::{Distance, HaversineMeasure, Point};

/// Mean earth radius in meters (IUGG, `(2a + b) / 3` of WGS84).
pub const R_M: f64 = 6_371_008.771415;

/// Wrap a longitude delta into the half-open range `(-180, 180]`.
///
/// # Examples
///
/// ```
/// use geocell_types::formula::wrap180;
///
/// assert_eq!(wrap180(190.0), -170.0);
/// assert_eq!(wrap180(-180.0), 180.0);
/// assert_eq!(wrap180(45.0), 45.0);
/// ```
pub fn wrap180(deg: f64) -> f64 {
    if deg > -180.0 && deg <= 180.0 {
        return deg;
    }
    let wrapped = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

fn delta_lon(from: &Coordinate, to: &Coordinate, wrap: bool) -> f64 {
    let delta = to.lon - from.lon;
    if wrap { wrap180(delta) } else { delta }
}

/// Squared angular distance in degrees² using the equirectangular
/// approximation.
///
/// With `adjust` the longitudinal delta is scaled by the cosine of the mean
/// latitude. With `wrap` the longitudinal delta is unrolled across the
/// antimeridian first.
pub fn equirectangular_squared(
    from: &Coordinate,
    to: &Coordinate,
    adjust: bool,
    wrap: bool,
) -> f64 {
    let d_lat = to.lat - from.lat;
    let mut d_lon = delta_lon(from, to, wrap);
    if adjust {
        let mean_lat = ((from.lat + to.lat) * 0.5).clamp(-90.0, 90.0);
        d_lon *= mean_lat.to_radians().cos();
    }
    d_lat * d_lat + d_lon * d_lon
}

/// Local flat-earth distance, in the units of `radius`.
///
/// # Examples
///
/// ```
/// use geocell_types::coordinate::Coordinate;
/// use geocell_types::formula::{equirectangular, R_M};
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(1.0, 0.0);
/// let d = equirectangular(&a, &b, R_M, false, false);
/// assert!((d - 111_195.08).abs() < 0.01);
/// ```
pub fn equirectangular(
    from: &Coordinate,
    to: &Coordinate,
    radius: f64,
    adjust: bool,
    wrap: bool,
) -> f64 {
    equirectangular_squared(from, to, adjust, wrap)
        .sqrt()
        .to_radians()
        * radius
}

/// Great-circle distance using the haversine formula, in the units of
/// `radius`.
///
/// # Examples
///
/// ```
/// use geocell_types::coordinate::Coordinate;
/// use geocell_types::formula::{haversine, R_M};
///
/// let nyc = Coordinate::new(40.7128, -74.0060);
/// let la = Coordinate::new(34.0522, -118.2437);
/// let d = haversine(&nyc, &la, R_M, false);
/// assert!(d > 3_900_000.0 && d < 4_000_000.0);
/// ```
pub fn haversine(from: &Coordinate, to: &Coordinate, radius: f64, wrap: bool) -> f64 {
    let origin = Point::new(from.lon, from.lat);
    let destination = Point::new(from.lon + delta_lon(from, to, wrap), to.lat);
    HaversineMeasure::new(radius).distance(origin, destination)
}
