use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A geographic position in degrees.
///
/// Latitude comes first, matching how geohash APIs are usually called.
/// When converting to `geo` types the usual `x = longitude`, `y = latitude`
/// mapping applies.
///
/// # Examples
///
/// ```
/// use geocell_types::coordinate::Coordinate;
/// use geo::Point;
///
/// let coord = Coordinate::new(52.205, 0.119);
/// let point: Point = coord.into();
/// assert_eq!(point.x(), 0.119);
/// assert_eq!(point.y(), 52.205);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, [-180, 180]
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude and longitude converted to radians, as `(phi, lambda)`.
    pub fn to_radians(&self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }

    /// Whether both components are finite and inside the geographic domain.
    pub fn is_in_range(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Convert to a `geo::Point` (x = longitude, y = latitude).
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coord: Coordinate) -> Self {
        coord.to_point()
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(coord: Coordinate) -> Self {
        Coord {
            x: coord.lon,
            y: coord.lat,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Interprets the tuple as `(lat, lon)`.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_conversion_swaps_axes() {
        let coord = Coordinate::new(40.7128, -74.0060);
        let point = coord.to_point();
        assert_eq!(point.x(), -74.0060);
        assert_eq!(point.y(), 40.7128);

        let back = Coordinate::from(point);
        assert_eq!(back, coord);
    }

    #[test]
    fn test_range_check() {
        assert!(Coordinate::new(90.0, 180.0).is_in_range());
        assert!(Coordinate::new(-90.0, -180.0).is_in_range());
        assert!(!Coordinate::new(90.1, 0.0).is_in_range());
        assert!(!Coordinate::new(0.0, -180.5).is_in_range());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_in_range());
    }

    #[test]
    fn test_radians() {
        let (phi, lam) = Coordinate::new(90.0, -180.0).to_radians();
        assert!((phi - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((lam + std::f64::consts::PI).abs() < 1e-12);
    }
}
