use crate::coordinate::Coordinate;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// A south/west/north/east rectangle in degrees.
///
/// The box never wraps the antimeridian, so `west <= east` and
/// `south <= north` always hold for boxes produced by geohash decoding.
///
/// # Examples
///
/// ```
/// use geocell_types::bbox::BoundingBox;
///
/// let bbox = BoundingBox::new(-45.0, -90.0, 0.0, -45.0);
/// assert_eq!(bbox.height(), 45.0);
/// assert_eq!(bbox.center().lon, -67.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern latitude
    pub south: f64,
    /// Western longitude
    pub west: f64,
    /// Northern latitude
    pub north: f64,
    /// Eastern longitude
    pub east: f64,
}

impl BoundingBox {
    /// The whole geographic domain.
    pub const WORLD: BoundingBox = BoundingBox {
        south: -90.0,
        west: -180.0,
        north: 90.0,
        east: 180.0,
    };

    /// Create a bounding box from its four edges.
    pub const fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Latitudinal extent in degrees.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Longitudinal extent in degrees.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Midpoint of both axes.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south + self.north) * 0.5,
            (self.west + self.east) * 0.5,
        )
    }

    /// South-west corner.
    pub fn south_west(&self) -> Coordinate {
        Coordinate::new(self.south, self.west)
    }

    /// North-east corner.
    pub fn north_east(&self) -> Coordinate {
        Coordinate::new(self.north, self.east)
    }

    /// Check if a coordinate lies inside or on the edge of this box.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.lat >= self.south
            && coord.lat <= self.north
            && coord.lon >= self.west
            && coord.lon <= self.east
    }

    /// Convert to a `geo::Rect` (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            geo::coord! { x: self.west, y: self.south },
            geo::coord! { x: self.east, y: self.north },
        )
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        Self::new(rect.min().y, rect.min().x, rect.max().y, rect.max().x)
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_and_center() {
        let bbox = BoundingBox::new(40.0, -75.0, 41.0, -73.0);
        assert_eq!(bbox.height(), 1.0);
        assert_eq!(bbox.width(), 2.0);
        assert_eq!(bbox.center(), Coordinate::new(40.5, -74.0));
    }

    #[test]
    fn test_contains_edges() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(bbox.contains(&Coordinate::new(0.0, 0.0)));
        assert!(bbox.contains(&Coordinate::new(10.0, 10.0)));
        assert!(!bbox.contains(&Coordinate::new(10.1, 5.0)));
        assert!(!bbox.contains(&Coordinate::new(5.0, -0.1)));
    }

    #[test]
    fn test_rect_roundtrip() {
        let bbox = BoundingBox::new(-10.0, 20.0, 30.0, 40.0);
        let rect = bbox.to_rect();
        assert_eq!(rect.min().x, 20.0);
        assert_eq!(rect.min().y, -10.0);
        assert_eq!(BoundingBox::from(rect), bbox);
    }
}
