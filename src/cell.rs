//! The `Geohash` cell type.

use crate::adjacency::{Direction, Neighbors, adjacent_valid, neighbors_valid};
use crate::alphabet;
use crate::codec::{self, bounds_of_valid};
use crate::distance::{self, CellSize};
use crate::error::{GeohashError, Result};
use crate::validation::parse_lat_lon;
use geocell_types::bbox::BoundingBox;
use geocell_types::coordinate::Coordinate;
use geocell_types::formula;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Anything that carries a latitude and longitude in degrees.
///
/// Implemented for [`Coordinate`], `geo::Point`, `geo::Coord` (x = lon,
/// y = lat) and `(lat, lon)` tuples.
pub trait Position {
    fn lat(&self) -> f64;
    fn lon(&self) -> f64;
}

impl Position for Coordinate {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl Position for geo::Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }

    fn lon(&self) -> f64 {
        self.x()
    }
}

impl Position for geo::Coord<f64> {
    fn lat(&self) -> f64 {
        self.y
    }

    fn lon(&self) -> f64 {
        self.x
    }
}

impl Position for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }

    fn lon(&self) -> f64 {
        self.1
    }
}

/// A validated geohash cell.
///
/// The geohash string is checked once, at construction, and stored in
/// lowercase. Bounds, center and the eight neighbors are computed on first
/// use and cached for the lifetime of the value. The caches are
/// `OnceCell`s, so a `Geohash` can be shared across threads.
///
/// Equality, ordering and hashing only look at the geohash string.
///
/// # Examples
///
/// ```
/// use geocell::{Direction, Geohash};
///
/// let cell = Geohash::encode(52.205, 0.119, Some(7))?;
/// assert_eq!(cell.as_str(), "u120fxw");
/// assert_eq!(cell.precision(), 7);
///
/// let center = cell.center();
/// assert!(cell.bounds().contains(&center));
///
/// assert_eq!(cell.neighbors().n.as_str(), "u120fxy");
/// assert_eq!(cell.adjacent(Direction::West).as_str(), "u120fxt");
/// # Ok::<(), geocell::GeohashError>(())
/// ```
#[derive(Clone)]
pub struct Geohash {
    hash: String,
    bounds: OnceCell<BoundingBox>,
    center: OnceCell<Coordinate>,
    neighbors: OnceCell<Box<Neighbors<Geohash>>>,
}

impl Geohash {
    /// Validate a geohash string (case-insensitive).
    pub fn new(geohash: &str) -> Result<Self> {
        alphabet::normalize(geohash).map(Self::from_valid)
    }

    /// Encode a latitude/longitude, see [`crate::encode`].
    pub fn encode(lat: f64, lon: f64, precision: Option<usize>) -> Result<Self> {
        codec::encode(lat, lon, precision).map(Self::from_valid)
    }

    /// Encode any [`Position`].
    ///
    /// ```
    /// use geocell::Geohash;
    /// use geo::Point;
    ///
    /// let cell = Geohash::from_position(&Point::new(0.119, 52.205), Some(7))?;
    /// assert_eq!(cell.as_str(), "u120fxw");
    /// # Ok::<(), geocell::GeohashError>(())
    /// ```
    pub fn from_position<P: Position + ?Sized>(
        position: &P,
        precision: Option<usize>,
    ) -> Result<Self> {
        Self::encode(position.lat(), position.lon(), precision)
    }

    /// Encode `"lat,lon"` text.
    ///
    /// ```
    /// use geocell::Geohash;
    ///
    /// let cell = Geohash::from_lat_lon_text("52.205, 0.1188", None)?;
    /// assert_eq!(cell.as_str(), "u120fxw");
    /// # Ok::<(), geocell::GeohashError>(())
    /// ```
    pub fn from_lat_lon_text(text: &str, precision: Option<usize>) -> Result<Self> {
        let (lat, lon) = parse_lat_lon(text)?;
        Self::encode(lat, lon, precision)
    }

    pub(crate) fn from_valid(hash: String) -> Self {
        Self {
            hash,
            bounds: OnceCell::new(),
            center: OnceCell::new(),
            neighbors: OnceCell::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// Number of characters, 1 to 12.
    pub fn precision(&self) -> usize {
        self.hash.len()
    }

    /// South/west/north/east bounds of the cell.
    pub fn bounds(&self) -> BoundingBox {
        *self.bounds.get_or_init(|| bounds_of_valid(&self.hash))
    }

    /// Cell center at full floating point precision.
    pub fn center(&self) -> Coordinate {
        *self.center.get_or_init(|| self.bounds().center())
    }

    /// Cell center as `(phi, lambda)` in radians.
    pub fn center_radians(&self) -> (f64, f64) {
        self.center().to_radians()
    }

    /// Cell center converted into any type built from a [`Coordinate`].
    ///
    /// ```
    /// use geocell::Geohash;
    /// use geo::Point;
    ///
    /// let point: Point = Geohash::new("geek")?.to_position();
    /// assert_eq!(point.x(), -17.75390625);
    /// # Ok::<(), geocell::GeohashError>(())
    /// ```
    pub fn to_position<P: From<Coordinate>>(&self) -> P {
        P::from(self.center())
    }

    /// Center as text rounded to the cell's precision, see [`crate::decode`].
    pub fn decode(&self) -> (String, String) {
        codec::rounded_center_text(&self.bounds())
    }

    /// Half the cell height and width in degrees, as `(lat_err, lon_err)`.
    pub fn decode_error(&self) -> (f64, f64) {
        let bounds = self.bounds();
        (bounds.height() * 0.5, bounds.width() * 0.5)
    }

    /// Approximate cell height and width in meters.
    pub fn sizes(&self) -> CellSize {
        distance::cell_size(self.precision())
    }

    /// The cell next to this one in `direction`.
    pub fn adjacent(&self, direction: Direction) -> Geohash {
        let cell = match direction {
            Direction::North => self.north(),
            Direction::South => self.south(),
            Direction::East => self.east(),
            Direction::West => self.west(),
        };
        cell.clone()
    }

    /// All eight surrounding cells. Diagonals are composed from two
    /// cardinal steps.
    pub fn neighbors(&self) -> &Neighbors<Geohash> {
        self.neighbors
            .get_or_init(|| Box::new(neighbors_valid(&self.hash).map(Geohash::from_valid)))
    }

    pub fn north(&self) -> &Geohash {
        &self.neighbors().n
    }

    pub fn south(&self) -> &Geohash {
        &self.neighbors().s
    }

    pub fn east(&self) -> &Geohash {
        &self.neighbors().e
    }

    pub fn west(&self) -> &Geohash {
        &self.neighbors().w
    }

    pub fn north_east(&self) -> &Geohash {
        &self.neighbors().ne
    }

    pub fn north_west(&self) -> &Geohash {
        &self.neighbors().nw
    }

    pub fn south_east(&self) -> &Geohash {
        &self.neighbors().se
    }

    pub fn south_west(&self) -> &Geohash {
        &self.neighbors().sw
    }

    /// Step in `direction` without touching the neighbor cache.
    pub fn step(&self, direction: Direction) -> Geohash {
        Geohash::from_valid(adjacent_valid(&self.hash, direction))
    }

    /// Tier 1 distance estimate in meters, see [`crate::distance1`].
    pub fn distance1_to(&self, other: &Geohash) -> f64 {
        distance::prefix_distance(&self.hash, &other.hash)
    }

    /// Tier 2: equirectangular distance between the cell centers, in the
    /// units of `radius`.
    ///
    /// `adjust` scales the longitudinal delta by the cosine of the mean
    /// latitude, `wrap` unrolls it across the antimeridian.
    pub fn distance2_to(&self, other: &Geohash, radius: f64, adjust: bool, wrap: bool) -> f64 {
        formula::equirectangular(&self.center(), &other.center(), radius, adjust, wrap)
    }

    /// Tier 2 without a radius: squared angular distance in degrees².
    pub fn distance2_squared(&self, other: &Geohash, adjust: bool, wrap: bool) -> f64 {
        formula::equirectangular_squared(&self.center(), &other.center(), adjust, wrap)
    }

    /// Tier 3: haversine distance between the cell centers, in the units of
    /// `radius`.
    pub fn distance3_to(&self, other: &Geohash, radius: f64, wrap: bool) -> f64 {
        formula::haversine(&self.center(), &other.center(), radius, wrap)
    }
}

impl fmt::Debug for Geohash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Geohash").field(&self.hash).finish()
    }
}

impl fmt::Display for Geohash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash)
    }
}

impl AsRef<str> for Geohash {
    fn as_ref(&self) -> &str {
        &self.hash
    }
}

impl PartialEq for Geohash {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Geohash {}

impl PartialEq<str> for Geohash {
    fn eq(&self, other: &str) -> bool {
        self.hash == other
    }
}

impl PartialEq<&str> for Geohash {
    fn eq(&self, other: &&str) -> bool {
        self.hash == *other
    }
}

impl Hash for Geohash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl PartialOrd for Geohash {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Geohash {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hash.cmp(&other.hash)
    }
}

impl FromStr for Geohash {
    type Err = GeohashError;

    fn from_str(s: &str) -> Result<Self> {
        Geohash::new(s)
    }
}

impl TryFrom<&str> for Geohash {
    type Error = GeohashError;

    fn try_from(s: &str) -> Result<Self> {
        Geohash::new(s)
    }
}

impl TryFrom<String> for Geohash {
    type Error = GeohashError;

    fn try_from(s: String) -> Result<Self> {
        Geohash::new(&s)
    }
}

impl From<Geohash> for String {
    fn from(cell: Geohash) -> Self {
        cell.hash
    }
}

impl Serialize for Geohash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hash)
    }
}

impl<'de> Deserialize<'de> for Geohash {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Geohash::new(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_paths_agree() {
        let from_str = Geohash::new("u120fxw").unwrap();
        let from_coords = Geohash::encode(52.205, 0.119, Some(7)).unwrap();
        let from_text = Geohash::from_lat_lon_text("52.205,0.119", Some(7)).unwrap();
        let from_tuple = Geohash::from_position(&(52.205, 0.119), Some(7)).unwrap();
        let from_coord =
            Geohash::from_position(&Coordinate::new(52.205, 0.119), Some(7)).unwrap();
        let copy = from_str.clone();

        for cell in [from_coords, from_text, from_tuple, from_coord, copy] {
            assert_eq!(cell, from_str);
        }
    }

    #[test]
    fn test_lowercases_input() {
        let cell: Geohash = "U120FXW".parse().unwrap();
        assert_eq!(cell, "u120fxw");
        assert_eq!(cell.to_string(), "u120fxw");
    }

    #[test]
    fn test_invalid_construction() {
        assert!(matches!(Geohash::new(""), Err(GeohashError::InvalidGeohash(_))));
        assert!(Geohash::new("u120fxwshvkg0").is_err());
        assert!(Geohash::new("hello").is_err());
        assert!(matches!(
            Geohash::from_lat_lon_text("52.205", None),
            Err(GeohashError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            Geohash::from_position(&(0.0, 200.0), None),
            Err(GeohashError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_caches_are_stable() {
        let cell = Geohash::new("gcpvj0").unwrap();
        let first = cell.neighbors() as *const Neighbors<Geohash>;
        let second = cell.neighbors() as *const Neighbors<Geohash>;
        assert_eq!(first, second);
        assert_eq!(cell.bounds(), cell.bounds());
        assert_eq!(cell.center(), cell.bounds().center());
    }

    #[test]
    fn test_adjacent_matches_step() {
        let cell = Geohash::new("gbsuv").unwrap();
        for direction in Direction::ALL {
            assert_eq!(cell.adjacent(direction), cell.step(direction));
        }
        assert_eq!(cell.north(), "gbsvj");
        assert_eq!(cell.north_east(), cell.north().east());
        assert_eq!(cell.south_west(), cell.south().west());
    }

    #[test]
    fn test_sizes_and_errors() {
        let cell = Geohash::new("u120fxw").unwrap();
        assert_eq!(cell.sizes().height, 153.0);
        let (lat_err, lon_err) = cell.decode_error();
        assert_eq!(lat_err, cell.bounds().height() / 2.0);
        assert_eq!(lon_err, cell.bounds().width() / 2.0);
    }

    #[test]
    fn test_distances_match_free_functions() {
        let a = Geohash::new("u120fxwsh").unwrap();
        let b = Geohash::new("u120fxws0").unwrap();
        assert_eq!(a.distance1_to(&b), 15.239);
        assert_eq!(
            a.distance2_to(&b, formula::R_M, false, false),
            crate::distance2("u120fxwsh", "u120fxws0", None).unwrap()
        );
        assert_eq!(
            a.distance3_to(&b, formula::R_M, false),
            crate::distance3("u120fxwsh", "u120fxws0", None).unwrap()
        );
        let squared = a.distance2_squared(&b, false, false);
        let meters = a.distance2_to(&b, formula::R_M, false, false);
        assert!((squared.sqrt().to_radians() * formula::R_M - meters).abs() < 1e-9);
    }

    #[test]
    fn test_serde_as_string() {
        let cell = Geohash::new("sunny").unwrap();
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, "\"sunny\"");
        let back: Geohash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
        assert!(serde_json::from_str::<Geohash>("\"sunnya\"").is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Geohash>();
    }
}
