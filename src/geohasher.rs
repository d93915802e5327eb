//! A configured entry point for encoding and measuring geohash cells.

use crate::cell::{Geohash, Position};
use crate::codec;
use crate::config::Config;
use crate::distance::DistanceTier;
use crate::error::Result;

/// Applies a validated [`Config`] to encode and distance calls.
///
/// # Examples
///
/// ```
/// use geocell::{Config, DistanceTier, Geohasher};
///
/// let hasher = Geohasher::new(Config::default().with_precision(7))?;
/// let a = hasher.encode(52.205, 0.119)?;
/// assert_eq!(a.as_str(), "u120fxw");
///
/// let b = hasher.cell("u120fxx")?;
/// let meters = hasher.distance(&a, &b, DistanceTier::GreatCircle);
/// assert!(meters > 50.0 && meters < 150.0);
/// # Ok::<(), geocell::GeohashError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Geohasher {
    config: Config,
}

impl Geohasher {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        log::debug!("Geohasher configured: {:?}", config);
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encode at the configured precision, or the shortest reproducing one.
    pub fn encode(&self, lat: f64, lon: f64) -> Result<Geohash> {
        let hash = match self.config.default_precision {
            Some(precision) => codec::encode_with_precision(lat, lon, precision)?,
            None => codec::encode_auto(lat, lon, self.config.auto_precision_epsilon)?,
        };
        Ok(Geohash::from_valid(hash))
    }

    pub fn encode_position<P: Position + ?Sized>(&self, position: &P) -> Result<Geohash> {
        self.encode(position.lat(), position.lon())
    }

    /// Parse and validate a geohash string.
    pub fn cell(&self, geohash: &str) -> Result<Geohash> {
        Geohash::new(geohash)
    }

    /// Distance between two cells with the configured radius, latitude
    /// adjustment and longitude wrapping.
    pub fn distance(&self, a: &Geohash, b: &Geohash, tier: DistanceTier) -> f64 {
        let radius = self.config.earth_radius;
        match tier {
            DistanceTier::Prefix => a.distance1_to(b),
            DistanceTier::FlatEarth => {
                a.distance2_to(b, radius, self.config.adjust_latitude, self.config.wrap_longitude)
            }
            DistanceTier::GreatCircle => a.distance3_to(b, radius, self.config.wrap_longitude),
        }
    }

    /// [`Geohasher::distance`] with the configured tier.
    pub fn default_distance(&self, a: &Geohash, b: &Geohash) -> f64 {
        self.distance(a, b, self.config.distance_tier)
    }

    /// The encoded cell of a position followed by its eight neighbors,
    /// clockwise from north.
    pub fn neighborhood<P: Position + ?Sized>(&self, position: &P) -> Result<Vec<Geohash>> {
        let cell = self.encode_position(position)?;
        let mut cells = Vec::with_capacity(9);
        cells.extend(cell.neighbors().iter().map(|(_, neighbor)| neighbor.clone()));
        cells.insert(0, cell);
        Ok(cells)
    }
}
