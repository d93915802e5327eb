//! Geohash encoding, decoding, neighbor lookup and distance estimation.
//!
//! ```rust
//! use geocell::{Direction, Geohash, decode, encode};
//!
//! let hash = encode(52.205, 0.119, Some(7))?;
//! assert_eq!(hash, "u120fxw");
//! assert_eq!(decode(&hash)?, ("52.205".to_string(), "0.1188".to_string()));
//!
//! let cell = Geohash::new(&hash)?;
//! assert_eq!(cell.adjacent(Direction::North).as_str(), "u120fxy");
//! # Ok::<(), geocell::GeohashError>(())
//! ```

pub mod adjacency;
pub mod alphabet;
pub mod cell;
pub mod codec;
pub mod config;
pub mod distance;
pub mod error;
pub mod geohasher;
pub mod resolution;
pub mod validation;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use adjacency::{Direction, Neighbors, adjacent, neighbors};
pub use cell::{Geohash, Position};
pub use codec::{bounds, decode, decode_error, decode_exact, decode2, encode};
pub use config::Config;
pub use distance::{
    CELL_SIZES, CellSize, DistanceTier, distance_between, distance1, distance2, distance3, sizes,
};
pub use error::{GeohashError, Result};
pub use geohasher::Geohasher;
pub use resolution::{precision_for, resolution};

pub use geocell_types::bbox::BoundingBox;
pub use geocell_types::coordinate::Coordinate;
pub use geocell_types::formula::R_M;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{GeohashError, Result};

    pub use crate::{BoundingBox, Coordinate, Direction, Geohash, Neighbors, Position};

    pub use crate::{Config, DistanceTier, Geohasher};

    pub use crate::{adjacent, decode, encode, neighbors};
}
