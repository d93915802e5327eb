//! Neighbor lookup between geohash cells of equal precision.
//!
//! Each direction has a permutation table and a border set per length parity.
//! The permutation maps the last symbol of a cell to the last symbol of its
//! neighbor. When the last symbol sits on the border of its parent cell the
//! neighbor lives in a different parent, so the parent is moved first.
//!
//! There is no special handling at the poles or the antimeridian. Moving
//! north from the top row (or east from the last column) lands wherever the
//! tables send it, which is on the opposite side of the world box rather than
//! across the pole.

use crate::alphabet;
use crate::error::{GeohashError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// East/West reuse the North/South tables with the parity swapped.
const NORTH_EVEN: &[u8; 32] = b"p0r21436x8zb9dcf5h7kjnmqesgutwvy";
const NORTH_ODD: &[u8; 32] = b"bc01fg45238967deuvhjyznpkmstqrwx";
const SOUTH_EVEN: &[u8; 32] = b"14365h7k9dcfesgujnmqp0r2twvyx8zb";
const SOUTH_ODD: &[u8; 32] = b"238967debc01fg45kmstqrwxuvhjyznp";

const NORTH_EVEN_BORDER: &[u8] = b"prxz";
const NORTH_ODD_BORDER: &[u8] = b"bcfguvyz";
const SOUTH_EVEN_BORDER: &[u8] = b"028b";
const SOUTH_ODD_BORDER: &[u8] = b"0145hjnp";

/// A cardinal compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    fn neighbor_table(self, parity: usize) -> &'static [u8; 32] {
        match (self, parity) {
            (Direction::North, 0) | (Direction::East, 1) => NORTH_EVEN,
            (Direction::North, _) | (Direction::East, _) => NORTH_ODD,
            (Direction::South, 0) | (Direction::West, 1) => SOUTH_EVEN,
            (Direction::South, _) | (Direction::West, _) => SOUTH_ODD,
        }
    }

    fn border(self, parity: usize) -> &'static [u8] {
        match (self, parity) {
            (Direction::North, 0) | (Direction::East, 1) => NORTH_EVEN_BORDER,
            (Direction::North, _) | (Direction::East, _) => NORTH_ODD_BORDER,
            (Direction::South, 0) | (Direction::West, 1) => SOUTH_EVEN_BORDER,
            (Direction::South, _) | (Direction::West, _) => SOUTH_ODD_BORDER,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        };
        f.write_str(letter)
    }
}

impl FromStr for Direction {
    type Err = GeohashError;

    /// Reads the first character, case-insensitively, so `"N"`, `"north"`
    /// and `"NE"` all parse as north.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().chars().next() {
            Some(c) => Direction::try_from(c)
                .map_err(|_| GeohashError::InvalidDirection(s.to_string())),
            None => Err(GeohashError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = GeohashError;

    fn try_from(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Direction::North),
            'S' => Ok(Direction::South),
            'E' => Ok(Direction::East),
            'W' => Ok(Direction::West),
            _ => Err(GeohashError::InvalidDirection(c.to_string())),
        }
    }
}

/// The eight cells surrounding a geohash, in compass order.
///
/// Diagonals are two cardinal steps: `ne` is east of `n`, `nw` west of `n`,
/// `se` east of `s` and `sw` west of `s`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighbors<T> {
    pub n: T,
    pub ne: T,
    pub e: T,
    pub se: T,
    pub s: T,
    pub sw: T,
    pub w: T,
    pub nw: T,
}

impl<T> Neighbors<T> {
    /// Compass labels paired with the cells, clockwise from north.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &T)> {
        [
            ("N", &self.n),
            ("NE", &self.ne),
            ("E", &self.e),
            ("SE", &self.se),
            ("S", &self.s),
            ("SW", &self.sw),
            ("W", &self.w),
            ("NW", &self.nw),
        ]
        .into_iter()
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Neighbors<U> {
        Neighbors {
            n: f(self.n),
            ne: f(self.ne),
            e: f(self.e),
            se: f(self.se),
            s: f(self.s),
            sw: f(self.sw),
            w: f(self.w),
            nw: f(self.nw),
        }
    }
}

/// Geohash of the cell next to `geohash` in `direction`, at the same
/// precision.
///
/// # Examples
///
/// ```
/// use geocell::{adjacent, Direction};
///
/// assert_eq!(adjacent("u120fxw", Direction::North).unwrap(), "u120fxy");
/// assert_eq!(adjacent("u120fxw", "e".parse().unwrap()).unwrap(), "u120fxx");
/// assert!("up".parse::<Direction>().is_err());
/// ```
pub fn adjacent(geohash: &str, direction: Direction) -> Result<String> {
    let hash = alphabet::normalize(geohash)?;
    Ok(adjacent_valid(&hash, direction))
}

/// All eight neighbors of `geohash`.
///
/// # Examples
///
/// ```
/// use geocell::neighbors;
///
/// let around = neighbors("u120fxw").unwrap();
/// assert_eq!(around.n, "u120fxy");
/// assert_eq!(around.ne, "u120fxz");
/// assert_eq!(around.sw, "u120fxm");
/// ```
pub fn neighbors(geohash: &str) -> Result<Neighbors<String>> {
    let hash = alphabet::normalize(geohash)?;
    Ok(neighbors_valid(&hash))
}

/// Adjacent cell of an already validated, lowercase geohash.
pub(crate) fn adjacent_valid(hash: &str, direction: Direction) -> String {
    let (parent, last) = hash.split_at(hash.len() - 1);
    let last = last.as_bytes()[0];
    let parity = hash.len() % 2;

    let Some(index) = direction
        .neighbor_table(parity)
        .iter()
        .position(|&c| c == last)
    else {
        unreachable!("symbol {:?} missing from the {} table", last as char, direction);
    };

    let mut result = if !parent.is_empty() && direction.border(parity).contains(&last) {
        log::trace!("{} of {} crosses its parent {}", direction, hash, parent);
        adjacent_valid(parent, direction)
    } else {
        parent.to_string()
    };
    result.push(alphabet::symbol(index as u8));
    result
}

pub(crate) fn neighbors_valid(hash: &str) -> Neighbors<String> {
    let n = adjacent_valid(hash, Direction::North);
    let s = adjacent_valid(hash, Direction::South);
    Neighbors {
        ne: adjacent_valid(&n, Direction::East),
        nw: adjacent_valid(&n, Direction::West),
        se: adjacent_valid(&s, Direction::East),
        sw: adjacent_valid(&s, Direction::West),
        e: adjacent_valid(hash, Direction::East),
        w: adjacent_valid(hash, Direction::West),
        n,
        s,
    }
}
