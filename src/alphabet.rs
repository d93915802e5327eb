//! The geohash base-32 alphabet.
//!
//! The alphabet leaves out `a`, `i`, `l` and `o`. Lookups in both directions
//! are constant time: value to symbol indexes the alphabet directly, symbol to
//! value goes through a 128-entry table built once on first use.

use crate::error::{GeohashError, Result};
use once_cell::sync::Lazy;

/// The 32 geohash symbols in value order.
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Longest geohash supported (60 bits).
pub const MAX_PRECISION: usize = 12;

/// Bits carried by each symbol.
pub const BITS_PER_CHAR: usize = 5;

const INVALID: u8 = u8::MAX;

static DECODE_TABLE: Lazy<[u8; 128]> = Lazy::new(|| {
    let mut table = [INVALID; 128];
    for (value, &symbol) in BASE32.iter().enumerate() {
        table[symbol as usize] = value as u8;
    }
    table
});

/// Symbol for a 5-bit value.
///
/// # Panics
///
/// Panics if `value >= 32`.
#[inline]
pub fn symbol(value: u8) -> char {
    BASE32[value as usize] as char
}

/// 5-bit value of a lowercase symbol, or `None` if it is not in the alphabet.
///
/// # Examples
///
/// ```
/// use geocell::alphabet::value_of;
///
/// assert_eq!(value_of('0'), Some(0));
/// assert_eq!(value_of('z'), Some(31));
/// assert_eq!(value_of('a'), None);
/// assert_eq!(value_of('U'), None);
/// ```
#[inline]
pub fn value_of(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Case-fold and check a geohash string.
///
/// Returns the lowercase form if it has 1 to 12 characters, all in the
/// alphabet.
///
/// # Examples
///
/// ```
/// use geocell::alphabet::normalize;
///
/// assert_eq!(normalize("U120FXW").unwrap(), "u120fxw");
/// assert!(normalize("").is_err());
/// assert!(normalize("u120fxwshvkg0").is_err());
/// assert!(normalize("abc").is_err());
/// ```
pub fn normalize(geohash: &str) -> Result<String> {
    let len = geohash.chars().count();
    if len == 0 || len > MAX_PRECISION {
        return Err(GeohashError::InvalidGeohash(geohash.to_string()));
    }

    let lower = geohash.to_ascii_lowercase();
    if lower.chars().all(|c| value_of(c).is_some()) {
        Ok(lower)
    } else {
        Err(GeohashError::InvalidGeohash(geohash.to_string()))
    }
}
