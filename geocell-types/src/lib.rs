//! # geocell-types
//!
//! Plain geographic value types shared by the `geocell` crate.
//!
//! - **Coordinate**: a latitude/longitude pair in degrees
//! - **BoundingBox**: a south/west/north/east rectangle in degrees
//! - **Formulas**: equirectangular and haversine distances between coordinates
//!
//! All types are serializable with Serde and convert to and from the `geo`
//! crate's geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use geocell_types::bbox::BoundingBox;
//! use geocell_types::coordinate::Coordinate;
//!
//! let cambridge = Coordinate::new(52.205, 0.119);
//! let bbox = BoundingBox::new(52.0, 0.0, 52.5, 0.5);
//! assert!(bbox.contains(&cambridge));
//! ```

pub mod bbox;
pub mod coordinate;
pub mod formula;
