//! Fixed-capacity 2D cell bitmask describing which cells of a grid are active
//!
//! A shape stores up to 256 cells row-major from the bottom row up, encodes
//! to and from human-readable `0`/`1` row text, and answers the queries its
//! consumers need: point containment, active positions, bounding rect and
//! halo extrusion. Layout and editor helpers build on those queries.

#![forbid(unsafe_code)]

/// Editor-side toggle grid index tables and their cache
pub mod editor;
/// Input/output operations and error handling
pub mod io;
/// Host layout sizing, cell rectangles and hit testing
pub mod layout;
/// Grid shape bitmask, positions and text encoding
pub mod shape;

pub use io::error::{Result, ShapeError};
pub use shape::{CellRect, GridPosition, GridShape};
