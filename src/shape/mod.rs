//! Grid shape bitmask and its value types
//!
//! This module contains the core shape functionality:
//! - Fixed-capacity bit storage
//! - Cell coordinates and bounding rectangles
//! - 2D addressing, queries and extrusion
//! - Row-text encoding and serde support

/// Fixed-capacity bit storage
pub mod bitmask;
/// Shape construction, addressing and derived queries
pub mod grid;
/// Cell coordinates and bounding rectangles
pub mod position;
/// Row-text encoding, parsing and serialization
pub mod text;

pub use grid::GridShape;
pub use position::{CellRect, GridPosition};
