//! Layout geometry for graphics that draw a shape cell by cell

/// Host sizing, cell quads and hit testing
pub mod graphic;

pub use graphic::{CellQuad, ResizeMode, ShapeLayout};
