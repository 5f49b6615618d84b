//! Editor support for drawing and toggling shapes
//!
//! Editors draw a toggle per cell, top row first, and flip bits as the user
//! clicks. Index tables keep that mapping cached per edited object.

/// Display-to-storage index tables and their per-owner cache
pub mod index_table;

pub use index_table::{IndexTable, IndexTableCache};
