//! Toggle grid addressing for shape editors
//!
//! Editors draw a shape top row first. An [`IndexTable`] maps each drawn
//! `(column, row)` onto the storage position and linear bit index it edits,
//! so the draw loop never repeats the Y inversion arithmetic.

use ndarray::Array2;
use std::collections::HashMap;

use crate::io::error::Result;
use crate::shape::grid::check_capacity;
use crate::shape::{GridPosition, GridShape};

/// Precomputed display-to-storage mapping for one grid size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTable {
    /// Entries indexed by `[row, column]`, row 0 being the top display row
    entries: Array2<(GridPosition, usize)>,
    size: [usize; 2],
}

impl IndexTable {
    /// Build the table for a `width x height` grid
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::CapacityExceeded`] if the grid holds more cells
    /// than a shape can address
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_capacity(width, height)?;
        Ok(Self::build(width, height))
    }

    /// Build the table matching a shape's size
    pub fn for_shape(shape: &GridShape) -> Self {
        Self::build(shape.width(), shape.height())
    }

    fn build(width: usize, height: usize) -> Self {
        let entries = Array2::from_shape_fn((height, width), |(row, column)| {
            let y = height - row - 1;
            let position = GridPosition::new(column as i32, y as i32);
            (position, y * width + column)
        });

        Self {
            entries,
            size: [width, height],
        }
    }

    /// Grid size this table was built for, as `[width, height]`
    pub const fn size(&self) -> [usize; 2] {
        self.size
    }

    /// Number of display columns
    pub const fn columns(&self) -> usize {
        self.size[0]
    }

    /// Number of display rows
    pub const fn rows(&self) -> usize {
        self.size[1]
    }

    /// Storage position and bit index behind a display cell
    pub fn get(&self, column: usize, row: usize) -> Option<(GridPosition, usize)> {
        self.entries.get([row, column]).copied()
    }

    /// Flip the bit behind a display cell and return its new value
    ///
    /// Cells outside the table are ignored and report `false`.
    pub fn toggle(&self, shape: &mut GridShape, column: usize, row: usize) -> bool {
        self.get(column, row).is_some_and(|(_, index)| {
            let value = !shape.get_index(index);
            shape.set_index(index, value);
            value
        })
    }

    /// Toggle states in display order, top row first
    pub fn display_rows(&self, shape: &GridShape) -> Vec<Vec<bool>> {
        self.entries
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&(_, index)| shape.get_index(index)).collect())
            .collect()
    }
}

/// Memoized index tables keyed by the identity of the owning object
///
/// A cached table is rebuilt whenever the requested size differs from the
/// one it was built for.
#[derive(Default)]
pub struct IndexTableCache {
    tables: HashMap<u64, IndexTable>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of builds, including rebuilds after a size change
    pub misses: usize,
}

impl IndexTableCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the owner's table, building it if missing or stale
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::CapacityExceeded`] if the grid holds more cells
    /// than a shape can address; the cache is left unchanged
    pub fn get_or_build(
        &mut self,
        owner: u64,
        width: usize,
        height: usize,
    ) -> Result<&IndexTable> {
        check_capacity(width, height)?;
        Ok(self.lookup(owner, width, height))
    }

    /// Retrieve the table matching a shape's size
    pub fn get_for_shape(&mut self, owner: u64, shape: &GridShape) -> &IndexTable {
        self.lookup(owner, shape.width(), shape.height())
    }

    fn lookup(&mut self, owner: u64, width: usize, height: usize) -> &IndexTable {
        use std::collections::hash_map::Entry;

        match self.tables.entry(owner) {
            Entry::Occupied(entry) if entry.get().size() == [width, height] => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Occupied(mut entry) => {
                self.stats.misses += 1;
                log::trace!("rebuilding index table for owner {owner} at {width}x{height}");
                entry.insert(IndexTable::build(width, height));
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(IndexTable::build(width, height))
            }
        }
    }

    /// Drop the owner's table
    pub fn invalidate(&mut self, owner: u64) {
        self.tables.remove(&owner);
    }

    /// Drop every table
    pub fn clear(&mut self) {
        self.tables.clear();
    }

    /// Number of cached tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Test if no tables are cached
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
