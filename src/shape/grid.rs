//! Grid shape bitmask with 2D addressing and derived queries
//!
//! Cells are stored row-major from the bottom row up: the linear index of
//! `(x, y)` is `y * width + x`. Display-facing code (row text, editor
//! toggles) walks rows top-down through the inverted mapping
//! `height - y - 1`; that inversion is an explicit flag on the operations
//! that need it rather than a second storage layout.

use std::hash::{Hash, Hasher};

use crate::io::configuration::{
    CELL_CAPACITY, DEFAULT_EXTRUDE_MARGIN, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use crate::io::error::{Result, ShapeError};
use crate::shape::bitmask::CellBits;
use crate::shape::position::{CellRect, GridPosition};

/// Fixed-capacity 2D bitmask of active grid cells
///
/// A `width x height` window over [`CELL_CAPACITY`] bits. Freshly built
/// shapes start with every bit active. Coordinate reads outside the window
/// return `false` and coordinate writes outside it are ignored, so per-cell
/// editing loops never need their own bounds checks.
#[derive(Debug, Clone, Copy)]
pub struct GridShape {
    width: usize,
    height: usize,
    bits: CellBits,
}

impl GridShape {
    /// Create a fully active shape except for the skipped positions
    ///
    /// Skipped positions outside `width x height` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CapacityExceeded`] if `width * height` exceeds
    /// [`CELL_CAPACITY`]
    pub fn new<I>(width: usize, height: usize, skipped: I) -> Result<Self>
    where
        I: IntoIterator<Item = GridPosition>,
    {
        check_capacity(width, height)?;

        let mut shape = Self {
            width,
            height,
            bits: CellBits::all(),
        };
        for position in skipped {
            shape.set_position(position, false);
        }
        Ok(shape)
    }

    /// Create a fully active shape
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CapacityExceeded`] if `width * height` exceeds
    /// [`CELL_CAPACITY`]
    pub fn filled(width: usize, height: usize) -> Result<Self> {
        Self::new(width, height, std::iter::empty())
    }

    /// Zero-sized shape; the backing bits are all active
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            bits: CellBits::all(),
        }
    }

    /// Fully active 2x2 shape, used when nothing else is configured
    pub fn rectangle_2x2() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            bits: CellBits::all(),
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Dimensions as `[width, height]`
    pub const fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    /// Number of addressable cells
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Test if the shape has no addressable cells
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Backing storage, including bits outside the grid window
    pub const fn bits(&self) -> &CellBits {
        &self.bits
    }

    /// Change the grid window without touching the backing bits
    ///
    /// Cells keep their linear indices, so a width change reflows the
    /// existing pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CapacityExceeded`] if `width * height` exceeds
    /// [`CELL_CAPACITY`]; the shape is left unchanged
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        check_capacity(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Linear index of a cell, optionally addressing rows top-down
    ///
    /// No bounds checking; callers pass in-range coordinates.
    pub const fn index_of(&self, x: usize, y: usize, invert_y: bool) -> usize {
        self.row(y, invert_y) * self.width + x
    }

    /// Cell addressed by a non-inverted linear index
    ///
    /// `None` for a zero-width shape.
    pub fn position_of(&self, index: usize) -> Option<GridPosition> {
        let x = index.checked_rem(self.width)?;
        let y = index.checked_div(self.width)?;
        Some(GridPosition::new(x as i32, y as i32))
    }

    /// Test a cell, `false` for out-of-range coordinates
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.cell_index(x, y)
            .is_some_and(|index| self.bits.get(index))
    }

    /// Test a cell by position, `false` when out of range
    pub fn contains_position(&self, position: GridPosition) -> bool {
        self.contains(position.x, position.y)
    }

    /// Set a cell, ignoring out-of-range coordinates
    pub fn set(&mut self, x: i32, y: i32, value: bool) {
        if let Some(index) = self.cell_index(x, y) {
            self.bits.set(index, value);
        }
    }

    /// Set a cell by position, ignoring out-of-range positions
    pub fn set_position(&mut self, position: GridPosition, value: bool) {
        self.set(position.x, position.y, value);
    }

    /// Flip a cell and return its new value
    ///
    /// Out-of-range coordinates are left alone and report `false`.
    pub fn toggle(&mut self, x: i32, y: i32) -> bool {
        self.cell_index(x, y)
            .is_some_and(|index| self.bits.toggle(index))
    }

    /// Read a bit by linear index
    ///
    /// Any index within [`CELL_CAPACITY`] is readable; indices at or past
    /// `len()` are not part of the grid and carry whatever was last stored.
    pub fn get_index(&self, index: usize) -> bool {
        self.bits.get(index)
    }

    /// Write a bit by linear index, ignored beyond [`CELL_CAPACITY`]
    pub fn set_index(&mut self, index: usize, value: bool) {
        self.bits.set(index, value);
    }

    /// Active cells in row-major scan order
    ///
    /// Rows are scanned from storage row 0 upwards. With `invert_y` the
    /// reported `y` of each cell is `height - y - 1`; the scan order is the
    /// same either way.
    pub fn valid_positions(&self, invert_y: bool) -> Vec<GridPosition> {
        let mut positions = Vec::with_capacity(self.active_count());
        for y in 0..self.height {
            for x in 0..self.width {
                if self.bits.get(self.index_of(x, y, false)) {
                    positions.push(GridPosition::new(x as i32, self.row(y, invert_y) as i32));
                }
            }
        }
        positions
    }

    /// Inclusive bounding rectangle of the active cells
    ///
    /// Returns `None` when no cell is active.
    pub fn valid_rect(&self) -> Option<CellRect> {
        self.bits
            .iter_ones(self.len())
            .filter_map(|index| self.position_of(index))
            .fold(None, |rect: Option<CellRect>, position| {
                Some(rect.map_or_else(
                    || CellRect::from_position(position),
                    |rect| rect.including(position),
                ))
            })
    }

    /// Number of active cells inside the grid window
    pub fn active_count(&self) -> usize {
        self.bits.count_ones(self.len())
    }

    /// Grow a halo around the active cells
    ///
    /// Every cell active in `self` activates the `margin_x` cells on each
    /// side along x and the `margin_y` cells on each side along y. Targets
    /// outside the grid are dropped. Only the original active cells seed
    /// growth, so the result does not depend on scan order. Margins wider
    /// than the grid behave like the grid size.
    #[must_use]
    pub fn extrude(&self, margin_x: usize, margin_y: usize) -> Self {
        let steps = |margin: usize, cells: usize| {
            i32::try_from(margin.min(cells)).unwrap_or(i32::MAX)
        };
        let (margin_x, margin_y) = (steps(margin_x, self.width), steps(margin_y, self.height));

        let mut grown = *self;
        for position in self.valid_positions(false) {
            for step in 1..=margin_x {
                grown.set_position(position.offset(step, 0), true);
                grown.set_position(position.offset(-step, 0), true);
            }
            for step in 1..=margin_y {
                grown.set_position(position.offset(0, step), true);
                grown.set_position(position.offset(0, -step), true);
            }
        }
        grown
    }

    /// Grow a one-cell halo along both axes
    #[must_use]
    pub fn extrude_default(&self) -> Self {
        self.extrude(DEFAULT_EXTRUDE_MARGIN, DEFAULT_EXTRUDE_MARGIN)
    }

    /// Normalized pivot that centers a sprite on cell `(0, 0)`
    ///
    /// Each axis is `0.5 / size`, or `0.0` for an empty axis.
    pub fn sprite_pivot(&self) -> [f32; 2] {
        let axis = |cells: usize| {
            if cells == 0 {
                0.0
            } else {
                0.5 / cells as f32
            }
        };
        [axis(self.width), axis(self.height)]
    }

    const fn row(&self, y: usize, invert_y: bool) -> usize {
        if invert_y {
            self.height.saturating_sub(y + 1)
        } else {
            y
        }
    }

    fn cell_index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| self.index_of(x, y, false))
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::rectangle_2x2()
    }
}

impl PartialEq for GridShape {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.bits.masked_words(self.len()) == other.bits.masked_words(other.len())
    }
}

impl Eq for GridShape {}

impl Hash for GridShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
        self.bits.masked_words(self.len()).hash(state);
    }
}

/// Reject dimensions whose cell count exceeds the bit capacity
///
/// # Errors
///
/// Returns [`ShapeError::CapacityExceeded`] when `width * height` overflows or
/// exceeds [`CELL_CAPACITY`]
pub fn check_capacity(width: usize, height: usize) -> Result<()> {
    if width
        .checked_mul(height)
        .is_none_or(|cells| cells > CELL_CAPACITY)
    {
        log::debug!("rejected {width}x{height} shape: exceeds {CELL_CAPACITY} cells");
        return Err(ShapeError::CapacityExceeded {
            width,
            height,
            capacity: CELL_CAPACITY,
        });
    }
    Ok(())
}
