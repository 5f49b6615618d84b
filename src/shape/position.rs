//! Cell coordinates and inclusive bounding rectangles

use std::fmt;

/// Integer cell coordinate, `x` along columns and `y` along storage rows
///
/// Coordinates are signed so callers can probe outside the grid; every
/// shape query treats negative or oversized coordinates as out of range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    /// Column
    pub x: i32,
    /// Row in storage order (row 0 is the bottom row)
    pub y: i32,
}

impl GridPosition {
    /// Create a position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise minimum
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Offset by a signed step
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for GridPosition {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle over cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    /// Minimum coordinates (inclusive)
    pub min: GridPosition,
    /// Maximum coordinates (inclusive)
    pub max: GridPosition,
}

impl CellRect {
    /// Degenerate rectangle covering a single cell
    pub const fn from_position(position: GridPosition) -> Self {
        Self {
            min: position,
            max: position,
        }
    }

    /// Grow the rectangle to cover a position
    #[must_use]
    pub fn including(self, position: GridPosition) -> Self {
        Self {
            min: self.min.min(position),
            max: self.max.max(position),
        }
    }

    /// Extent as `max - min` per axis, zero for a single cell
    pub const fn size(&self) -> [i32; 2] {
        [self.max.x - self.min.x, self.max.y - self.min.y]
    }

    /// Check if a position is within the bounds
    pub const fn contains(&self, position: GridPosition) -> bool {
        position.x >= self.min.x
            && position.x <= self.max.x
            && position.y >= self.min.y
            && position.y <= self.max.y
    }
}

impl fmt::Display for CellRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
