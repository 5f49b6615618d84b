//! Row-text encoding of grid shapes
//!
//! One line per row, `'1'` for an active cell and `'0'` for an inactive one,
//! every line terminated by `'\n'`. The first text line is the top storage
//! row (`y = height - 1`):
//!
//! ```text
//! 00110
//! 01000
//! 00001
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::io::configuration::{ACTIVE_CELL_CHAR, INACTIVE_CELL_CHAR};
use crate::io::error::{Result, ShapeError};
use crate::shape::grid::GridShape;

impl GridShape {
    /// Encode the shape as row text, top row first
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity((self.width() + 1) * self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                text.push(if self.get_index(self.index_of(x, y, true)) {
                    ACTIVE_CELL_CHAR
                } else {
                    INACTIVE_CELL_CHAR
                });
            }
            text.push('\n');
        }
        text
    }

    /// Decode row text into this shape
    ///
    /// Height is the number of non-empty lines and width the length of the
    /// first one. The bits are not cleared first: a line shorter than the
    /// width leaves its trailing cells as they were, and characters past the
    /// width are dropped. Empty text leaves the shape unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CapacityExceeded`] if the text describes more
    /// cells than fit; the shape is left unchanged
    pub fn apply_text(&mut self, text: &str) -> Result<()> {
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .collect();

        let Some(first) = lines.first() else {
            return Ok(());
        };

        let width = first.chars().count();
        let height = lines.len();
        self.resize(width, height)?;

        for (y, line) in lines.iter().enumerate() {
            let mut columns = 0;
            for (x, cell) in line.chars().take(width).enumerate() {
                self.set_index(self.index_of(x, y, true), cell == ACTIVE_CELL_CHAR);
                columns += 1;
            }
            if columns < width {
                log::debug!("row {y} has {columns} of {width} cells; trailing cells kept");
            }
        }
        Ok(())
    }

    /// Decode row text into a fresh shape
    ///
    /// Cells not covered by the text stay active.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CapacityExceeded`] if the text describes more
    /// cells than fit
    pub fn from_text(text: &str) -> Result<Self> {
        let mut shape = Self::empty();
        shape.apply_text(text)?;
        Ok(shape)
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for GridShape {
    type Err = ShapeError;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_text(text)
    }
}

impl Serialize for GridShape {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for GridShape {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ShapeTextVisitor)
    }
}

struct ShapeTextVisitor;

impl Visitor<'_> for ShapeTextVisitor {
    type Value = GridShape;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("newline-separated rows of '0' and '1'")
    }

    fn visit_str<E>(self, text: &str) -> std::result::Result<GridShape, E>
    where
        E: de::Error,
    {
        GridShape::from_text(text).map_err(E::custom)
    }
}
