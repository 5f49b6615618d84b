//! Cell layout for a graphic that draws one quad per active cell
//!
//! The graphic itself (vertices, textures, colors) lives elsewhere. This
//! module owns the geometry it needs: how big the host rectangle should be,
//! where each cell rectangle sits, and whether a local point hits an active
//! cell. Shape queries are cached behind dirty flags because hosts ask for
//! them on every layout and every pointer event.

use crate::io::configuration::DEFAULT_CELL_SIZE;
use crate::shape::{CellRect, GridPosition, GridShape};

/// How the host rectangle is sized from the shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResizeMode {
    /// Leave the host size alone
    None,
    /// Fit the full `width x height` grid
    Size,
    /// Fit the bounding rect of the active cells
    #[default]
    ValidPositions,
}

/// Axis-aligned rectangle of one drawn cell in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellQuad {
    /// Cell the quad was laid out for
    pub position: GridPosition,
    /// Lower-left corner
    pub min: [f32; 2],
    /// Upper-right corner
    pub max: [f32; 2],
}

/// Layout state for a shape drawn as a grid of cells
#[derive(Debug, Clone)]
pub struct ShapeLayout {
    shape: GridShape,
    cell_size: [f32; 2],
    extrude: f32,
    resize: ResizeMode,
    cached_positions: Option<Vec<GridPosition>>,
    cached_rect: Option<Option<CellRect>>,
}

impl Default for ShapeLayout {
    fn default() -> Self {
        Self::new(GridShape::default())
    }
}

impl ShapeLayout {
    /// Create a layout with default cell size, no extrusion and
    /// [`ResizeMode::ValidPositions`]
    pub const fn new(shape: GridShape) -> Self {
        Self {
            shape,
            cell_size: [DEFAULT_CELL_SIZE, DEFAULT_CELL_SIZE],
            extrude: 0.0,
            resize: ResizeMode::ValidPositions,
            cached_positions: None,
            cached_rect: None,
        }
    }

    /// Laid out shape
    pub const fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Cell edge lengths as `[x, y]`
    pub const fn cell_size(&self) -> [f32; 2] {
        self.cell_size
    }

    /// Margin added around every cell quad
    pub const fn extrude(&self) -> f32 {
        self.extrude
    }

    /// Host sizing mode
    pub const fn resize(&self) -> ResizeMode {
        self.resize
    }

    /// Replace the shape and drop cached queries
    pub fn set_shape(&mut self, shape: GridShape) {
        self.shape = shape;
        self.invalidate();
    }

    /// Change the cell size
    pub fn set_cell_size(&mut self, cell_size: [f32; 2]) {
        self.cell_size = cell_size;
        self.invalidate();
    }

    /// Change the quad margin
    pub fn set_extrude(&mut self, extrude: f32) {
        self.extrude = extrude;
        self.invalidate();
    }

    /// Change the host sizing mode
    pub fn set_resize(&mut self, resize: ResizeMode) {
        self.resize = resize;
        self.invalidate();
    }

    /// Drop cached shape queries
    ///
    /// Call after mutating the shape through any path other than
    /// [`Self::set_shape`].
    pub fn invalidate(&mut self) {
        self.cached_positions = None;
        self.cached_rect = None;
    }

    /// Active cells in storage order, computed once per shape change
    pub fn valid_positions(&mut self) -> &[GridPosition] {
        let shape = &self.shape;
        self.cached_positions
            .get_or_insert_with(|| shape.valid_positions(false))
            .as_slice()
    }

    /// Bounding rect of the active cells, computed once per shape change
    pub fn valid_rect(&mut self) -> Option<CellRect> {
        let shape = &self.shape;
        *self.cached_rect.get_or_insert_with(|| shape.valid_rect())
    }

    /// Host size the layout asks for, `None` when it does not drive the size
    pub fn preferred_size(&mut self) -> Option<[f32; 2]> {
        let cells = match self.resize {
            ResizeMode::None => return None,
            ResizeMode::Size => [self.shape.width() as f32, self.shape.height() as f32],
            ResizeMode::ValidPositions => self
                .valid_rect()
                .map_or([0.0, 0.0], |rect| {
                    let [x, y] = rect.size();
                    [(x + 1) as f32, (y + 1) as f32]
                }),
        };
        Some([cells[0] * self.cell_size[0], cells[1] * self.cell_size[1]])
    }

    /// One rectangle per active cell, placed relative to a host pivot
    ///
    /// Cell `p` starts at `p * cell_size + offset` and every side is pushed
    /// out by the extrude margin. The offset is `pivot * cell_size * -k`,
    /// where `k` is the grid size, or the bounding rect minimum when sizing
    /// by valid positions.
    pub fn cell_quads(&mut self, pivot: [f32; 2]) -> Vec<CellQuad> {
        let scale = match self.resize {
            ResizeMode::None | ResizeMode::Size => {
                [self.shape.width() as f32, self.shape.height() as f32]
            }
            ResizeMode::ValidPositions => self
                .valid_rect()
                .map_or([0.0, 0.0], |rect| [rect.min.x as f32, rect.min.y as f32]),
        };
        let [cell_x, cell_y] = self.cell_size;
        let offset = [-pivot[0] * cell_x * scale[0], -pivot[1] * cell_y * scale[1]];
        let extrude = self.extrude;

        self.valid_positions()
            .iter()
            .map(|&position| {
                let origin = [
                    (position.x as f32).mul_add(cell_x, offset[0]),
                    (position.y as f32).mul_add(cell_y, offset[1]),
                ];
                CellQuad {
                    position,
                    min: [origin[0] - extrude, origin[1] - extrude],
                    max: [origin[0] + cell_x + extrude, origin[1] + cell_y + extrude],
                }
            })
            .collect()
    }

    /// Test whether a local point lands on an active cell
    ///
    /// Points beyond the extruded grid bounds miss without touching the
    /// bitmask.
    pub fn is_hit(&self, local: [f32; 2]) -> bool {
        let [cell_x, cell_y] = self.cell_size;
        let max_x = cell_x.mul_add(self.shape.width() as f32, self.extrude);
        let max_y = cell_y.mul_add(self.shape.height() as f32, self.extrude);
        if local[0] < -self.extrude
            || local[1] < -self.extrude
            || local[0] > max_x
            || local[1] > max_y
        {
            return false;
        }

        let x = (local[0] / cell_x).floor();
        let y = (local[1] / cell_y).floor();
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        self.shape.contains(x as i32, y as i32)
    }
}
