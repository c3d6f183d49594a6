//! Pointer-to-cell mapping.
//!
//! Screen positions come in window pixels; the view supplies the grid's
//! on-screen origin and cell size whenever layout changes.

use crate::domain::CellAddress;

/// A pointer position in window pixels
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Largest per-axis distance to `other`
    pub fn chebyshev_distance(&self, other: ScreenPoint) -> f32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// Where the grid sits on screen
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GridGeometry {
    pub origin: ScreenPoint,
    pub cell_size: f32,
    pub width: usize,
    pub height: usize,
}

impl GridGeometry {
    pub fn new(origin: ScreenPoint, cell_size: f32, width: usize, height: usize) -> Self {
        Self {
            origin,
            cell_size,
            width,
            height,
        }
    }

    /// Cell under `pointer`, clamped onto the grid
    pub fn resolve_cell(&self, pointer: ScreenPoint) -> CellAddress {
        resolve_cell(pointer, self.origin, self.cell_size, self.width, self.height)
    }

    /// Whether `pointer` is over the grid itself rather than clamped onto an edge.
    /// Left and top edges count as inside, right and bottom edges do not.
    pub fn contains(&self, pointer: ScreenPoint) -> bool {
        let right = self.origin.x + self.pixel_width();
        let bottom = self.origin.y + self.pixel_height();
        pointer.x >= self.origin.x && pointer.x < right && pointer.y >= self.origin.y && pointer.y < bottom
    }

    pub fn pixel_width(&self) -> f32 {
        self.cell_size * self.width as f32
    }

    pub fn pixel_height(&self) -> f32 {
        self.cell_size * self.height as f32
    }
}

/// Map a pointer position to a grid cell.
///
/// Total over every `f32` input: positions off the grid, infinities and NaN
/// all clamp onto a valid cell.
pub fn resolve_cell(
    pointer: ScreenPoint,
    origin: ScreenPoint,
    cell_size: f32,
    width: usize,
    height: usize,
) -> CellAddress {
    let row = clamp_axis((pointer.y - origin.y) / cell_size, height);
    let column = clamp_axis((pointer.x - origin.x) / cell_size, width);
    CellAddress::new(row, column)
}

// float->int `as` casts saturate and map NaN to 0
fn clamp_axis(offset: f32, cells: usize) -> usize {
    let index = offset.floor().max(0.0) as usize;
    index.min(cells.saturating_sub(1))
}
