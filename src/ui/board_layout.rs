//! Board layout calculations - handles sizing and coordinate transformations.

use gpui::{Bounds, Pixels, Point, Size, point, px};

use crate::config::MIN_CELL_SIZE;
use crate::domain::{GridGeometry, ScreenPoint};
use crate::ui::theme::{BOARD_PADDING, TILE_SCALE};

/// Sizes and positions the grid inside the measured board panel
#[derive(Clone, Copy, Debug)]
pub struct BoardLayout {
    /// Panel bounds in window coordinates
    pub panel: Bounds<Pixels>,
    pub columns: usize,
    pub rows: usize,
    pub preferred_cell: f32,
}

impl BoardLayout {
    pub fn new(panel: Bounds<Pixels>, columns: usize, rows: usize, preferred_cell: f32) -> Self {
        Self {
            panel,
            columns,
            rows,
            preferred_cell,
        }
    }

    /// Largest cell that fits the panel, capped at the preferred size
    pub fn cell_size(&self) -> f32 {
        let panel_width: f32 = self.panel.size.width.into();
        let panel_height: f32 = self.panel.size.height.into();
        let available_width = panel_width - BOARD_PADDING * 2.0;
        let available_height = panel_height - BOARD_PADDING * 2.0;
        let fit = (available_width / self.columns.max(1) as f32)
            .min(available_height / self.rows.max(1) as f32);
        fit.min(self.preferred_cell).max(MIN_CELL_SIZE)
    }

    pub fn tile_size(&self) -> f32 {
        self.cell_size() * TILE_SCALE
    }

    pub fn board_width(&self) -> f32 {
        self.cell_size() * self.columns as f32
    }

    pub fn board_height(&self) -> f32 {
        self.cell_size() * self.rows as f32
    }

    /// Top-left corner of the grid in window coordinates
    pub fn grid_origin(&self) -> ScreenPoint {
        let x: f32 = self.panel.origin.x.into();
        let y: f32 = self.panel.origin.y.into();
        ScreenPoint::new(x + BOARD_PADDING, y + BOARD_PADDING)
    }

    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.grid_origin(), self.cell_size(), self.columns, self.rows)
    }

    /// Position relative to the panel, for absolutely placed children
    pub fn to_panel(&self, window: ScreenPoint) -> Point<Pixels> {
        let x: f32 = self.panel.origin.x.into();
        let y: f32 = self.panel.origin.y.into();
        point(px(window.x - x), px(window.y - y))
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(
            Bounds {
                origin: point(px(0.0), px(0.0)),
                size: Size {
                    width: px(760.0),
                    height: px(640.0),
                },
            },
            1,
            1,
            crate::config::DEFAULT_CELL_SIZE,
        )
    }
}
