//! Theme constants and colors for the board UI.

use gpui::{Rgba, rgb, rgba};

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const TILE_SCALE: f32 = 0.86; // tile size relative to cell
pub const GHOST_OPACITY: f32 = 0.35;

// Board colors
pub const CELL_LIGHT: u32 = 0xD8C9A7;
pub const CELL_DARK: u32 = 0xCDBB93;
pub const DROP_LEGAL: u32 = 0x4ade80;
pub const DROP_ILLEGAL: u32 = 0xf87171;
pub const BUBBLE_TINT: u32 = 0x7dd3fc;
pub const LEVEL_BADGE_BG: u32 = 0x1e293b;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const LIST_BG: u32 = 0x1e1e1e;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;
pub const TEXT_ERROR: u32 = 0xf87171;
pub const BACKDROP: u32 = 0x000000aa;

/// Checkerboard tint so rows stay readable on wide boards
pub fn cell_color(row: usize, column: usize) -> Rgba {
    if (row + column) % 2 == 0 {
        rgb(CELL_LIGHT)
    } else {
        rgb(CELL_DARK)
    }
}

pub fn backdrop() -> Rgba {
    rgba(BACKDROP)
}
