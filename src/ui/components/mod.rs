mod cell;
mod item_tile;
mod modal;
mod toggle_switch;

pub use cell::{CellHighlight, render_cell};
pub use item_tile::render_item_tile;
pub use modal::render_modal;
pub use toggle_switch::render_toggle_switch;
