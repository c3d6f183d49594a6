mod board_view;
mod edit_panel;
mod inventory_panel;

pub use board_view::MergeBoardView;
pub use edit_panel::EditItemView;
pub use inventory_panel::render_inventory_panel;
