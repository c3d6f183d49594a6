//! Grid cell rendering component.

use gpui::{div, prelude::*, px, rgb};

use crate::domain::{CellAddress, Item};
use crate::ui::components::render_item_tile;
use crate::ui::theme::{DROP_ILLEGAL, DROP_LEGAL, GHOST_OPACITY, cell_color};

/// How a cell takes part in the current drag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellHighlight {
    /// The dragged item came from here
    pub is_origin: bool,
    /// Pointer is over this cell; `Some(legal)`
    pub drop_preview: Option<bool>,
}

/// Render a single grid cell with its optional item
pub fn render_cell(
    address: CellAddress,
    item: Option<&Item>,
    highlight: CellHighlight,
    cell_size: f32,
    tile_size: f32,
) -> impl IntoElement {
    let tile = item.map(|item| render_item_tile(item, tile_size));

    div()
        .flex_shrink_0()
        .size(px(cell_size))
        .bg(cell_color(address.row, address.column))
        .flex()
        .items_center()
        .justify_center()
        .when_some(highlight.drop_preview, |el, legal| {
            let color = if legal { DROP_LEGAL } else { DROP_ILLEGAL };
            el.border_2().border_color(rgb(color))
        })
        .when_some(tile, |el, tile| {
            if highlight.is_origin {
                // ghost left behind while the item is dragged
                el.child(div().opacity(GHOST_OPACITY).child(tile))
            } else {
                el.child(tile)
            }
        })
}
