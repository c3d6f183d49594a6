//! Inventory panel - pick an item to place on an empty cell.

use gpui::{App, Div, Entity, SharedString, div, prelude::*, px, rgb};
use gpui_component::button::{Button, ButtonVariants};
use tracing::warn;

use crate::domain::{CellAddress, InventoryPolicy};
use crate::models::BoardModel;
use crate::ui::components::render_item_tile;
use crate::ui::theme::{BORDER_COLOR, LIST_BG, TEXT_PRIMARY, TEXT_SECONDARY};

const ENTRY_HOVER_BG: u32 = 0x3a3a3a;
const ENTRY_TILE: f32 = 56.0;

/// Render the inventory for placing onto `target`
pub fn render_inventory_panel(model: &Entity<BoardModel>, target: CellAddress, cx: &App) -> Div {
    let board = model.read(cx);
    let inventory = board.inventory();
    let policy_hint = match inventory.policy() {
        InventoryPolicy::Reusable => "Placing copies the item",
        InventoryPolicy::Consume => "Placing removes the item from the inventory",
    };

    let entries = if inventory.is_empty() {
        div()
            .p_4()
            .text_color(rgb(TEXT_SECONDARY))
            .child("Inventory is empty")
    } else {
        div().flex().flex_wrap().gap_2().p_2().children(
            inventory.items().iter().enumerate().map(|(index, item)| {
                let model = model.clone();
                div()
                    .id(("inventory", index))
                    .w(px(ENTRY_TILE + 24.0))
                    .p_1()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_1()
                    .rounded_md()
                    .cursor_pointer()
                    .hover(|s| s.bg(rgb(ENTRY_HOVER_BG)))
                    .child(render_item_tile(item, ENTRY_TILE))
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(TEXT_SECONDARY))
                            .overflow_hidden()
                            .child(SharedString::from(item.item_type.clone())),
                    )
                    .on_click(move |_, _, cx| {
                        model.update(cx, |board, cx| {
                            match board.add_from_inventory(index, target) {
                                Ok(()) => board.close_overlay(),
                                Err(err) => warn!(error = %err, "inventory placement rejected"),
                            }
                            cx.notify();
                        });
                    })
            }),
        )
    };

    let model_cancel = model.clone();

    div()
        .flex()
        .flex_col()
        .gap_2()
        .child(
            div()
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .text_color(rgb(TEXT_PRIMARY))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .child(SharedString::from(format!("Add item at {target}"))),
                )
                .child(
                    Button::new("inventory-cancel")
                        .label("Cancel")
                        .ghost()
                        .compact()
                        .on_click(move |_, _, cx| {
                            model_cancel.update(cx, |board, cx| {
                                board.close_overlay();
                                cx.notify();
                            });
                        }),
                ),
        )
        .child(
            div()
                .text_xs()
                .text_color(rgb(TEXT_SECONDARY))
                .child(policy_hint),
        )
        .child(
            div()
                .id("inventory-list")
                .max_h(px(360.0))
                .overflow_y_scroll()
                .bg(rgb(LIST_BG))
                .border_1()
                .border_color(rgb(BORDER_COLOR))
                .rounded_md()
                .child(entries),
        )
}
