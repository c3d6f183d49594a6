//! Edit panel - change or delete the item in one cell.

use gpui::{
    App, Context, Entity, FontWeight, IntoElement, SharedString, Window, div, prelude::*, px, rgb,
};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::{Input, InputState};
use tracing::warn;

use crate::domain::{CellAddress, Item, ItemDraft, Visibility};
use crate::models::BoardModel;
use crate::ui::components::{render_item_tile, render_toggle_switch};
use crate::ui::theme::{TEXT_ERROR, TEXT_PRIMARY, TEXT_SECONDARY};

const LABEL_WIDTH: f32 = 110.0;

/// Form over one item's catalog fields
pub struct EditItemView {
    model: Entity<BoardModel>,
    cell: CellAddress,
    original: Item,
    item_id: Entity<InputState>,
    item_type: Entity<InputState>,
    chain_id: Entity<InputState>,
    item_level: Entity<InputState>,
    created_at: Entity<InputState>,
    paused_until: Entity<InputState>,
    hidden: bool,
    in_bubble: bool,
    error: Option<SharedString>,
}

impl EditItemView {
    pub fn new(
        model: Entity<BoardModel>,
        cell: CellAddress,
        item: Item,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let draft = ItemDraft::from_item(&item);
        let mut input = |value: String| {
            cx.new(|cx| InputState::new(window, cx).default_value(value))
        };
        Self {
            item_id: input(draft.item_id),
            item_type: input(draft.item_type),
            chain_id: input(draft.chain_id),
            item_level: input(draft.item_level),
            created_at: input(draft.created_at),
            paused_until: input(draft.paused_until),
            hidden: item.is_hidden(),
            in_bubble: item.is_inside_bubble,
            model,
            cell,
            original: item,
            error: None,
        }
    }

    pub fn cell(&self) -> CellAddress {
        self.cell
    }

    fn draft(&self, cx: &App) -> ItemDraft {
        let text = |state: &Entity<InputState>| state.read(cx).value().to_string();
        let visibility = if self.hidden {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
        ItemDraft {
            item_id: text(&self.item_id),
            item_type: text(&self.item_type),
            chain_id: text(&self.chain_id),
            item_level: text(&self.item_level),
            created_at: text(&self.created_at),
            paused_until: text(&self.paused_until),
            visibility: visibility.as_str().to_string(),
            is_inside_bubble: self.in_bubble,
        }
    }

    fn save(&mut self, cx: &mut Context<Self>) {
        let edit = match self.draft(cx).to_edit(&self.original) {
            Ok(edit) => edit,
            Err(err) => {
                self.error = Some(err.to_string().into());
                cx.notify();
                return;
            }
        };

        let cell = self.cell;
        let result = self.model.update(cx, |board, cx| {
            let result = if edit.is_empty() {
                Ok(())
            } else {
                board.edit_item(cell, &edit).map(|_| ())
            };
            if result.is_ok() {
                board.close_overlay();
            }
            cx.notify();
            result
        });
        if let Err(err) = result {
            warn!(cell = %cell, error = %err, "edit rejected");
            self.error = Some(err.to_string().into());
            cx.notify();
        }
    }

    fn delete(&mut self, cx: &mut Context<Self>) {
        let cell = self.cell;
        let result = self.model.update(cx, |board, cx| {
            let result = board.delete_item(cell);
            board.close_overlay();
            cx.notify();
            result
        });
        if let Err(err) = result {
            warn!(cell = %cell, error = %err, "delete rejected");
        }
    }

    fn cancel(&mut self, cx: &mut Context<Self>) {
        self.model.update(cx, |board, cx| {
            board.close_overlay();
            cx.notify();
        });
    }
}

fn field_row(label: &'static str, state: &Entity<InputState>) -> impl IntoElement {
    div()
        .flex()
        .items_center()
        .gap_2()
        .child(
            div()
                .w(px(LABEL_WIDTH))
                .flex_shrink_0()
                .text_sm()
                .text_color(rgb(TEXT_SECONDARY))
                .child(label),
        )
        .child(div().flex_1().child(Input::new(state)))
}

impl Render for EditItemView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let header = div()
            .flex()
            .items_center()
            .gap_3()
            .child(render_item_tile(&self.original, 48.0))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_color(rgb(TEXT_PRIMARY))
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(SharedString::from(self.original.item_type.clone())),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(TEXT_SECONDARY))
                            .child(SharedString::from(format!("Cell {}", self.cell))),
                    ),
            );

        let toggles = div()
            .flex()
            .gap_4()
            .child(render_toggle_switch(
                "toggle-hidden",
                "Hidden",
                self.hidden,
                cx.listener(|this, _, _, cx| {
                    this.hidden = !this.hidden;
                    cx.notify();
                }),
            ))
            .child(render_toggle_switch(
                "toggle-bubble",
                "Inside bubble",
                self.in_bubble,
                cx.listener(|this, _, _, cx| {
                    this.in_bubble = !this.in_bubble;
                    cx.notify();
                }),
            ));

        let buttons = div()
            .flex()
            .justify_end()
            .gap_2()
            .child(
                Button::new("edit-delete")
                    .label("Delete")
                    .danger()
                    .compact()
                    .on_click(cx.listener(|this, _, _, cx| this.delete(cx))),
            )
            .child(
                Button::new("edit-cancel")
                    .label("Cancel")
                    .ghost()
                    .compact()
                    .on_click(cx.listener(|this, _, _, cx| this.cancel(cx))),
            )
            .child(
                Button::new("edit-save")
                    .label("Save")
                    .primary()
                    .compact()
                    .on_click(cx.listener(|this, _, _, cx| this.save(cx))),
            );

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(header)
            .child(field_row("Item id", &self.item_id))
            .child(field_row("Item type", &self.item_type))
            .child(field_row("Chain", &self.chain_id))
            .child(field_row("Level", &self.item_level))
            .child(field_row("Created at", &self.created_at))
            .child(field_row("Paused until", &self.paused_until))
            .child(toggles)
            .when_some(self.error.clone(), |el, error| {
                el.child(div().text_sm().text_color(rgb(TEXT_ERROR)).child(error))
            })
            .child(buttons)
    }
}
