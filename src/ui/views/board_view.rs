//! Merge board view - the grid with drag-and-drop item movement.

use gpui::{
    AnyElement, Context, Entity, FocusHandle, KeyDownEvent, MouseButton, MouseDownEvent,
    MouseMoveEvent, MouseUpEvent, Pixels, Point, Subscription, Window, canvas, div, prelude::*,
    px, rgb,
};

use tracing::trace;

use crate::domain::{CellAddress, ScreenPoint};
use crate::models::{BoardModel, GestureOutcome, GesturePhase, Overlay, PointerEvent};
use crate::ui::BoardLayout;
use crate::ui::components::{CellHighlight, render_cell, render_item_tile, render_modal};
use crate::ui::theme::{BOARD_PADDING, PANEL_BG};
use crate::ui::views::{EditItemView, render_inventory_panel};

/// The board view; observes a `BoardModel` and feeds it pointer events
pub struct MergeBoardView {
    model: Entity<BoardModel>,
    layout: BoardLayout,
    edit: Option<Entity<EditItemView>>,
    focus_handle: FocusHandle,
    _subscription: Subscription,
}

impl MergeBoardView {
    pub fn new(model: Entity<BoardModel>, preferred_cell: f32, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        let grid = model.read(cx).current_grid();
        let layout = BoardLayout {
            columns: grid.width(),
            rows: grid.height(),
            preferred_cell,
            ..BoardLayout::default()
        };
        Self {
            model,
            layout,
            edit: None,
            focus_handle: cx.focus_handle(),
            _subscription,
        }
    }

    fn dispatch(
        &mut self,
        phase: GesturePhase,
        position: Point<Pixels>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let event = PointerEvent::new(
            phase,
            ScreenPoint::new(position.x.into(), position.y.into()),
        );
        let outcome = self.model.update(cx, |board, _| board.handle_gesture(event));
        match outcome {
            GestureOutcome::Tapped(cell) => self.open_overlay(cell, window, cx),
            GestureOutcome::Ignored | GestureOutcome::Pressed(_) => {}
            GestureOutcome::DragStarted(cell) => {
                trace!(cell = %cell, "picked up");
                cx.notify();
            }
            GestureOutcome::DragMoved(verdict) => {
                trace!(hovering = ?verdict.hovering, legal = verdict.legal, "drag moved");
                cx.notify();
            }
            GestureOutcome::Committed { from, to } => {
                trace!(from = %from, to = %to, "dropped");
                cx.notify();
            }
            GestureOutcome::SnappedBack { origin } => {
                trace!(origin = %origin, "snapped back");
                cx.notify();
            }
        }
    }

    fn open_overlay(&mut self, cell: CellAddress, window: &mut Window, cx: &mut Context<Self>) {
        let overlay = self.model.update(cx, |board, cx| {
            let overlay = board.open_overlay_for(cell);
            cx.notify();
            overlay
        });
        self.edit = None;
        if let Overlay::EditItem { cell } = overlay {
            let item = self.model.read(cx).current_grid().item_at(cell).cloned();
            if let Some(item) = item {
                let model = self.model.clone();
                self.edit = Some(cx.new(|cx| EditItemView::new(model, cell, item, window, cx)));
            }
        }
        cx.notify();
    }

    /// Grid cells plus the tile following the pointer, if dragging
    fn render_board(&self, cx: &Context<Self>) -> (AnyElement, Option<AnyElement>) {
        let board = self.model.read(cx);
        let grid = board.current_grid();
        let verdict = board.current_drag_verdict();

        let cell_size = self.layout.cell_size();
        let tile_size = self.layout.tile_size();

        let rows = grid.rows().enumerate().map(|(row, cells)| {
            div()
                .flex()
                .flex_shrink_0()
                .children(cells.iter().enumerate().map(|(column, cell)| {
                    let address = CellAddress::new(row, column);
                    let highlight = CellHighlight {
                        is_origin: verdict.dragging_from == Some(address),
                        drop_preview: (verdict.hovering == Some(address)).then_some(verdict.legal),
                    };
                    render_cell(address, cell.item(), highlight, cell_size, tile_size)
                }))
        });

        let board_el = div()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(self.layout.board_width()))
            .h(px(self.layout.board_height()))
            .overflow_hidden()
            .rounded_md()
            .children(rows)
            .into_any_element();

        // Floating tile follows the pointer during drag
        let floating = board.active_drag().and_then(|drag| {
            let pointer = drag.pointer?;
            let at = self.layout.to_panel(pointer);
            Some(
                div()
                    .absolute()
                    .left(at.x - px(tile_size / 2.0))
                    .top(at.y - px(tile_size / 2.0))
                    .size(px(tile_size))
                    .child(render_item_tile(&drag.item, tile_size))
                    .into_any_element(),
            )
        });

        (board_el, floating)
    }
}

impl Render for MergeBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let overlay = self.model.read(cx).overlay();
        let edit_is_current = match (overlay, &self.edit) {
            (Overlay::EditItem { cell }, Some(edit)) => edit.read(cx).cell() == cell,
            _ => false,
        };
        if !edit_is_current {
            self.edit = None;
        }

        let (board, floating) = self.render_board(cx);

        let view = cx.entity();
        // Canvas to measure the panel and publish the grid geometry
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                view.update(cx, |this, cx| {
                    if this.layout.panel != bounds {
                        this.layout.panel = bounds;
                        let geometry = this.layout.geometry();
                        this.model.update(cx, |board, _| {
                            board.set_geometry(geometry.origin, geometry.cell_size)
                        });
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        let board_panel = div()
            .id("board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(board)
            .when_some(floating, |el, tile| el.child(tile))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev: &MouseDownEvent, window, cx| {
                    window.focus(&this.focus_handle);
                    this.dispatch(GesturePhase::Down, ev.position, window, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev: &MouseMoveEvent, window, cx| {
                this.dispatch(GesturePhase::Move, ev.position, window, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev: &MouseUpEvent, window, cx| {
                    this.dispatch(GesturePhase::Up, ev.position, window, cx);
                }),
            )
            // releasing outside the panel still ends the drag
            .on_mouse_up_out(
                MouseButton::Left,
                cx.listener(|this, ev: &MouseUpEvent, window, cx| {
                    this.dispatch(GesturePhase::Up, ev.position, window, cx);
                }),
            );

        let modal_content = match overlay {
            Overlay::Closed => None,
            Overlay::AddItem { target } => {
                Some(render_inventory_panel(&self.model, target, cx).into_any_element())
            }
            Overlay::EditItem { .. } => self.edit.clone().map(|edit| edit.into_any_element()),
        };
        let model_dismiss = self.model.clone();
        let modal = modal_content.map(|content| {
            render_modal(content, move |_, cx| {
                model_dismiss.update(cx, |board, cx| {
                    board.close_overlay();
                    cx.notify();
                });
            })
        });

        // on the root so Escape also reaches here from inputs inside the modal
        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, ev: &KeyDownEvent, window, cx| {
                if ev.keystroke.key != "escape" {
                    return;
                }
                let closed = this.model.update(cx, |board, _| board.dismiss_overlay());
                if closed {
                    cx.notify();
                } else {
                    let position = window.mouse_position();
                    this.dispatch(GesturePhase::Cancel, position, window, cx);
                }
            }))
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel)
            .when_some(modal, |el, modal| el.child(modal))
    }
}
