//! On/off switch with a text label.

use gpui::{App, ClickEvent, ElementId, SharedString, Window, div, prelude::*, px, rgb};

use crate::ui::theme::{BORDER_COLOR, DROP_LEGAL, TEXT_PRIMARY};

const TRACK_WIDTH: f32 = 36.0;
const TRACK_HEIGHT: f32 = 20.0;
const KNOB: f32 = 16.0;

pub fn render_toggle_switch(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    checked: bool,
    on_toggle: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> impl IntoElement {
    let knob_left = if checked { TRACK_WIDTH - KNOB - 2.0 } else { 2.0 };
    let track = if checked { DROP_LEGAL } else { BORDER_COLOR };

    div()
        .id(id)
        .flex()
        .items_center()
        .gap_2()
        .cursor_pointer()
        .on_click(on_toggle)
        .child(
            div()
                .relative()
                .w(px(TRACK_WIDTH))
                .h(px(TRACK_HEIGHT))
                .rounded_full()
                .bg(rgb(track))
                .child(
                    div()
                        .absolute()
                        .top(px((TRACK_HEIGHT - KNOB) / 2.0))
                        .left(px(knob_left))
                        .size(px(KNOB))
                        .rounded_full()
                        .bg(rgb(TEXT_PRIMARY)),
                ),
        )
        .child(div().text_sm().text_color(rgb(TEXT_PRIMARY)).child(label.into()))
}
