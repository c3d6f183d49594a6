//! Modal panel over a dimmed backdrop.

use gpui::{AnyElement, App, MouseButton, Window, div, prelude::*, px, rgb};

use crate::ui::theme::{BORDER_COLOR, PANEL_BG, backdrop};

/// Center `content` over the window. A press on the backdrop calls `on_dismiss`.
pub fn render_modal(
    content: AnyElement,
    on_dismiss: impl Fn(&mut Window, &mut App) + 'static,
) -> impl IntoElement {
    div()
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .bg(backdrop())
        .occlude()
        .on_mouse_down(MouseButton::Left, move |_, window, cx| on_dismiss(window, cx))
        .child(
            div()
                .min_w(px(320.0))
                .max_w(px(520.0))
                .p_4()
                .rounded_lg()
                .bg(rgb(PANEL_BG))
                .border_1()
                .border_color(rgb(BORDER_COLOR))
                // presses inside the panel stay inside
                .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
                .child(content),
        )
}
