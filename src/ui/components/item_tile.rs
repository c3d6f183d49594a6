//! Item tile rendering component.

use gpui::{FontWeight, SharedString, div, img, prelude::*, px, rgb};

use crate::domain::Item;
use crate::ui::assets::item_image_path;
use crate::ui::theme::{BUBBLE_TINT, LEVEL_BADGE_BG, TEXT_PRIMARY};

/// Render an item image with its level badge, sized `tile_size`
pub fn render_item_tile(item: &Item, tile_size: f32) -> impl IntoElement {
    let badge = (tile_size * 0.3).max(12.0);
    let locked = item.is_locked();

    div()
        .relative()
        .size(px(tile_size))
        .flex_shrink_0()
        .rounded_md()
        .when(item.is_inside_bubble, |el| {
            el.border_2().border_color(rgb(BUBBLE_TINT)).rounded_full()
        })
        .when(item.is_hidden(), |el| el.opacity(0.45))
        .child(img(item_image_path(&item.item_type)).size_full())
        .child(
            div()
                .absolute()
                .bottom_0()
                .right_0()
                .min_w(px(badge))
                .h(px(badge))
                .px_1()
                .rounded_full()
                .bg(rgb(LEVEL_BADGE_BG))
                .flex()
                .items_center()
                .justify_center()
                .text_xs()
                .font_weight(FontWeight::BOLD)
                .text_color(rgb(TEXT_PRIMARY))
                .child(SharedString::from(item.item_level.to_string())),
        )
        .when(item.paused_until.is_some() && !locked, |el| {
            el.child(
                div()
                    .absolute()
                    .top_0()
                    .left_0()
                    .text_xs()
                    .text_color(rgb(TEXT_PRIMARY))
                    .child("II"),
            )
        })
}
