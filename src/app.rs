//! Application setup and window creation.

use gpui::{App, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;
use tracing::error;

use crate::models::BoardModel;
use crate::ui::theme::BOARD_PADDING;
use crate::ui::views::MergeBoardView;

/// Open the board window
pub fn run(cx: &mut App, board: BoardModel, cell_size: f32) {
    gpui_component::init(cx);

    let grid = board.current_grid();
    let width = grid.width() as f32 * cell_size + BOARD_PADDING * 2.0;
    let height = grid.height() as f32 * cell_size + BOARD_PADDING * 2.0;
    let title = format!("Merge board - {}", board.board_id());

    let model = cx.new(|_| board);

    let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
    let opened = cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(gpui::TitlebarOptions {
                title: Some(title.into()),
                ..Default::default()
            }),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| MergeBoardView::new(model, cell_size, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    );
    if let Err(err) = opened {
        error!(error = %err, "failed to open window");
        cx.quit();
    }
}
