mod app;
mod config;
mod domain;
mod logging;
mod models;
mod ui;

use anyhow::Context;
use clap::Parser;
use gpui::Application;
use tracing::info;

use crate::config::Cli;
use crate::domain::{BoardDescriptor, Inventory, board_schema, load_inventory};
use crate::models::BoardModel;
use crate::ui::FileAssets;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.into());

    if cli.print_schema {
        let schema = serde_json::to_string_pretty(&board_schema())
            .context("serializing board schema")?;
        println!("{schema}");
        return Ok(());
    }

    let descriptor = BoardDescriptor::load(&cli.board)?;
    let inventory = match &cli.inventory {
        Some(path) => Inventory::new(load_inventory(path)?, cli.inventory_policy()),
        None => Inventory::catalog_of(
            descriptor.items.iter().flatten(),
            cli.inventory_policy(),
        ),
    };
    let board = BoardModel::new(descriptor, inventory, cli.cell_size)
        .with_context(|| format!("building board from {}", cli.board.display()))?;
    info!(path = %cli.board.display(), "starting");

    let cell_size = cli.cell_size;
    Application::new()
        .with_assets(FileAssets::new())
        .run(move |cx| app::run(cx, board, cell_size));
    Ok(())
}
