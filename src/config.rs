//! Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::domain::InventoryPolicy;

pub const DEFAULT_CELL_SIZE: f32 = 96.0;
pub const MIN_CELL_SIZE: f32 = 30.0;
const MAX_CELL_SIZE: f32 = 512.0;

#[derive(Parser, Debug)]
#[command(
    name = "merge-board",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactive merge-game board editor"
)]
pub struct Cli {
    /// Board descriptor to open.
    #[arg(long, value_name = "PATH", default_value = "data/board.json")]
    pub board: PathBuf,

    /// Items offered for empty cells. Defaults to one of each item type on the board.
    #[arg(long, value_name = "PATH")]
    pub inventory: Option<PathBuf>,

    /// Remove inventory entries once placed instead of copying them.
    #[arg(long)]
    pub consume_inventory: bool,

    /// Preferred cell pitch in pixels; shrinks to fit the window.
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_CELL_SIZE, value_parser = parse_cell_size)]
    pub cell_size: f32,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Print the board file JSON schema and exit.
    #[arg(long)]
    pub print_schema: bool,
}

impl Cli {
    pub fn inventory_policy(&self) -> InventoryPolicy {
        if self.consume_inventory {
            InventoryPolicy::Consume
        } else {
            InventoryPolicy::Reusable
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn parse_cell_size(value: &str) -> Result<f32, String> {
    let size: f32 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&size) {
        return Err(format!(
            "cell size must be between {MIN_CELL_SIZE} and {MAX_CELL_SIZE} pixels"
        ));
    }
    Ok(size)
}
