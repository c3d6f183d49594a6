//! Board domain: items, grid, pointer mapping, move rules and the drag session.
//! No GPUI dependencies.

pub mod descriptor;
pub mod drag;
mod error;
pub mod geometry;
pub mod grid;
pub mod inventory;
pub mod item;
pub mod rules;

pub use descriptor::{BoardDescriptor, board_schema, load_inventory};
pub use drag::{DragSession, DragVerdict, DropOutcome, PendingMove};
pub use error::BoardError;
pub use geometry::{GridGeometry, ScreenPoint};
pub use grid::{Cell, CellAddress, Grid};
pub use inventory::{Inventory, InventoryPolicy};
pub use item::{DraftError, InstanceId, Item, ItemDraft, ItemEdit, Visibility};
