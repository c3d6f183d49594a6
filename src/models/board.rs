//! Board state model - the application layer for the merge board.
//!
//! Owns the grid, inventory, drag session and the measured grid geometry, and
//! turns typed pointer events into grid mutations. The view holds it in a
//! GPUI entity; nothing here depends on GPUI.

use tracing::{debug, info, warn};

use crate::domain::drag::ActiveDrag;
use crate::domain::{
    BoardDescriptor, BoardError, CellAddress, DragSession, DragVerdict, DropOutcome, Grid,
    GridGeometry, Inventory, Item, ItemEdit, PendingMove, ScreenPoint,
};

/// Pointer travel, in pixels, below which a press counts as a tap
pub const TAP_SLOP_PX: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer event, validated by the view before it reaches the model
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub phase: GesturePhase,
    pub position: ScreenPoint,
}

impl PointerEvent {
    pub fn new(phase: GesturePhase, position: ScreenPoint) -> Self {
        Self { phase, position }
    }
}

/// What a pointer event did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    Ignored,
    /// Press on a cell that cannot be dragged; may still become a tap
    Pressed(CellAddress),
    DragStarted(CellAddress),
    DragMoved(DragVerdict),
    Committed {
        from: CellAddress,
        to: CellAddress,
    },
    SnappedBack {
        origin: CellAddress,
    },
    /// Press and release on the same cell without real movement
    Tapped(CellAddress),
}

/// Modal panel shown above the board
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Closed,
    AddItem {
        target: CellAddress,
    },
    EditItem {
        cell: CellAddress,
    },
}

#[derive(Clone, Copy, Debug)]
struct Press {
    cell: CellAddress,
    start: ScreenPoint,
    travelled: f32,
}

/// The whole board state, passed explicitly to whoever mutates it
pub struct BoardModel {
    board_id: String,
    grid: Grid,
    inventory: Inventory,
    drag: DragSession,
    press: Option<Press>,
    geometry: GridGeometry,
    overlay: Overlay,
}

impl BoardModel {
    pub fn new(
        descriptor: BoardDescriptor,
        inventory: Inventory,
        cell_size: f32,
    ) -> Result<Self, BoardError> {
        let board_id = descriptor.board_id.clone();
        let grid = descriptor.into_grid()?;
        info!(
            board = %board_id,
            width = grid.width(),
            height = grid.height(),
            items = grid.occupied_count(),
            inventory = inventory.len(),
            "board loaded"
        );
        let geometry =
            GridGeometry::new(ScreenPoint::default(), cell_size, grid.width(), grid.height());
        Ok(Self {
            board_id,
            grid,
            inventory,
            drag: DragSession::Idle,
            press: None,
            geometry,
            overlay: Overlay::Closed,
        })
    }

    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    /// Read-only snapshot for rendering
    pub fn current_grid(&self) -> &Grid {
        &self.grid
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Grid origin and cell size as laid out by the view
    pub fn set_geometry(&mut self, origin: ScreenPoint, cell_size: f32) {
        self.geometry = GridGeometry::new(origin, cell_size, self.grid.width(), self.grid.height());
    }

    pub fn current_drag_verdict(&self) -> DragVerdict {
        self.drag.verdict()
    }

    pub fn active_drag(&self) -> Option<&ActiveDrag> {
        self.drag.active()
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Entry point for the view: hit-tests presses, tracks taps and drives
    /// the drag session.
    pub fn handle_gesture(&mut self, event: PointerEvent) -> GestureOutcome {
        let position = event.position;
        match event.phase {
            GesturePhase::Down => {
                if self.overlay != Overlay::Closed
                    || self.press.is_some()
                    || self.drag.is_dragging()
                    || !self.geometry.contains(position)
                {
                    return GestureOutcome::Ignored;
                }
                let cell = self.geometry.resolve_cell(position);
                self.press = Some(Press {
                    cell,
                    start: position,
                    travelled: 0.0,
                });
                if self.on_pointer_down(cell) {
                    GestureOutcome::DragStarted(cell)
                } else {
                    GestureOutcome::Pressed(cell)
                }
            }
            GesturePhase::Move => {
                if let Some(press) = &mut self.press {
                    press.travelled = press.travelled.max(press.start.chebyshev_distance(position));
                }
                match self.on_pointer_move(position) {
                    Some(verdict) => GestureOutcome::DragMoved(verdict),
                    None => GestureOutcome::Ignored,
                }
            }
            GesturePhase::Up => {
                if let Some(press) = self.press.take() {
                    let travelled = press.travelled.max(press.start.chebyshev_distance(position));
                    if travelled <= TAP_SLOP_PX
                        && self.geometry.contains(position)
                        && self.geometry.resolve_cell(position) == press.cell
                    {
                        self.drag.cancel();
                        debug!(cell = %press.cell, "tap");
                        return GestureOutcome::Tapped(press.cell);
                    }
                }
                match self.on_pointer_up(position) {
                    DropOutcome::Commit(pending) => GestureOutcome::Committed {
                        from: pending.origin,
                        to: pending.target,
                    },
                    DropOutcome::SnapBack { origin } => GestureOutcome::SnappedBack { origin },
                    DropOutcome::NoDrag => GestureOutcome::Ignored,
                }
            }
            GesturePhase::Cancel => {
                self.press = None;
                match self.cancel_drag() {
                    DropOutcome::SnapBack { origin } => GestureOutcome::SnappedBack { origin },
                    _ => GestureOutcome::Ignored,
                }
            }
        }
    }

    /// Open a drag session at `cell` if its item can be picked up
    pub fn on_pointer_down(&mut self, cell: CellAddress) -> bool {
        let started = self.drag.begin(&self.grid, cell);
        if started {
            debug!(cell = %cell, "drag started");
        }
        started
    }

    pub fn on_pointer_move(&mut self, position: ScreenPoint) -> Option<DragVerdict> {
        self.drag.track(&self.grid, &self.geometry, position)
    }

    /// Finish the drag at `position`, committing the move when legal
    pub fn on_pointer_up(&mut self, position: ScreenPoint) -> DropOutcome {
        match self.drag.release(&self.grid, &self.geometry, position) {
            DropOutcome::Commit(pending) => {
                if self.commit(pending) {
                    DropOutcome::Commit(pending)
                } else {
                    DropOutcome::SnapBack {
                        origin: pending.origin,
                    }
                }
            }
            DropOutcome::SnapBack { origin } => {
                debug!(origin = %origin, "drop rejected, snapping back");
                DropOutcome::SnapBack { origin }
            }
            DropOutcome::NoDrag => DropOutcome::NoDrag,
        }
    }

    pub fn cancel_drag(&mut self) -> DropOutcome {
        let outcome = self.drag.cancel();
        if let DropOutcome::SnapBack { origin } = outcome {
            debug!(origin = %origin, "drag cancelled");
        }
        outcome
    }

    fn commit(&mut self, pending: PendingMove) -> bool {
        if self.grid.find(pending.instance) != Some(pending.origin) {
            warn!(origin = %pending.origin, instance = %pending.instance, "dragged item left its cell");
            return false;
        }
        match self.grid.moved(pending.origin, pending.target) {
            Ok(next) => {
                self.grid = next;
                debug!(from = %pending.origin, to = %pending.target, "move committed");
                true
            }
            Err(err) => {
                warn!(error = %err, "move rejected");
                false
            }
        }
    }

    /// Place `item` on the empty cell `target`
    pub fn add_item(&mut self, item: Item, target: CellAddress) -> Result<(), BoardError> {
        let instance = item.instance_id();
        self.grid = self.grid.placed(target, item)?;
        debug!(cell = %target, instance = %instance, "item placed");
        Ok(())
    }

    /// Place a copy of inventory entry `index` on `target`
    pub fn add_from_inventory(&mut self, index: usize, target: CellAddress) -> Result<(), BoardError> {
        let item = self.inventory.copy_of(index)?;
        self.add_item(item, target)?;
        self.inventory.mark_placed(index);
        Ok(())
    }

    /// Clear an occupied cell, returning what was in it
    pub fn delete_item(&mut self, cell: CellAddress) -> Result<Item, BoardError> {
        let item = self
            .grid
            .cell(cell)?
            .item()
            .cloned()
            .ok_or(BoardError::EmptyCell(cell))?;
        self.grid = self.grid.cleared(cell)?;
        debug!(cell = %cell, instance = %item.instance_id(), "item deleted");
        Ok(item)
    }

    /// Apply a partial edit to the item at `cell`
    pub fn edit_item(&mut self, cell: CellAddress, edit: &ItemEdit) -> Result<Item, BoardError> {
        let updated = self
            .grid
            .cell(cell)?
            .item()
            .ok_or(BoardError::EmptyCell(cell))?
            .edited(edit);
        self.grid = self.grid.replaced(cell, updated.clone())?;
        debug!(cell = %cell, instance = %updated.instance_id(), "item edited");
        Ok(updated)
    }

    /// Show the panel that fits `cell`: inventory for empty cells, editor otherwise
    pub fn open_overlay_for(&mut self, cell: CellAddress) -> Overlay {
        self.overlay = if self.grid.is_empty_at(cell) {
            Overlay::AddItem { target: cell }
        } else if self.grid.item_at(cell).is_some() {
            Overlay::EditItem { cell }
        } else {
            Overlay::Closed
        };
        self.overlay
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::Closed;
    }

    /// Close the open panel, if any. Returns whether one was open.
    pub fn dismiss_overlay(&mut self) -> bool {
        if self.overlay == Overlay::Closed {
            return false;
        }
        debug!(overlay = ?self.overlay, "panel dismissed");
        self.close_overlay();
        true
    }
}
