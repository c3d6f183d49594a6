//! Move legality and drag admission.

use crate::domain::{CellAddress, Grid};

/// Whether dropping the item from `origin` onto `target` is allowed.
///
/// The target must be an empty in-bounds cell and the raw pointer must have
/// been over the grid, not just clamped onto its edge. Dropping back onto
/// `origin` is never legal since origin is occupied.
pub fn is_legal(grid: &Grid, _origin: CellAddress, target: CellAddress, pointer_in_bounds: bool) -> bool {
    pointer_in_bounds && grid.contains(target) && grid.is_empty_at(target)
}

/// Whether a drag may start at `address`
pub fn can_drag(grid: &Grid, address: CellAddress) -> bool {
    grid.item_at(address).is_some_and(|item| !item.is_locked())
}
