//! Errors for rejected board operations.

use thiserror::Error;

use crate::domain::{CellAddress, InstanceId};

/// Why a board operation was rejected. A rejected operation never changes the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("a {width}x{height} board needs {expected} slots but {actual} were provided")]
    InvalidDimensions {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("a {width}x{height} board has more cells than fit in memory")]
    DimensionsOverflow { width: usize, height: usize },
    #[error("cell {0} is already occupied")]
    CellOccupied(CellAddress),
    #[error("cell {address} is outside the {width}x{height} board")]
    OutOfBounds {
        address: CellAddress,
        width: usize,
        height: usize,
    },
    #[error("cell {0} is empty")]
    EmptyCell(CellAddress),
    #[error("item {0} is already on the board")]
    AlreadyPlaced(InstanceId),
    #[error("inventory has no item at index {0}")]
    UnknownInventoryItem(usize),
}
