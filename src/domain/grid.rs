//! Board grid and the snapshot mutations applied to it.
//!
//! Every mutation builds a new `Grid` and leaves `self` untouched, so the
//! caller swaps the whole board in one assignment.

use std::collections::HashSet;
use std::fmt;

use crate::domain::{BoardError, InstanceId, Item};

/// Row/column address of a cell, 0-indexed, row-major
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CellAddress {
    pub row: usize,
    pub column: usize,
}

impl CellAddress {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Item),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn item(&self) -> Option<&Item> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(item) => Some(item),
        }
    }
}

impl From<Option<Item>> for Cell {
    fn from(slot: Option<Item>) -> Self {
        slot.map_or(Cell::Empty, Cell::Occupied)
    }
}

/// Fixed-size board of cells
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a `width` x `height` grid from a flat row-major slot list
    pub fn build(width: usize, height: usize, slots: Vec<Option<Item>>) -> Result<Self, BoardError> {
        let expected = width
            .checked_mul(height)
            .ok_or(BoardError::DimensionsOverflow { width, height })?;
        if width == 0 || height == 0 || slots.len() != expected {
            return Err(BoardError::InvalidDimensions {
                width,
                height,
                expected,
                actual: slots.len(),
            });
        }

        let mut seen = HashSet::new();
        for item in slots.iter().flatten() {
            if !seen.insert(item.instance_id()) {
                return Err(BoardError::AlreadyPlaced(item.instance_id()));
            }
        }

        Ok(Self {
            width,
            height,
            cells: slots.into_iter().map(Cell::from).collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, address: CellAddress) -> bool {
        address.row < self.height && address.column < self.width
    }

    pub fn cell(&self, address: CellAddress) -> Result<&Cell, BoardError> {
        let index = self.index(address)?;
        Ok(&self.cells[index])
    }

    /// Item at `address`, `None` for empty or out-of-range cells
    pub fn item_at(&self, address: CellAddress) -> Option<&Item> {
        self.cell(address).ok().and_then(Cell::item)
    }

    pub fn is_empty_at(&self, address: CellAddress) -> bool {
        matches!(self.cell(address), Ok(Cell::Empty))
    }

    /// Rows top to bottom, each `width` cells long
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellAddress, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (CellAddress::new(i / self.width, i % self.width), cell))
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.cells.iter().filter_map(Cell::item)
    }

    pub fn occupied_count(&self) -> usize {
        self.items().count()
    }

    /// Where an item instance currently sits
    pub fn find(&self, instance: InstanceId) -> Option<CellAddress> {
        self.cells()
            .find(|(_, cell)| cell.item().is_some_and(|i| i.instance_id() == instance))
            .map(|(address, _)| address)
    }

    /// Move the item at `origin` into the empty cell `target`
    pub fn moved(&self, origin: CellAddress, target: CellAddress) -> Result<Self, BoardError> {
        let from = self.index(origin)?;
        let to = self.index(target)?;
        if self.cells[from].is_empty() {
            return Err(BoardError::EmptyCell(origin));
        }
        if !self.cells[to].is_empty() {
            return Err(BoardError::CellOccupied(target));
        }

        let mut next = self.clone();
        next.cells.swap(from, to);
        Ok(next)
    }

    /// Put `item` into the empty cell `target`
    pub fn placed(&self, target: CellAddress, item: Item) -> Result<Self, BoardError> {
        let index = self.index(target)?;
        if !self.cells[index].is_empty() {
            return Err(BoardError::CellOccupied(target));
        }
        if self.find(item.instance_id()).is_some() {
            return Err(BoardError::AlreadyPlaced(item.instance_id()));
        }

        let mut next = self.clone();
        next.cells[index] = Cell::Occupied(item);
        Ok(next)
    }

    /// Empty a cell, whatever it holds
    pub fn cleared(&self, address: CellAddress) -> Result<Self, BoardError> {
        let index = self.index(address)?;
        let mut next = self.clone();
        next.cells[index] = Cell::Empty;
        Ok(next)
    }

    /// Overwrite the item in an occupied cell
    pub fn replaced(&self, address: CellAddress, item: Item) -> Result<Self, BoardError> {
        let index = self.index(address)?;
        let Cell::Occupied(current) = &self.cells[index] else {
            return Err(BoardError::EmptyCell(address));
        };
        if current.instance_id() != item.instance_id() && self.find(item.instance_id()).is_some()
        {
            return Err(BoardError::AlreadyPlaced(item.instance_id()));
        }

        let mut next = self.clone();
        next.cells[index] = Cell::Occupied(item);
        Ok(next)
    }

    fn index(&self, address: CellAddress) -> Result<usize, BoardError> {
        if self.contains(address) {
            Ok(address.row * self.width + address.column)
        } else {
            Err(BoardError::OutOfBounds {
                address,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                match cell {
                    Cell::Empty => write!(f, "  .  ")?,
                    Cell::Occupied(item) => write!(f, "{:>4} ", item.item_level)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::test_item;

    fn empty_grid(width: usize, height: usize) -> Grid {
        Grid::build(width, height, vec![None; width * height]).unwrap()
    }

    #[test]
    fn test_build_row_major() {
        let slots: Vec<Option<Item>> = (0..6)
            .map(|i| (i % 2 == 0).then(|| test_item(&format!("Item{i}"))))
            .collect();
        let grid = Grid::build(3, 2, slots.clone()).unwrap();

        assert_eq!(grid.rows().count(), 2);
        for r in 0..2 {
            for c in 0..3 {
                let expected = slots[r * 3 + c].as_ref();
                assert_eq!(grid.item_at(CellAddress::new(r, c)), expected);
            }
        }
    }

    #[test]
    fn test_build_rejects_wrong_slot_count() {
        let err = Grid::build(4, 3, vec![None; 11]).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidDimensions {
                width: 4,
                height: 3,
                expected: 12,
                actual: 11
            }
        );
        assert!(Grid::build(0, 0, Vec::new()).is_err());
    }

    #[test]
    fn test_build_rejects_overflowing_dimensions() {
        let err = Grid::build(usize::MAX, 2, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            BoardError::DimensionsOverflow {
                width: usize::MAX,
                height: 2
            }
        );
        assert!(err.to_string().contains("more cells than fit"));
    }

    #[test]
    fn test_build_rejects_aliased_items() {
        let axe = test_item("Axe");
        let err = Grid::build(2, 1, vec![Some(axe.clone()), Some(axe.clone())]).unwrap_err();
        assert_eq!(err, BoardError::AlreadyPlaced(axe.instance_id()));
    }

    #[test]
    fn test_move_example_4x3() {
        let axe = test_item("Axe");
        let mut slots = vec![None; 12];
        slots[0] = Some(axe.clone());
        let grid = Grid::build(4, 3, slots).unwrap();

        let next = grid
            .moved(CellAddress::new(0, 0), CellAddress::new(2, 1))
            .unwrap();

        assert!(next.is_empty_at(CellAddress::new(0, 0)));
        assert_eq!(next.item_at(CellAddress::new(2, 1)), Some(&axe));
        assert_eq!(next.occupied_count(), 1);
        assert_eq!(next.cells().count(), 12);
        // the source snapshot is untouched
        assert_eq!(grid.item_at(CellAddress::new(0, 0)), Some(&axe));
    }

    #[test]
    fn test_move_keeps_rest_of_grid() {
        let a = test_item("A");
        let b = test_item("B");
        let grid = Grid::build(3, 1, vec![Some(a.clone()), None, Some(b.clone())]).unwrap();
        let next = grid
            .moved(CellAddress::new(0, 0), CellAddress::new(0, 1))
            .unwrap();
        assert_eq!(next.item_at(CellAddress::new(0, 1)), Some(&a));
        assert_eq!(next.item_at(CellAddress::new(0, 2)), Some(&b));
        assert!(next.is_empty_at(CellAddress::new(0, 0)));
    }

    #[test]
    fn test_move_preconditions() {
        let grid = Grid::build(2, 1, vec![Some(test_item("A")), Some(test_item("B"))]).unwrap();
        assert_eq!(
            grid.moved(CellAddress::new(0, 0), CellAddress::new(0, 1)),
            Err(BoardError::CellOccupied(CellAddress::new(0, 1)))
        );
        assert!(matches!(
            grid.moved(CellAddress::new(0, 0), CellAddress::new(5, 0)),
            Err(BoardError::OutOfBounds { .. })
        ));

        let grid = empty_grid(2, 1);
        assert_eq!(
            grid.moved(CellAddress::new(0, 0), CellAddress::new(0, 1)),
            Err(BoardError::EmptyCell(CellAddress::new(0, 0)))
        );
    }

    #[test]
    fn test_place_on_occupied_is_rejected() {
        let grid = Grid::build(2, 1, vec![Some(test_item("A")), None]).unwrap();
        let before = grid.clone();
        let err = grid
            .placed(CellAddress::new(0, 0), test_item("B"))
            .unwrap_err();
        assert_eq!(err, BoardError::CellOccupied(CellAddress::new(0, 0)));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_place_rejects_item_already_on_board() {
        let a = test_item("A");
        let grid = Grid::build(2, 1, vec![Some(a.clone()), None]).unwrap();
        assert_eq!(
            grid.placed(CellAddress::new(0, 1), a.clone()),
            Err(BoardError::AlreadyPlaced(a.instance_id()))
        );
        assert!(grid.placed(CellAddress::new(0, 1), a.duplicate()).is_ok());
    }

    #[test]
    fn test_clear_and_replace() {
        let a = test_item("A");
        let grid = Grid::build(2, 1, vec![Some(a.clone()), None]).unwrap();

        let cleared = grid.cleared(CellAddress::new(0, 0)).unwrap();
        assert!(cleared.is_empty_at(CellAddress::new(0, 0)));
        assert!(cleared.cleared(CellAddress::new(0, 1)).is_ok());
        assert!(matches!(
            grid.cleared(CellAddress::new(1, 0)),
            Err(BoardError::OutOfBounds { .. })
        ));

        let mut upgraded = a.clone();
        upgraded.item_level = 2;
        let replaced = grid
            .replaced(CellAddress::new(0, 0), upgraded.clone())
            .unwrap();
        assert_eq!(replaced.item_at(CellAddress::new(0, 0)), Some(&upgraded));
        assert_eq!(
            grid.replaced(CellAddress::new(0, 1), upgraded),
            Err(BoardError::EmptyCell(CellAddress::new(0, 1)))
        );
    }

    #[test]
    fn test_find_instance() {
        let a = test_item("A");
        let grid = Grid::build(2, 2, vec![None, None, None, Some(a.clone())]).unwrap();
        assert_eq!(grid.find(a.instance_id()), Some(CellAddress::new(1, 1)));
        assert_eq!(grid.find(test_item("B").instance_id()), None);
    }
}
