//! Drag session state machine for one pointer gesture.
//!
//! `Idle -> Dragging -> Idle`. A legal release hands back a `PendingMove`
//! for the owner to commit; the session itself never touches the grid.

use crate::domain::rules::{can_drag, is_legal};
use crate::domain::{CellAddress, Grid, GridGeometry, InstanceId, Item, ScreenPoint};

/// The gesture currently in progress
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveDrag {
    pub origin: CellAddress,
    /// Copy of the item taken at drag start
    pub item: Item,
    pub hovering: Option<CellAddress>,
    /// Last pointer position seen, window pixels
    pub pointer: Option<ScreenPoint>,
    pub legal: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

/// Read-only drag state for drop-preview styling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragVerdict {
    pub dragging_from: Option<CellAddress>,
    pub hovering: Option<CellAddress>,
    pub legal: bool,
}

/// A legal drop waiting to be applied to the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingMove {
    pub origin: CellAddress,
    pub target: CellAddress,
    pub instance: InstanceId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Commit(PendingMove),
    /// Illegal drop or cancel; the item returns to `origin`
    SnapBack { origin: CellAddress },
    /// There was no drag to finish
    NoDrag,
}

impl DragSession {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging(_))
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        match self {
            DragSession::Idle => None,
            DragSession::Dragging(drag) => Some(drag),
        }
    }

    pub fn verdict(&self) -> DragVerdict {
        match self {
            DragSession::Idle => DragVerdict::default(),
            DragSession::Dragging(drag) => DragVerdict {
                dragging_from: Some(drag.origin),
                hovering: drag.hovering,
                legal: drag.legal,
            },
        }
    }

    /// Open a session at `address`. Returns false, leaving the session as it
    /// was, when already dragging or when the cell holds nothing draggable.
    pub fn begin(&mut self, grid: &Grid, address: CellAddress) -> bool {
        if self.is_dragging() || !can_drag(grid, address) {
            return false;
        }
        let Some(item) = grid.item_at(address) else {
            return false;
        };
        *self = DragSession::Dragging(ActiveDrag {
            origin: address,
            item: item.clone(),
            hovering: None,
            pointer: None,
            legal: false,
        });
        true
    }

    /// Re-resolve the hovered cell and its legality
    pub fn track(
        &mut self,
        grid: &Grid,
        geometry: &GridGeometry,
        pointer: ScreenPoint,
    ) -> Option<DragVerdict> {
        let DragSession::Dragging(drag) = self else {
            return None;
        };
        let target = geometry.resolve_cell(pointer);
        drag.pointer = Some(pointer);
        drag.hovering = Some(target);
        drag.legal = is_legal(grid, drag.origin, target, geometry.contains(pointer));
        Some(self.verdict())
    }

    /// Finish the gesture at `pointer`. The session is idle afterwards.
    pub fn release(
        &mut self,
        grid: &Grid,
        geometry: &GridGeometry,
        pointer: ScreenPoint,
    ) -> DropOutcome {
        self.track(grid, geometry, pointer);
        match std::mem::take(self) {
            DragSession::Idle => DropOutcome::NoDrag,
            DragSession::Dragging(drag) => match drag.hovering {
                Some(target) if drag.legal => DropOutcome::Commit(PendingMove {
                    origin: drag.origin,
                    target,
                    instance: drag.item.instance_id(),
                }),
                _ => DropOutcome::SnapBack {
                    origin: drag.origin,
                },
            },
        }
    }

    /// Abort the gesture; same as an illegal drop
    pub fn cancel(&mut self) -> DropOutcome {
        match std::mem::take(self) {
            DragSession::Idle => DropOutcome::NoDrag,
            DragSession::Dragging(drag) => DropOutcome::SnapBack {
                origin: drag.origin,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::test_item;

    fn setup() -> (Grid, GridGeometry) {
        let mut bubbled = test_item("Bubble");
        bubbled.is_inside_bubble = true;
        let mut slots = vec![None; 12];
        slots[0] = Some(test_item("Axe"));
        slots[3] = Some(bubbled);
        slots[5] = Some(test_item("Saw"));
        let grid = Grid::build(4, 3, slots).unwrap();
        let geometry = GridGeometry::new(ScreenPoint::new(0.0, 0.0), 100.0, 4, 3);
        (grid, geometry)
    }

    fn center(address: CellAddress) -> ScreenPoint {
        ScreenPoint::new(
            address.column as f32 * 100.0 + 50.0,
            address.row as f32 * 100.0 + 50.0,
        )
    }

    #[test]
    fn test_begin_on_draggable_item() {
        let (grid, _) = setup();
        let mut session = DragSession::default();
        assert!(session.begin(&grid, CellAddress::new(0, 0)));
        let verdict = session.verdict();
        assert_eq!(verdict.dragging_from, Some(CellAddress::new(0, 0)));
        assert!(!verdict.legal);
        assert_eq!(
            session.active().map(|d| d.item.item_type.as_str()),
            Some("Axe")
        );
    }

    #[test]
    fn test_begin_refused_on_empty_or_locked() {
        let (grid, _) = setup();
        let mut session = DragSession::default();
        assert!(!session.begin(&grid, CellAddress::new(0, 1)));
        assert!(!session.begin(&grid, CellAddress::new(0, 3)));
        assert_eq!(session, DragSession::Idle);
    }

    #[test]
    fn test_second_begin_ignored() {
        let (grid, _) = setup();
        let mut session = DragSession::default();
        assert!(session.begin(&grid, CellAddress::new(0, 0)));
        assert!(!session.begin(&grid, CellAddress::new(1, 1)));
        assert_eq!(session.verdict().dragging_from, Some(CellAddress::new(0, 0)));
    }

    #[test]
    fn test_track_updates_verdict_live() {
        let (grid, geometry) = setup();
        let mut session = DragSession::default();
        session.begin(&grid, CellAddress::new(0, 0));

        let verdict = session
            .track(&grid, &geometry, center(CellAddress::new(2, 1)))
            .unwrap();
        assert!(verdict.legal);
        assert_eq!(verdict.hovering, Some(CellAddress::new(2, 1)));

        let verdict = session
            .track(&grid, &geometry, center(CellAddress::new(1, 1)))
            .unwrap();
        assert!(!verdict.legal);

        // past the right edge: clamped onto column 3 but not over the grid
        let verdict = session
            .track(&grid, &geometry, ScreenPoint::new(900.0, 150.0))
            .unwrap();
        assert_eq!(verdict.hovering, Some(CellAddress::new(1, 3)));
        assert!(!verdict.legal);
    }

    #[test]
    fn test_track_without_session() {
        let (grid, geometry) = setup();
        let mut session = DragSession::default();
        assert_eq!(session.track(&grid, &geometry, ScreenPoint::default()), None);
    }

    #[test]
    fn test_release_legal_commits() {
        let (grid, geometry) = setup();
        let mut session = DragSession::default();
        session.begin(&grid, CellAddress::new(0, 0));
        let instance = session.active().unwrap().item.instance_id();

        let outcome = session.release(&grid, &geometry, center(CellAddress::new(2, 1)));
        assert_eq!(
            outcome,
            DropOutcome::Commit(PendingMove {
                origin: CellAddress::new(0, 0),
                target: CellAddress::new(2, 1),
                instance,
            })
        );
        assert_eq!(session, DragSession::Idle);
    }

    #[test]
    fn test_release_uses_release_position() {
        let (grid, geometry) = setup();
        let mut session = DragSession::default();
        session.begin(&grid, CellAddress::new(0, 0));
        session.track(&grid, &geometry, center(CellAddress::new(2, 1)));

        let outcome = session.release(&grid, &geometry, center(CellAddress::new(1, 1)));
        assert_eq!(
            outcome,
            DropOutcome::SnapBack {
                origin: CellAddress::new(0, 0)
            }
        );
    }

    #[test]
    fn test_release_outside_snaps_back() {
        let (grid, geometry) = setup();
        let mut session = DragSession::default();
        session.begin(&grid, CellAddress::new(0, 0));
        let outcome = session.release(&grid, &geometry, ScreenPoint::new(-30.0, 250.0));
        assert_eq!(
            outcome,
            DropOutcome::SnapBack {
                origin: CellAddress::new(0, 0)
            }
        );
        assert!(!session.is_dragging());
    }

    #[test]
    fn test_cancel() {
        let (grid, _) = setup();
        let mut session = DragSession::default();
        assert_eq!(session.cancel(), DropOutcome::NoDrag);

        session.begin(&grid, CellAddress::new(1, 1));
        assert_eq!(
            session.cancel(),
            DropOutcome::SnapBack {
                origin: CellAddress::new(1, 1)
            }
        );
        assert_eq!(session, DragSession::Idle);
    }
}
