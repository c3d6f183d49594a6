mod board;

pub use board::{BoardModel, GestureOutcome, GesturePhase, Overlay, PointerEvent, TAP_SLOP_PX};
