//! Drag and drop
//!
//! The payload carried by a drag, the affordance a target reports while the
//! pointer hovers it, and the per-gesture state machine.

mod events;
mod gesture;
mod payload;
mod states;

pub use events::GestureEvent;
pub use gesture::{GestureMachine, GestureTransition};
pub use payload::{DragOverOutcome, DragPayload, DropEffect, INTERNAL_FORMAT};
pub use states::{GestureOutcome, GestureState};
