//! Gesture state machine
//!
//! Tracks one drag gesture at a time. The machine only classifies input; it
//! never touches the dock model, so an aborted gesture cannot leave a partial
//! move behind.

use log::debug;

use super::events::GestureEvent;
use super::payload::DragPayload;
use super::states::{GestureOutcome, GestureState};
use crate::config::DragThreshold;
use crate::geometry::Point;

/// Result of feeding one event to the machine.
#[derive(Debug, Clone)]
pub struct GestureTransition {
    /// The state before the transition.
    pub from: GestureState,
    /// The state after the transition.
    pub to: GestureState,
    /// The event that triggered the transition.
    pub event: GestureEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

impl GestureTransition {
    /// True when this transition turned a press into a drag.
    pub fn started_dragging(&self) -> bool {
        self.changed && !self.from.is_dragging() && self.to.is_dragging()
    }
}

#[derive(Debug, Clone)]
pub struct GestureMachine {
    current_state: GestureState,
    threshold: DragThreshold,
    history: Vec<GestureTransition>,
    max_history: usize,
}

impl Default for GestureMachine {
    fn default() -> Self {
        Self::new(DragThreshold::default())
    }
}

impl GestureMachine {
    pub fn new(threshold: DragThreshold) -> Self {
        Self {
            current_state: GestureState::Idle,
            threshold,
            history: Vec::new(),
            max_history: 50,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.current_state
    }

    pub fn history(&self) -> &[GestureTransition] {
        &self.history
    }

    /// Payload of the drag in progress, if any.
    pub fn payload(&self) -> Option<&DragPayload> {
        self.current_state.payload()
    }

    /// Handle an event and transition to a new state.
    pub fn handle_event(&mut self, event: GestureEvent) -> GestureTransition {
        let old_state = self.current_state.clone();
        let new_state = self.compute_next_state(&old_state, &event);
        let changed = old_state != new_state;

        if changed {
            debug!(
                "Drag gesture: {} -> {}",
                old_state.description(),
                new_state.description()
            );
        }
        self.current_state = new_state.clone();

        let transition = GestureTransition {
            from: old_state,
            to: new_state,
            event,
            changed,
        };

        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        transition
    }

    fn exceeds_threshold(&self, origin: Point, position: Point) -> bool {
        (position.x - origin.x).abs() > self.threshold.horizontal
            || (position.y - origin.y).abs() > self.threshold.vertical
    }

    fn compute_next_state(&self, state: &GestureState, event: &GestureEvent) -> GestureState {
        use GestureEvent::*;
        use GestureState::*;

        match (state, event) {
            // ========== Gesture start ==========
            (
                Idle | Terminal { .. },
                PointerPressed {
                    source_group,
                    item,
                    position,
                },
            ) => DragStarted {
                source_group: *source_group,
                item: item.clone(),
                origin: *position,
            },
            (Idle | Terminal { .. }, ExternalDragEntered { paths }) => Dragging {
                payload: DragPayload::external(paths.iter().cloned()),
                over: None,
            },

            // ========== Press, not yet a drag ==========
            (
                DragStarted {
                    source_group,
                    item,
                    origin,
                },
                PointerMoved {
                    position,
                    primary_pressed: true,
                },
            ) if self.exceeds_threshold(*origin, *position) => Dragging {
                payload: DragPayload::internal(item.clone(), *source_group),
                over: None,
            },
            (
                DragStarted { .. },
                PointerMoved {
                    primary_pressed: false,
                    ..
                },
            ) => Idle,
            (DragStarted { .. }, PointerReleased | Cancelled) => Idle,

            // ========== Dragging ==========
            (Dragging { payload, .. }, DragOver { target }) => Dragging {
                payload: payload.clone(),
                over: Some(*target),
            },
            (Dragging { payload, .. }, DragLeft) => Dragging {
                payload: payload.clone(),
                over: None,
            },
            (Dragging { .. }, Dropped) => Terminal {
                outcome: GestureOutcome::Dropped,
            },
            (Dragging { .. }, Cancelled) => Terminal {
                outcome: GestureOutcome::Cancelled,
            },
            (Dragging { .. }, PointerReleased) => Idle,

            // ========== Default: No transition ==========
            _ => state.clone(),
        }
    }

    /// Check if a transition is valid without executing it.
    pub fn can_transition(&self, event: &GestureEvent) -> bool {
        let next = self.compute_next_state(&self.current_state, event);
        next != self.current_state
    }
}
