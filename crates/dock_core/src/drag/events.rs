//! Gesture events - pointer and platform drag notifications

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::model::{DockItem, GroupId};

/// Inputs that drive the gesture state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureEvent {
    /// Primary button pressed on an item of `source_group`.
    PointerPressed {
        source_group: GroupId,
        item: DockItem,
        position: Point,
    },

    /// Pointer moved; `primary_pressed` reports the button state.
    PointerMoved {
        position: Point,
        primary_pressed: bool,
    },

    /// Primary button released without a drop being delivered.
    PointerReleased,

    /// The platform started delivering an external file drag.
    ExternalDragEntered { paths: Vec<String> },

    /// The drag entered or moved over a group.
    DragOver { target: GroupId },

    /// The drag left the group it was over.
    DragLeft,

    /// A drop was delivered to a target.
    Dropped,

    /// The platform aborted the drag.
    Cancelled,
}
