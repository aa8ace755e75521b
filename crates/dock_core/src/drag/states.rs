//! Gesture states

use serde::{Deserialize, Serialize};

use super::payload::DragPayload;
use crate::geometry::Point;
use crate::model::{DockItem, GroupId};

/// How a finished gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureOutcome {
    Dropped,
    Cancelled,
}

/// Lifecycle of one pointer-down-to-release interaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureState {
    /// No drag in progress.
    #[default]
    Idle,

    /// Primary button went down on an item; no payload yet.
    DragStarted {
        source_group: GroupId,
        item: DockItem,
        origin: Point,
    },

    /// A payload is travelling with the pointer.
    Dragging {
        payload: DragPayload,
        /// Group currently under the pointer
        over: Option<GroupId>,
    },

    /// Gesture finished; the next gesture starts from scratch.
    Terminal { outcome: GestureOutcome },
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// States in which a new gesture may begin.
    pub fn is_at_rest(&self) -> bool {
        matches!(self, Self::Idle | Self::Terminal { .. })
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        match self {
            Self::Dragging { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::DragStarted { .. } => "Pointer pressed on item",
            Self::Dragging { over: Some(_), .. } => "Dragging over group",
            Self::Dragging { over: None, .. } => "Dragging",
            Self::Terminal {
                outcome: GestureOutcome::Dropped,
            } => "Drop completed",
            Self::Terminal {
                outcome: GestureOutcome::Cancelled,
            } => "Drag cancelled",
        }
    }
}
