//! Change notifications delivered to subscribers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{DockSide, GroupId};

/// Handle returned by `DockController::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// One completed change to the dock, emitted synchronously after it happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DockEvent {
    GroupAdded {
        group: GroupId,
        index: usize,
    },
    GroupRemoved {
        group: GroupId,
    },
    GroupRenamed {
        group: GroupId,
        name: String,
    },
    GroupToggled {
        group: GroupId,
        expanded: bool,
    },
    ItemAdded {
        group: GroupId,
        path: String,
        index: usize,
    },
    ItemRemoved {
        group: GroupId,
        path: String,
    },
    ItemRenamed {
        group: GroupId,
        path: String,
        name: String,
    },
    ItemReordered {
        group: GroupId,
        path: String,
        from: usize,
        to: usize,
    },
    ItemMoved {
        path: String,
        from: GroupId,
        to: GroupId,
    },
    /// Insertion indicator of a group moved, appeared or disappeared.
    IndicatorChanged {
        group: GroupId,
        index: Option<usize>,
    },
    DockToggled {
        expanded: bool,
    },
    DockSideChanged {
        side: DockSide,
    },
    AlwaysOnTopChanged {
        enabled: bool,
    },
}
