//! Drag payloads and drop affordances

use serde::{Deserialize, Serialize};

use crate::model::{DockItem, GroupId};

/// Format tag of in-process item drags, distinct from the platform file list.
pub const INTERNAL_FORMAT: &str = "SlideDockAppIcon";

/// Format tag reported for external file-list drags.
pub const FILE_LIST_FORMAT: &str = "FileDrop";

/// Data attached to a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragPayload {
    /// An item dragged out of one of the dock's own groups.
    InternalMove {
        item: DockItem,
        source_group: GroupId,
    },

    /// Paths dragged in from the file manager, in delivery order.
    ExternalPaths { paths: Vec<String> },

    /// Anything else the platform offered (text, URLs, ...).
    Unsupported { format: String },
}

impl DragPayload {
    pub fn internal(item: DockItem, source_group: GroupId) -> Self {
        Self::InternalMove { item, source_group }
    }

    pub fn external<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ExternalPaths {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Data format tag of this payload.
    pub fn format(&self) -> &str {
        match self {
            Self::InternalMove { .. } => INTERNAL_FORMAT,
            Self::ExternalPaths { .. } => FILE_LIST_FORMAT,
            Self::Unsupported { format } => format,
        }
    }
}

/// Affordance shown to the user while hovering a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropEffect {
    None,
    Copy,
    Move,
}

/// What a group reports while a drag hovers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragOverOutcome {
    pub effect: DropEffect,
    /// Where the insertion indicator should be drawn, if anywhere
    pub insertion_index: Option<usize>,
}

impl DragOverOutcome {
    pub fn rejected() -> Self {
        Self {
            effect: DropEffect::None,
            insertion_index: None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.effect != DropEffect::None
    }
}
