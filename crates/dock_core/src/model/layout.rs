//! Dock layout: the root aggregate persisted across restarts

use serde::{Deserialize, Serialize};

use super::group::Group;

/// Screen edge the dock is anchored to.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DockSide {
    #[default]
    Left,
    Right,
}

impl DockSide {
    pub fn toggled(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Full dock state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockLayout {
    pub groups: Vec<Group>,
    pub dock_side: DockSide,
    pub expanded: bool,
    pub always_on_top: bool,
}

impl DockLayout {
    /// Total number of items across all groups.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }
}
