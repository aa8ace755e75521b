//! Group data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::item::DockItem;

/// Runtime identity of a group.
///
/// Assigned when a group is created or loaded and never persisted; the record
/// identifies groups by position only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(Uuid);

impl GroupId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named, ordered collection of dock items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub expanded: bool,
    /// Display order is launch-bar order
    pub items: Vec<DockItem>,
}

impl Group {
    /// Create an empty, expanded group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            expanded: true,
            items: Vec::new(),
        }
    }

    /// Index of the first item with the given path.
    pub fn position(&self, path: &str) -> Option<usize> {
        self.items.iter().position(|item| item.path == path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.position(path).is_some()
    }

    pub fn item(&self, path: &str) -> Option<&DockItem> {
        self.items.iter().find(|item| item.path == path)
    }
}
