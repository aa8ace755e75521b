//! Dock item data structures

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::classifier::Classifier;

/// What a dock item points at.
///
/// Only affects launch semantics and affordances.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DockItemKind {
    Application,
    #[default]
    File,
    Folder,
}

impl DockItemKind {
    /// Lowercase label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

/// One shortcut in the dock.
///
/// `path` is the identity key: items are matched by path when the live view and
/// the persisted model are reconciled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DockItem {
    /// Display label, user-editable
    pub name: String,

    /// Absolute filesystem path of the target
    pub path: String,

    pub kind: DockItemKind,
}

impl DockItem {
    pub fn new(name: impl Into<String>, path: impl Into<String>, kind: DockItemKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
        }
    }

    /// Build an item from a path, deriving kind and name from what the path
    /// currently classifies to.
    pub fn from_path(path: &str, classifier: &Classifier) -> Self {
        let classification = classifier.classify(path);
        Self {
            name: classification.name,
            path: path.to_string(),
            kind: classification.kind,
        }
    }

    /// Whether the target still exists with the shape its kind expects.
    pub fn target_exists(&self) -> bool {
        let path = Path::new(&self.path);
        match self.kind {
            DockItemKind::Folder => path.is_dir(),
            DockItemKind::Application | DockItemKind::File => path.is_file(),
        }
    }

    /// Directory to reveal for "open location".
    ///
    /// Folders reveal themselves, files reveal their parent. `None` when the
    /// target is gone.
    pub fn location(&self) -> Option<PathBuf> {
        if self.path.is_empty() || !self.target_exists() {
            return None;
        }
        let path = Path::new(&self.path);
        match self.kind {
            DockItemKind::Folder => Some(path.to_path_buf()),
            DockItemKind::Application | DockItemKind::File => {
                path.parent().map(Path::to_path_buf)
            }
        }
    }
}
