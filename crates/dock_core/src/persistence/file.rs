//! JSON file layout store

use log::{debug, error, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::record::DockLayoutRecord;
use super::sample::sample_layout;
use super::LayoutStore;
use crate::config::DockSettings;
use crate::error::{DockError, Result};
use crate::model::DockLayout;

/// Stores the layout as a pretty-printed JSON record in a single file.
#[derive(Debug, Clone)]
pub struct FileLayoutStore {
    path: PathBuf,
}

impl FileLayoutStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn from_settings(settings: &DockSettings) -> Self {
        Self::new(settings.layout_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the record, surfacing every failure.
    pub fn try_load(&self) -> Result<DockLayout> {
        let contents = fs::read_to_string(&self.path)?;
        let record: DockLayoutRecord = serde_json::from_str(&contents)?;
        Ok(DockLayout::from(record))
    }

    /// Serialize and write the record, creating the directory first.
    pub fn try_save(&self, layout: &DockLayout) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let record = DockLayoutRecord::from(layout);
        let contents = serde_json::to_string_pretty(&record)?;
        fs::write(&self.path, contents)?;

        Ok(())
    }
}

impl LayoutStore for FileLayoutStore {
    fn load(&self) -> DockLayout {
        debug!("Loading dock layout from {:?}", self.path);

        match self.try_load() {
            Ok(layout) => {
                info!("Loaded dock layout with {} groups", layout.groups.len());
                layout
            }
            Err(DockError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
                info!("No dock layout at {:?}, using sample layout", self.path);
                sample_layout()
            }
            Err(e) => {
                warn!(
                    "Failed to load dock layout from {:?}: {}; using sample layout",
                    self.path, e
                );
                sample_layout()
            }
        }
    }

    fn save(&self, layout: &DockLayout) {
        match self.try_save(layout) {
            Ok(()) => debug!(
                "Saved dock layout with {} groups to {:?}",
                layout.groups.len(),
                self.path
            ),
            Err(e) => error!("Failed to save dock layout to {:?}: {}", self.path, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DockItem, DockItemKind, Group};
    use tempfile::tempdir;

    #[test]
    fn test_file_store_save_and_load() {
        let dir = tempdir().unwrap();
        let store = FileLayoutStore::new(dir.path().join("configuration.json"));

        let mut group = Group::new("Work");
        group
            .items
            .push(DockItem::new("notes", "/home/me/notes.md", DockItemKind::File));
        let layout = DockLayout {
            groups: vec![group],
            always_on_top: true,
            ..Default::default()
        };

        store.try_save(&layout).unwrap();
        let loaded = store.try_load().unwrap();

        assert_eq!(loaded.groups.len(), 1);
        assert_eq!(loaded.groups[0].name, "Work");
        assert_eq!(loaded.groups[0].items[0], layout.groups[0].items[0]);
        assert!(loaded.always_on_top);
    }

    #[test]
    fn test_file_store_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("layout.json");
        let store = FileLayoutStore::new(&path);

        store.save(&DockLayout::default());
        assert!(path.exists());
    }

    #[test]
    fn test_file_store_missing_file_uses_sample() {
        let dir = tempdir().unwrap();
        let store = FileLayoutStore::new(dir.path().join("absent.json"));

        assert!(store.try_load().is_err());
        assert_eq!(
            DockLayoutRecord::from(&store.load()),
            DockLayoutRecord::from(&sample_layout())
        );
    }

    #[test]
    fn test_file_store_save_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        // The parent "directory" is a regular file, so writing must fail
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a dir").unwrap();
        let store = FileLayoutStore::new(blocker.join("layout.json"));

        assert!(store.try_save(&DockLayout::default()).is_err());
        store.save(&DockLayout::default());
    }
}
