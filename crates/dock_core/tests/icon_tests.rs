//! Icons in the live view

mod common;

use common::{RecordingLauncher, ScriptedDialogs, ScriptedFiles};
use dock_core::{
    DockController, DockItem, DockItemKind, DockLayout, DockSettings, Group, Icon, IconProvider,
    MemoryLayoutStore, Services,
};

/// Draws an icon for folders and for one well-known path.
struct FolderIcons;

impl IconProvider for FolderIcons {
    fn icon_for(&self, path: &str, kind: DockItemKind) -> Option<Icon> {
        if kind == DockItemKind::Folder || path == "/apps/editor" {
            Some(Icon {
                width: 1,
                height: 1,
                pixels: vec![255; 4],
            })
        } else {
            None
        }
    }
}

fn dock_with_icons(layout: &DockLayout) -> (DockController, MemoryLayoutStore) {
    let store = MemoryLayoutStore::with_layout(layout);
    let services = Services::new(
        ScriptedDialogs::answering(true),
        ScriptedFiles::default(),
        RecordingLauncher::default(),
    )
    .with_icons(FolderIcons);
    let dock = DockController::new(
        store.clone(),
        services,
        DockSettings::with_config_dir(std::env::temp_dir().join("slidedock-icon-tests")),
    );
    (dock, store)
}

#[test]
fn test_icons_loaded_on_start() {
    let mut group = Group::new("Apps");
    group
        .items
        .push(DockItem::new("Editor", "/apps/editor", DockItemKind::File));
    group
        .items
        .push(DockItem::new("Notes", "/apps/notes.txt", DockItemKind::File));
    let layout = DockLayout {
        groups: vec![group],
        ..Default::default()
    };

    let (dock, _store) = dock_with_icons(&layout);
    let view = dock.groups()[0].view();

    assert_eq!(view[0].icon.as_ref().map(|icon| icon.pixels.len()), Some(4));
    assert!(view[1].icon.is_none());
}

#[test]
fn test_icons_follow_add_and_move() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().to_string_lossy().to_string();
    let layout = DockLayout {
        groups: vec![Group::new("First"), Group::new("Second")],
        ..Default::default()
    };
    let (mut dock, store) = dock_with_icons(&layout);
    let (first, second) = (dock.group_at(0).unwrap(), dock.group_at(1).unwrap());

    assert!(dock.add_item(first, &folder));
    assert!(dock.groups()[0].view()[0].icon.is_some());

    assert!(dock.move_item_between_groups(&folder, Some(first), Some(second)));
    assert!(dock.groups()[0].view().is_empty());
    assert!(dock.groups()[1].view()[0].icon.is_some());

    // Icons live only in the view, never in the saved record
    let saved = serde_json::to_value(store.last_saved().unwrap()).unwrap();
    let entry = saved["menuGroups"][1]["appIcons"][0].as_object().unwrap();
    assert!(entry.keys().all(|key| ["name", "executablePath", "itemType"].contains(&key.as_str())));
}
