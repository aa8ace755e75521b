//! Launching, stale targets, confirmations and dialog-driven adds

mod common;

use common::{harness, harness_with_files, names, ScriptedFiles};
use dock_core::{DockItem, DockItemKind, DockLayout, Group, LaunchOutcome};
use tempfile::tempdir;

fn single_group(items: Vec<DockItem>) -> DockLayout {
    let mut group = Group::new("Main");
    group.items = items;
    DockLayout {
        groups: vec![group],
        ..Default::default()
    }
}

#[test]
fn test_stale_item_removed_after_confirmation() {
    let gone = DockItem::new("Gone", "/no/such/tool.exe", DockItemKind::Application);
    let mut h = harness(single_group(vec![gone]));
    let group = h.dock.group_at(0).unwrap();

    let outcome = h.dock.launch_item(group, "/no/such/tool.exe");

    assert_eq!(outcome, LaunchOutcome::StaleRemoved);
    assert!(h.dock.groups()[0].is_empty());
    assert_eq!(h.store.save_count(), 1);
    assert!(h.launcher.opened.borrow().is_empty());

    let confirms = h.dialogs.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].1, "Application Not Found");
    assert!(confirms[0].0.contains("/no/such/tool.exe"));
}

#[test]
fn test_stale_item_kept_when_declined() {
    let gone = DockItem::new("Gone", "/no/such/folder", DockItemKind::Folder);
    let mut h = harness(single_group(vec![gone]));
    h.dialogs.answer.set(false);
    let group = h.dock.group_at(0).unwrap();

    assert_eq!(
        h.dock.launch_item(group, "/no/such/folder"),
        LaunchOutcome::StaleKept
    );
    assert_eq!(h.dock.groups()[0].len(), 1);
    assert_eq!(h.store.save_count(), 0);
}

#[test]
fn test_existing_target_is_launched() {
    let dir = tempdir().unwrap();
    let folder = dir.path().to_string_lossy().to_string();
    let item = DockItem::new("Temp", folder.clone(), DockItemKind::Folder);
    let mut h = harness(single_group(vec![item]));
    let group = h.dock.group_at(0).unwrap();

    assert_eq!(h.dock.launch_item(group, &folder), LaunchOutcome::Launched);
    assert_eq!(*h.launcher.opened.borrow(), vec![folder]);
}

#[test]
fn test_empty_path_notifies() {
    let blank = DockItem::new("Blank", "", DockItemKind::File);
    let mut h = harness(single_group(vec![blank]));
    let group = h.dock.group_at(0).unwrap();

    assert_eq!(h.dock.launch_item(group, ""), LaunchOutcome::NotConfigured);
    assert_eq!(
        h.dialogs.notices.borrow()[0].0,
        "Item path is not configured."
    );
}

#[test]
fn test_open_location_of_file_opens_parent() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("notes.txt");
    std::fs::write(&file, "x").unwrap();
    let path = file.to_string_lossy().to_string();

    let item = DockItem::new("notes", path.clone(), DockItemKind::File);
    let h = harness(single_group(vec![item]));
    let group = h.dock.group_at(0).unwrap();

    assert!(h.dock.open_item_location(group, &path));
    assert_eq!(
        *h.launcher.opened.borrow(),
        vec![dir.path().to_string_lossy().to_string()]
    );
    assert!(!h.dock.open_item_location(group, "/missing/thing"));
}

#[test]
fn test_declined_removal_keeps_item_and_skips_save() {
    let item = DockItem::new("Keep", "/keep", DockItemKind::File);
    let mut h = harness(single_group(vec![item]));
    h.dialogs.answer.set(false);
    let group = h.dock.group_at(0).unwrap();

    assert!(!h.dock.remove_item(group, "/keep"));
    assert!(!h.dock.remove_group(group));
    assert_eq!(h.dock.groups()[0].len(), 1);
    assert_eq!(h.store.save_count(), 0);
    assert_eq!(h.dialogs.confirms.borrow()[0].0, "Remove the item 'Keep'?");
}

#[test]
fn test_confirmed_group_removal_cascades() {
    let item = DockItem::new("Keep", "/keep", DockItemKind::File);
    let mut h = harness(single_group(vec![item]));
    let group = h.dock.group_at(0).unwrap();

    assert!(h.dock.remove_group(group));
    assert!(h.dock.groups().is_empty());
    assert_eq!(h.store.last_saved().unwrap().menu_groups.len(), 0);
}

#[test]
fn test_folder_dialog_adds_folder() {
    let dir = tempdir().unwrap();
    let files = ScriptedFiles {
        file: None,
        folder: Some(dir.path().to_string_lossy().to_string()),
    };
    let mut h = harness_with_files(single_group(Vec::new()), files);
    let group = h.dock.group_at(0).unwrap();

    assert!(h.dock.add_folder_from_dialog(group));
    assert!(!h.dock.add_item_from_file_dialog(group));
    assert_eq!(h.dock.groups()[0].items()[0].kind, DockItemKind::Folder);
    assert_eq!(h.store.save_count(), 1);
}

#[test]
fn test_dock_dialog_creates_first_group() {
    let files = ScriptedFiles {
        file: Some("/picked/report.pdf".to_string()),
        folder: None,
    };
    let mut h = harness_with_files(DockLayout::default(), files);

    assert!(h.dock.add_item_from_dialog());
    assert_eq!(h.dock.groups().len(), 1);
    assert_eq!(h.dock.groups()[0].name(), "New Group");
    assert_eq!(names(&h.dock, 0), vec!["report"]);
    assert_eq!(h.store.save_count(), 1);
}

#[test]
fn test_rename_and_flags_persist_only_on_change() {
    let item = DockItem::new("Old", "/item", DockItemKind::File);
    let mut h = harness(single_group(vec![item]));
    let group = h.dock.group_at(0).unwrap();

    assert!(h.dock.rename_item(group, "/item", "New"));
    assert!(!h.dock.rename_item(group, "/item", "New"));
    assert!(h.dock.rename_group(group, "Renamed"));
    assert_eq!(h.dock.toggle_group_expanded(group), Some(false));
    assert!(!h.dock.set_always_on_top(false));

    assert_eq!(h.store.save_count(), 3);
    let saved = h.store.last_saved().unwrap();
    assert_eq!(saved.menu_groups[0].name, "Renamed");
    assert_eq!(saved.menu_groups[0].app_icons[0].name, "New");
}
