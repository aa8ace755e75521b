//! Dock controller
//!
//! Single owner of the dock state for the lifetime of the application. Every
//! public operation that changes the layout saves it exactly once when it
//! completes and notifies subscribers of each change as it happens.

use log::{debug, error, info, warn};

use super::events::{DockEvent, SubscriptionId};
use super::group::{DropAction, GroupController};
use crate::classifier::Classifier;
use crate::config::DockSettings;
use crate::drag::{DragOverOutcome, DragPayload, GestureEvent, GestureMachine, GestureState};
use crate::error::{DockError, Result};
use crate::geometry::{Point, Rect};
use crate::model::{DockItem, DockLayout, DockSide, Group, GroupId};
use crate::persistence::LayoutStore;
use crate::services::Services;

/// Result of launching an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The launcher accepted the target.
    Launched,
    /// The item has an empty path.
    NotConfigured,
    /// The target was gone and the user removed the item.
    StaleRemoved,
    /// The target was gone and the user kept the item.
    StaleKept,
    /// The launcher reported a failure.
    Failed,
    /// No such group or item in the dock.
    NotFound,
}

type Subscriber = Box<dyn FnMut(&DockEvent)>;

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub struct DockController {
    groups: Vec<GroupController>,
    dock_side: DockSide,
    expanded: bool,
    always_on_top: bool,
    store: Box<dyn LayoutStore>,
    services: Services,
    settings: DockSettings,
    classifier: Classifier,
    gesture: GestureMachine,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl DockController {
    /// Load the layout from `store` and build the live groups.
    pub fn new(store: impl LayoutStore + 'static, services: Services, settings: DockSettings) -> Self {
        let layout = store.load();
        info!(
            "Dock loaded: {} groups, {} items, side {:?}",
            layout.groups.len(),
            layout.item_count(),
            layout.dock_side
        );

        let groups = layout
            .groups
            .into_iter()
            .map(|group| GroupController::new(group, services.icons.as_ref()))
            .collect();

        Self {
            groups,
            dock_side: layout.dock_side,
            expanded: layout.expanded,
            always_on_top: layout.always_on_top,
            store: Box::new(store),
            classifier: Classifier::from_settings(&settings),
            gesture: GestureMachine::new(settings.drag_threshold),
            services,
            settings,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Snapshot of the current layout, as it would be saved.
    pub fn layout(&self) -> DockLayout {
        DockLayout {
            groups: self.groups.iter().map(|group| group.group().clone()).collect(),
            dock_side: self.dock_side,
            expanded: self.expanded,
            always_on_top: self.always_on_top,
        }
    }

    pub fn groups(&self) -> &[GroupController] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&GroupController> {
        self.groups.iter().find(|group| group.id() == id)
    }

    /// Id of the group at `index` in display order.
    pub fn group_at(&self, index: usize) -> Option<GroupId> {
        self.groups.get(index).map(GroupController::id)
    }

    pub fn dock_side(&self) -> DockSide {
        self.dock_side
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_always_on_top(&self) -> bool {
        self.always_on_top
    }

    pub fn settings(&self) -> &DockSettings {
        &self.settings
    }

    pub fn gesture_state(&self) -> &GestureState {
        self.gesture.state()
    }

    pub fn group_id_checked(&self, index: usize) -> Result<GroupId> {
        self.group_at(index).ok_or(DockError::GroupIndexOutOfBounds {
            index,
            count: self.groups.len(),
        })
    }

    pub fn group_checked(&self, id: GroupId) -> Result<&GroupController> {
        self.group(id).ok_or(DockError::GroupNotFound(id))
    }

    pub fn item_checked(&self, group: GroupId, path: &str) -> Result<&DockItem> {
        self.group_checked(group)?
            .item(path)
            .ok_or_else(|| DockError::ItemNotFound(path.to_string()))
    }

    // ========== Change notification ==========

    /// Register a callback invoked synchronously for every change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&DockEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn emit(&mut self, event: DockEvent) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&event);
        }
    }

    fn persist(&self) {
        self.store.save(&self.layout());
    }

    fn index_of(&self, id: GroupId) -> Option<usize> {
        self.groups.iter().position(|group| group.id() == id)
    }

    // ========== Groups ==========

    /// Append an empty, expanded group. Blank names get the default name.
    pub fn add_group(&mut self, name: Option<&str>) -> GroupId {
        let id = self.insert_group(name);
        self.persist();
        id
    }

    fn insert_group(&mut self, name: Option<&str>) -> GroupId {
        let name = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.settings.default_group_name.clone(),
        };
        info!("Adding group '{}'", name);

        let group = GroupController::new(Group::new(name), self.services.icons.as_ref());
        let id = group.id();
        self.groups.push(group);
        self.emit(DockEvent::GroupAdded {
            group: id,
            index: self.groups.len() - 1,
        });
        id
    }

    /// Ask for confirmation, then drop the group and everything in it.
    pub fn remove_group(&mut self, id: GroupId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        let message = format!(
            "Remove the group '{}' and all of its items?",
            self.groups[index].name()
        );
        if !self.services.dialogs.confirm(&message, "Confirm Removal") {
            debug!("Removal of group {} declined", id);
            return false;
        }

        let removed = self.groups.remove(index);
        info!(
            "Removed group '{}' with {} items",
            removed.name(),
            removed.len()
        );
        self.emit(DockEvent::GroupRemoved { group: id });
        self.persist();
        true
    }

    pub fn rename_group(&mut self, id: GroupId, name: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if !self.groups[index].rename(name.to_string()) {
            return false;
        }

        self.emit(DockEvent::GroupRenamed {
            group: id,
            name: name.to_string(),
        });
        self.persist();
        true
    }

    /// Flip the group's expanded flag, returning the new value.
    pub fn toggle_group_expanded(&mut self, id: GroupId) -> Option<bool> {
        let index = self.index_of(id)?;
        let expanded = self.groups[index].toggle_expanded();

        self.emit(DockEvent::GroupToggled {
            group: id,
            expanded,
        });
        self.persist();
        Some(expanded)
    }

    // ========== Items ==========

    fn insert_item(&mut self, index: usize, path: &str) -> bool {
        let group = &mut self.groups[index];
        let Some(position) = group.add_item(path, &self.classifier, self.services.icons.as_ref())
        else {
            return false;
        };

        let event = DockEvent::ItemAdded {
            group: group.id(),
            path: path.to_string(),
            index: position,
        };
        self.emit(event);
        true
    }

    fn take_item(&mut self, index: usize, path: &str) -> bool {
        let group = &mut self.groups[index];
        if group.take_item(path).is_none() {
            return false;
        }

        let event = DockEvent::ItemRemoved {
            group: group.id(),
            path: path.to_string(),
        };
        self.emit(event);
        true
    }

    /// Classify `path` and append it to `group`. Empty paths are ignored.
    pub fn add_item(&mut self, group: GroupId, path: &str) -> bool {
        let Some(index) = self.index_of(group) else {
            warn!("Cannot add '{}': group {} not found", path, group);
            return false;
        };
        if !self.insert_item(index, path) {
            return false;
        }
        self.persist();
        true
    }

    /// Ask for confirmation, then remove the item at `path` from `group`.
    pub fn remove_item(&mut self, group: GroupId, path: &str) -> bool {
        let Some(index) = self.index_of(group) else {
            return false;
        };
        if self.groups[index]
            .remove_item(path, self.services.dialogs.as_ref())
            .is_none()
        {
            return false;
        }

        self.emit(DockEvent::ItemRemoved {
            group,
            path: path.to_string(),
        });
        self.persist();
        true
    }

    /// Move the item at `path` to `new_index` within its group.
    pub fn reorder_item(&mut self, group: GroupId, path: &str, new_index: usize) -> bool {
        let Some(index) = self.index_of(group) else {
            return false;
        };
        let Some((from, to)) = self.groups[index].reorder_item(path, new_index) else {
            return false;
        };

        self.emit(DockEvent::ItemReordered {
            group,
            path: path.to_string(),
            from,
            to,
        });
        self.persist();
        true
    }

    pub fn rename_item(&mut self, group: GroupId, path: &str, name: &str) -> bool {
        let Some(index) = self.index_of(group) else {
            return false;
        };
        if !self.groups[index].rename_item(path, name) {
            return false;
        }

        self.emit(DockEvent::ItemRenamed {
            group,
            path: path.to_string(),
            name: name.to_string(),
        });
        self.persist();
        true
    }

    /// Move the item at `path` from `source` to `target`.
    ///
    /// The target rebuilds the item from its path. Nothing changes unless both
    /// groups exist, differ, and the source holds an item with a non-empty path.
    pub fn move_item_between_groups(
        &mut self,
        path: &str,
        source: Option<GroupId>,
        target: Option<GroupId>,
    ) -> bool {
        let (Some(source), Some(target)) = (source, target) else {
            return false;
        };
        // The target ignores empty paths, so taking one would lose the item
        if source == target || path.is_empty() {
            return false;
        }
        let (Some(from), Some(to)) = (self.index_of(source), self.index_of(target)) else {
            warn!("Cannot move '{}': source or target group is gone", path);
            return false;
        };

        if self.groups[from].take_item(path).is_none() {
            return false;
        }
        self.groups[to].move_item_in(path, &self.classifier, self.services.icons.as_ref());

        info!("Moved '{}' from group {} to group {}", path, source, target);
        self.emit(DockEvent::ItemMoved {
            path: path.to_string(),
            from: source,
            to: target,
        });
        self.persist();
        true
    }

    fn first_group_or_create(&mut self) -> usize {
        if self.groups.is_empty() {
            self.insert_group(None);
        }
        0
    }

    /// Add `path` to the first group, creating a group when there is none.
    pub fn add_item_to_first_group_or_create(&mut self, path: &str) -> bool {
        if path.is_empty() {
            return false;
        }
        let index = self.first_group_or_create();
        self.insert_item(index, path);
        self.persist();
        true
    }

    // ========== Dialogs ==========

    fn picked(choice: Option<String>) -> Option<String> {
        choice.filter(|path| !path.is_empty())
    }

    pub fn add_item_from_file_dialog(&mut self, group: GroupId) -> bool {
        if self.index_of(group).is_none() {
            return false;
        }
        match Self::picked(self.services.files.pick_file()) {
            Some(path) => self.add_item(group, &path),
            None => false,
        }
    }

    pub fn add_folder_from_dialog(&mut self, group: GroupId) -> bool {
        if self.index_of(group).is_none() {
            return false;
        }
        match Self::picked(self.services.files.pick_folder()) {
            Some(path) => self.add_item(group, &path),
            None => false,
        }
    }

    /// Pick a file and add it to the first group, creating one if needed.
    pub fn add_item_from_dialog(&mut self) -> bool {
        match Self::picked(self.services.files.pick_file()) {
            Some(path) => self.add_item_to_first_group_or_create(&path),
            None => false,
        }
    }

    // ========== Launching ==========

    /// Open the item's target, offering removal when it no longer exists.
    pub fn launch_item(&mut self, group: GroupId, path: &str) -> LaunchOutcome {
        let Some(index) = self.index_of(group) else {
            return LaunchOutcome::NotFound;
        };
        let Some(item) = self.groups[index].item(path).cloned() else {
            return LaunchOutcome::NotFound;
        };

        if item.path.is_empty() {
            self.services
                .dialogs
                .notify("Item path is not configured.", "Error");
            return LaunchOutcome::NotConfigured;
        }

        if !item.target_exists() {
            let label = item.kind.label();
            let message = format!(
                "The {} '{}' was not found at:\n{}\n\nIt may have been moved or deleted. Remove it from SlideDock?",
                label, item.name, item.path
            );
            let title = format!("{} Not Found", capitalized(label));
            if !self.services.dialogs.confirm(&message, &title) {
                return LaunchOutcome::StaleKept;
            }

            self.take_item(index, path);
            self.persist();
            return LaunchOutcome::StaleRemoved;
        }

        match self.services.launcher.open(&item.path) {
            Ok(()) => {
                info!("Launched '{}'", item.path);
                LaunchOutcome::Launched
            }
            Err(e) => {
                error!("Failed to launch '{}': {}", item.path, e);
                self.services
                    .dialogs
                    .notify(&format!("Failed to open the item: {}", e), "Error");
                LaunchOutcome::Failed
            }
        }
    }

    /// Reveal the item: folders open themselves, files their parent folder.
    pub fn open_item_location(&self, group: GroupId, path: &str) -> bool {
        let Some(location) = self
            .group(group)
            .and_then(|group| group.item(path))
            .and_then(DockItem::location)
        else {
            return false;
        };

        let location = location.to_string_lossy();
        match self.services.launcher.open(&location) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to open location '{}': {}", location, e);
                self.services
                    .dialogs
                    .notify(&format!("Failed to open the location: {}", e), "Error");
                false
            }
        }
    }

    // ========== Dock flags ==========

    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.emit(DockEvent::DockToggled {
            expanded: self.expanded,
        });
        self.persist();
        self.expanded
    }

    pub fn toggle_dock_side(&mut self) -> DockSide {
        self.dock_side = self.dock_side.toggled();
        self.emit(DockEvent::DockSideChanged {
            side: self.dock_side,
        });
        self.persist();
        self.dock_side
    }

    /// Returns whether the flag changed.
    pub fn set_always_on_top(&mut self, enabled: bool) -> bool {
        if self.always_on_top == enabled {
            return false;
        }
        self.always_on_top = enabled;
        self.emit(DockEvent::AlwaysOnTopChanged { enabled });
        self.persist();
        true
    }

    // ========== Drag and drop ==========

    /// Primary button pressed on the item at `path`.
    pub fn begin_drag(&mut self, group: GroupId, path: &str, position: Point) -> bool {
        let Some(item) = self.group(group).and_then(|g| g.item(path)).cloned() else {
            return false;
        };
        self.gesture
            .handle_event(GestureEvent::PointerPressed {
                source_group: group,
                item,
                position,
            })
            .changed
    }

    /// Pointer moved. Returns the payload when this move starts the drag.
    pub fn pointer_moved(&mut self, position: Point, primary_pressed: bool) -> Option<DragPayload> {
        let transition = self.gesture.handle_event(GestureEvent::PointerMoved {
            position,
            primary_pressed,
        });
        if transition.started_dragging() {
            self.gesture.payload().cloned()
        } else {
            None
        }
    }

    /// Primary button released without a drop.
    pub fn pointer_released(&mut self) {
        self.gesture.handle_event(GestureEvent::PointerReleased);
        self.clear_indicators();
    }

    /// The platform aborted the drag.
    pub fn cancel_drag(&mut self) {
        self.gesture.handle_event(GestureEvent::Cancelled);
        self.clear_indicators();
    }

    /// A drag hovers `target`. Never mutates the layout.
    pub fn drag_over(
        &mut self,
        target: GroupId,
        payload: &DragPayload,
        pointer: Point,
        item_bounds: &[Rect],
    ) -> DragOverOutcome {
        if let DragPayload::ExternalPaths { paths } = payload {
            if self.gesture.state().is_at_rest() {
                self.gesture.handle_event(GestureEvent::ExternalDragEntered {
                    paths: paths.clone(),
                });
            }
        }

        let Some(index) = self.index_of(target) else {
            return DragOverOutcome::rejected();
        };
        self.clear_indicators_except(target);

        let before = self.groups[index].indicator();
        let outcome = self.groups[index].drag_over(payload, pointer, item_bounds);
        if outcome.is_accepted() {
            self.gesture.handle_event(GestureEvent::DragOver { target });
        }
        if outcome.insertion_index != before {
            self.emit(DockEvent::IndicatorChanged {
                group: target,
                index: outcome.insertion_index,
            });
        }
        outcome
    }

    /// The drag left `target`.
    pub fn drag_leave(&mut self, target: GroupId) {
        self.gesture.handle_event(GestureEvent::DragLeft);
        if let Some(index) = self.index_of(target) {
            if self.groups[index].clear_indicator() {
                self.emit(DockEvent::IndicatorChanged {
                    group: target,
                    index: None,
                });
            }
        }
    }

    /// Deliver a drop on `target`. Returns whether the layout changed.
    pub fn drop_on_group(
        &mut self,
        target: GroupId,
        payload: &DragPayload,
        pointer: Point,
        item_bounds: &[Rect],
    ) -> bool {
        self.gesture.handle_event(GestureEvent::Dropped);
        self.clear_indicators_except(target);

        let Some(index) = self.index_of(target) else {
            return false;
        };
        let had_indicator = self.groups[index].indicator().is_some();
        let action = self.groups[index].resolve_drop(payload, pointer, item_bounds);
        if had_indicator {
            self.emit(DockEvent::IndicatorChanged {
                group: target,
                index: None,
            });
        }

        debug!("Drop on group {}: {:?}", target, action);
        match action {
            DropAction::Reorder { path, index: to } => self.reorder_item(target, &path, to),
            DropAction::MoveAcross { item, source_group } => {
                self.move_item_between_groups(&item.path, Some(source_group), Some(target))
            }
            DropAction::Ingest { paths } => {
                let mut added = false;
                for path in &paths {
                    added |= self.insert_item(index, path);
                }
                if added {
                    self.persist();
                }
                added
            }
            DropAction::Rejected => false,
        }
    }

    /// Deliver a drop on the dock outside any group.
    ///
    /// External paths go to the first group, which is created if needed.
    pub fn drop_on_dock(&mut self, payload: &DragPayload) -> bool {
        self.gesture.handle_event(GestureEvent::Dropped);
        self.clear_indicators();

        let DragPayload::ExternalPaths { paths } = payload else {
            debug!("Ignoring {} payload dropped on the dock", payload.format());
            return false;
        };
        let paths: Vec<&String> = paths.iter().filter(|path| !path.is_empty()).collect();
        if paths.is_empty() {
            return false;
        }

        let index = self.first_group_or_create();
        for path in paths {
            self.insert_item(index, path);
        }
        self.persist();
        true
    }

    fn clear_indicators(&mut self) {
        self.clear_indicators_where(|_| true);
    }

    fn clear_indicators_except(&mut self, keep: GroupId) {
        self.clear_indicators_where(|id| id != keep);
    }

    fn clear_indicators_where(&mut self, predicate: impl Fn(GroupId) -> bool) {
        let cleared: Vec<GroupId> = self
            .groups
            .iter_mut()
            .filter(|group| predicate(group.id()))
            .filter_map(|group| group.clear_indicator().then(|| group.id()))
            .collect();
        for group in cleared {
            self.emit(DockEvent::IndicatorChanged { group, index: None });
        }
    }

    // ========== Teardown ==========

    /// Final save; consumes the controller.
    pub fn shutdown(self) {
        info!("Shutting down dock, saving layout");
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DockItemKind;
    use crate::persistence::MemoryLayoutStore;
    use crate::services::{DialogService, FileInteraction, LaunchError, Launcher};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Yes;

    impl DialogService for Yes {
        fn confirm(&self, _message: &str, _title: &str) -> bool {
            true
        }
        fn notify(&self, _message: &str, _title: &str) {}
    }

    struct NoPicks;

    impl FileInteraction for NoPicks {
        fn pick_file(&self) -> Option<String> {
            None
        }
        fn pick_folder(&self) -> Option<String> {
            None
        }
    }

    struct Refuse;

    impl Launcher for Refuse {
        fn open(&self, path: &str) -> std::result::Result<(), LaunchError> {
            Err(LaunchError::Rejected(path.to_string()))
        }
    }

    fn dock_with(layout: DockLayout) -> (DockController, MemoryLayoutStore) {
        let store = MemoryLayoutStore::with_layout(&layout);
        let controller = DockController::new(
            store.clone(),
            Services::new(Yes, NoPicks, Refuse),
            DockSettings::with_config_dir("/tmp/slidedock-test"),
        );
        (controller, store)
    }

    fn two_groups() -> DockLayout {
        let mut first = Group::new("First");
        first
            .items
            .push(DockItem::new("a", "/a", DockItemKind::File));
        first
            .items
            .push(DockItem::new("b", "/b", DockItemKind::File));
        DockLayout {
            groups: vec![first, Group::new("Second")],
            ..Default::default()
        }
    }

    #[test]
    fn test_add_group_uses_default_name() {
        let (mut dock, store) = dock_with(DockLayout::default());
        let id = dock.add_group(Some("  "));

        assert_eq!(dock.group(id).unwrap().name(), "New Group");
        assert!(dock.group(id).unwrap().is_expanded());
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_move_to_same_group_is_noop() {
        let (mut dock, store) = dock_with(two_groups());
        let first = dock.group_at(0);

        assert!(!dock.move_item_between_groups("/a", first, first));
        assert!(!dock.move_item_between_groups("/a", first, None));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_move_saves_once() {
        let (mut dock, store) = dock_with(two_groups());
        let (first, second) = (dock.group_at(0), dock.group_at(1));

        assert!(dock.move_item_between_groups("/a", first, second));
        assert_eq!(store.save_count(), 1);
        assert_eq!(dock.groups()[0].len(), 1);
        assert_eq!(dock.groups()[1].items()[0].path, "/a");
    }

    #[test]
    fn test_events_follow_mutation_order() {
        let (mut dock, _store) = dock_with(two_groups());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = dock.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        dock.toggle_dock_side();
        dock.set_always_on_top(true);
        dock.set_always_on_top(true);
        assert!(dock.unsubscribe(id));
        dock.toggle_expanded();

        assert_eq!(
            *seen.borrow(),
            vec![
                DockEvent::DockSideChanged {
                    side: DockSide::Right
                },
                DockEvent::AlwaysOnTopChanged { enabled: true },
            ]
        );
    }

    #[test]
    fn test_failed_launch_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("readme.txt");
        std::fs::write(&file, "hi").unwrap();
        let path = file.to_string_lossy().to_string();

        let (mut dock, _store) = dock_with(two_groups());
        let first = dock.group_at(0).unwrap();
        dock.add_item(first, &path);

        assert_eq!(dock.launch_item(first, &path), LaunchOutcome::Failed);
        assert_eq!(dock.launch_item(first, "/nowhere"), LaunchOutcome::NotFound);
    }

    #[test]
    fn test_checked_lookups() {
        let (dock, _store) = dock_with(two_groups());
        assert!(matches!(
            dock.group_id_checked(5),
            Err(DockError::GroupIndexOutOfBounds { index: 5, count: 2 })
        ));

        let first = dock.group_id_checked(0).unwrap();
        assert!(dock.item_checked(first, "/a").is_ok());
        assert!(matches!(
            dock.item_checked(first, "/zzz"),
            Err(DockError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_shutdown_saves_final_layout() {
        let (dock, store) = dock_with(two_groups());
        dock.shutdown();
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.last_saved().unwrap().menu_groups.len(), 2);
    }
}
