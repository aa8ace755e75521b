//! Group controller
//!
//! Owns one group's model and its live view. The live view carries what the
//! host renders (the item plus its icon) and is authoritative for order after
//! a reorder; the model is resynchronized from it. The group controller never
//! persists anything itself: the dock controller saves once per operation.

use log::{debug, info};

use crate::classifier::Classifier;
use crate::drag::{DragOverOutcome, DragPayload, DropEffect};
use crate::geometry::{resolve_insertion_index, Point, Rect};
use crate::model::{DockItem, Group, GroupId};
use crate::services::{DialogService, Icon, IconProvider};

/// One rendered entry of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub item: DockItem,
    pub icon: Option<Icon>,
}

impl ItemView {
    fn load(item: DockItem, icons: &dyn IconProvider) -> Self {
        let icon = icons.icon_for(&item.path, item.kind);
        Self { item, icon }
    }
}

/// What a drop on this group resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    /// Same-group drop: move the item to `index`.
    Reorder { path: String, index: usize },
    /// Item dragged in from another group.
    MoveAcross {
        item: DockItem,
        source_group: GroupId,
    },
    /// External paths, one add per path in delivery order.
    Ingest { paths: Vec<String> },
    Rejected,
}

#[derive(Debug, Clone)]
pub struct GroupController {
    group: Group,
    view: Vec<ItemView>,
    indicator: Option<usize>,
}

impl GroupController {
    pub fn new(group: Group, icons: &dyn IconProvider) -> Self {
        let view = group
            .items
            .iter()
            .cloned()
            .map(|item| ItemView::load(item, icons))
            .collect();
        Self {
            group,
            view,
            indicator: None,
        }
    }

    pub fn id(&self) -> GroupId {
        self.group.id
    }

    pub fn name(&self) -> &str {
        &self.group.name
    }

    pub fn is_expanded(&self) -> bool {
        self.group.expanded
    }

    /// Persisted model of this group.
    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn items(&self) -> &[DockItem] {
        &self.group.items
    }

    /// Live view in display order.
    pub fn view(&self) -> &[ItemView] {
        &self.view
    }

    /// Current insertion-point indicator, if one is shown.
    pub fn indicator(&self) -> Option<usize> {
        self.indicator
    }

    pub fn len(&self) -> usize {
        self.group.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group.items.is_empty()
    }

    pub fn item(&self, path: &str) -> Option<&DockItem> {
        self.group.item(path)
    }

    pub fn position(&self, path: &str) -> Option<usize> {
        self.view.iter().position(|entry| entry.item.path == path)
    }

    pub(crate) fn rename(&mut self, name: String) -> bool {
        if self.group.name == name {
            return false;
        }
        self.group.name = name;
        true
    }

    pub(crate) fn toggle_expanded(&mut self) -> bool {
        self.group.expanded = !self.group.expanded;
        self.group.expanded
    }

    /// Classify `path` and append the resulting item to model and view.
    ///
    /// Returns the index of the new item, or `None` for an empty path.
    pub fn add_item(
        &mut self,
        path: &str,
        classifier: &Classifier,
        icons: &dyn IconProvider,
    ) -> Option<usize> {
        if path.is_empty() {
            return None;
        }

        let item = DockItem::from_path(path, classifier);
        info!(
            "Adding {} '{}' to group '{}'",
            item.kind.label(),
            item.name,
            self.group.name
        );
        self.group.items.push(item.clone());
        self.view.push(ItemView::load(item, icons));
        Some(self.view.len() - 1)
    }

    /// Accept an item dragged in from another group.
    ///
    /// The item is rebuilt from its path, so its kind reflects what the path
    /// classifies to now.
    pub fn move_item_in(
        &mut self,
        path: &str,
        classifier: &Classifier,
        icons: &dyn IconProvider,
    ) -> Option<usize> {
        self.add_item(path, classifier, icons)
    }

    /// Ask for confirmation, then remove the item at `path`.
    pub fn remove_item(&mut self, path: &str, dialogs: &dyn DialogService) -> Option<DockItem> {
        let name = self.item(path)?.name.clone();

        let message = format!("Remove the item '{}'?", name);
        if !dialogs.confirm(&message, "Confirm Removal") {
            debug!("Removal of '{}' declined", path);
            return None;
        }

        self.take_item(path)
    }

    /// Remove the first item with `path` from view and model, unconfirmed.
    pub(crate) fn take_item(&mut self, path: &str) -> Option<DockItem> {
        let model_index = self.group.position(path)?;
        let item = self.group.items.remove(model_index);
        if let Some(view_index) = self.position(path) {
            self.view.remove(view_index);
        }
        info!("Removed '{}' from group '{}'", item.name, self.group.name);
        Some(item)
    }

    /// Move the item at `path` to `new_index`, clamped to the last position.
    ///
    /// Returns `(from, to)` when the order changed.
    pub fn reorder_item(&mut self, path: &str, new_index: usize) -> Option<(usize, usize)> {
        let old_index = self.position(path)?;
        let new_index = new_index.min(self.view.len() - 1);
        if new_index == old_index {
            return None;
        }

        let entry = self.view.remove(old_index);
        self.view.insert(new_index, entry);
        self.sync_model_from_view();

        debug!(
            "Reordered '{}' in group '{}': {} -> {}",
            path, self.group.name, old_index, new_index
        );
        Some((old_index, new_index))
    }

    /// The live order wins: rebuild the model sequence from the view.
    fn sync_model_from_view(&mut self) {
        self.group.items = self.view.iter().map(|entry| entry.item.clone()).collect();
    }

    pub(crate) fn rename_item(&mut self, path: &str, name: &str) -> bool {
        let Some(index) = self.group.position(path) else {
            return false;
        };
        if self.group.items[index].name == name {
            return false;
        }

        self.group.items[index].name = name.to_string();
        if let Some(view_index) = self.position(path) {
            self.view[view_index].item.name = name.to_string();
        }
        true
    }

    /// Payload for a drag starting on the item at `path`.
    pub fn export_drag(&self, path: &str) -> Option<DragPayload> {
        self.item(path)
            .map(|item| DragPayload::internal(item.clone(), self.group.id))
    }

    /// Classify a hovering payload and update the insertion indicator.
    pub fn drag_over(
        &mut self,
        payload: &DragPayload,
        pointer: Point,
        item_bounds: &[Rect],
    ) -> DragOverOutcome {
        let outcome = match payload {
            DragPayload::InternalMove { source_group, .. } if *source_group == self.group.id => {
                DragOverOutcome {
                    effect: DropEffect::Move,
                    insertion_index: Some(resolve_insertion_index(pointer, item_bounds)),
                }
            }
            DragPayload::InternalMove { .. } => DragOverOutcome {
                effect: DropEffect::Move,
                insertion_index: None,
            },
            DragPayload::ExternalPaths { paths } if !paths.is_empty() => DragOverOutcome {
                effect: DropEffect::Copy,
                insertion_index: None,
            },
            DragPayload::ExternalPaths { .. } | DragPayload::Unsupported { .. } => {
                DragOverOutcome::rejected()
            }
        };

        debug!(
            "Drag over group '{}': {} payload -> {:?}",
            self.group.name,
            payload.format(),
            outcome.effect
        );
        self.indicator = outcome.insertion_index;
        outcome
    }

    /// Resolve a drop on this group. Always clears the indicator.
    pub fn resolve_drop(
        &mut self,
        payload: &DragPayload,
        pointer: Point,
        item_bounds: &[Rect],
    ) -> DropAction {
        self.clear_indicator();

        match payload {
            DragPayload::InternalMove { item, source_group } if *source_group == self.group.id => {
                DropAction::Reorder {
                    path: item.path.clone(),
                    index: resolve_insertion_index(pointer, item_bounds),
                }
            }
            DragPayload::InternalMove { item, source_group } => DropAction::MoveAcross {
                item: item.clone(),
                source_group: *source_group,
            },
            DragPayload::ExternalPaths { paths } if !paths.is_empty() => DropAction::Ingest {
                paths: paths.clone(),
            },
            DragPayload::ExternalPaths { .. } | DragPayload::Unsupported { .. } => {
                DropAction::Rejected
            }
        }
    }

    /// Hide the insertion indicator. Returns whether one was shown.
    pub fn clear_indicator(&mut self) -> bool {
        self.indicator.take().is_some()
    }
}
