//! Persisted layout record
//!
//! Field names are stable across releases. Older releases wrote PascalCase
//! names and no `itemType`; both still load.

use serde::{Deserialize, Serialize};

use crate::model::{DockItem, DockItemKind, DockLayout, DockSide, Group, GroupId};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DockLayoutRecord {
    #[serde(default, alias = "IsExpanded")]
    pub is_expanded: bool,

    #[serde(default, alias = "DockPosition")]
    pub dock_position: DockSide,

    #[serde(default, alias = "IsTopmost")]
    pub is_topmost: bool,

    #[serde(default, alias = "MenuGroups")]
    pub menu_groups: Vec<MenuGroupRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroupRecord {
    #[serde(default, alias = "Name")]
    pub name: String,

    #[serde(default, alias = "IsExpanded")]
    pub is_expanded: bool,

    #[serde(default, alias = "AppIcons")]
    pub app_icons: Vec<AppIconRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppIconRecord {
    #[serde(default, alias = "Name")]
    pub name: String,

    #[serde(default, alias = "ExecutablePath")]
    pub executable_path: String,

    /// Absent in records written before item kinds existed
    #[serde(default, alias = "ItemType")]
    pub item_type: DockItemKind,
}

impl From<&DockItem> for AppIconRecord {
    fn from(item: &DockItem) -> Self {
        Self {
            name: item.name.clone(),
            executable_path: item.path.clone(),
            item_type: item.kind,
        }
    }
}

impl From<&Group> for MenuGroupRecord {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name.clone(),
            is_expanded: group.expanded,
            app_icons: group.items.iter().map(AppIconRecord::from).collect(),
        }
    }
}

impl From<&DockLayout> for DockLayoutRecord {
    fn from(layout: &DockLayout) -> Self {
        Self {
            is_expanded: layout.expanded,
            dock_position: layout.dock_side,
            is_topmost: layout.always_on_top,
            menu_groups: layout.groups.iter().map(MenuGroupRecord::from).collect(),
        }
    }
}

// Kinds are taken as stored, not re-classified: the target may be offline.
impl From<AppIconRecord> for DockItem {
    fn from(record: AppIconRecord) -> Self {
        DockItem::new(record.name, record.executable_path, record.item_type)
    }
}

impl From<MenuGroupRecord> for Group {
    fn from(record: MenuGroupRecord) -> Self {
        Group {
            id: GroupId::new(),
            name: record.name,
            expanded: record.is_expanded,
            items: record.app_icons.into_iter().map(DockItem::from).collect(),
        }
    }
}

impl From<DockLayoutRecord> for DockLayout {
    fn from(record: DockLayoutRecord) -> Self {
        DockLayout {
            groups: record.menu_groups.into_iter().map(Group::from).collect(),
            dock_side: record.dock_position,
            expanded: record.is_expanded,
            always_on_top: record.is_topmost,
        }
    }
}
