//! # Dock Core
//!
//! Engine behind the SlideDock launcher: the grouped item model, path
//! classification, drag-and-drop reconciliation between groups, drop geometry
//! and layout persistence. Rendering, dialogs, process launching and icon
//! extraction are supplied by the host through the traits in [`services`].

pub mod classifier;
pub mod config;
pub mod controller;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod model;
pub mod persistence;
pub mod services;

// Re-exports
pub use classifier::{Classification, Classifier};
pub use config::{DockSettings, DragThreshold};
pub use controller::{
    DockController, DockEvent, DropAction, GroupController, ItemView, LaunchOutcome,
    SubscriptionId,
};
pub use drag::{DragOverOutcome, DragPayload, DropEffect, GestureMachine, GestureState};
pub use error::{DockError, Result};
pub use geometry::{resolve_insertion_index, Point, Rect};
pub use model::{DockItem, DockItemKind, DockLayout, DockSide, Group, GroupId};
pub use persistence::{FileLayoutStore, LayoutStore, MemoryLayoutStore};
pub use services::{
    DialogService, FileInteraction, Icon, IconProvider, LaunchError, Launcher, NoIcons, Services,
};
