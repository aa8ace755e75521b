//! Dock data model
//!
//! Plain owned data: a [`DockLayout`] owns its [`Group`]s, each group owns its
//! [`DockItem`]s. Items never point back at their group.

mod group;
mod item;
mod layout;

pub use group::{Group, GroupId};
pub use item::{DockItem, DockItemKind};
pub use layout::{DockLayout, DockSide};
