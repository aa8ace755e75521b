//! Group and dock controllers
//!
//! The dock controller owns the group controllers and is the only writer of
//! the layout. Hosts call into it from their single UI thread.

mod dock;
mod events;
mod group;

pub use dock::{DockController, LaunchOutcome};
pub use events::{DockEvent, SubscriptionId};
pub use group::{DropAction, GroupController, ItemView};
