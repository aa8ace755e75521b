//! Layout persistence
//!
//! Loading never fails from the caller's point of view: a missing or corrupt
//! record is replaced by the sample layout. Saving is best-effort and only
//! logs failures; the in-memory layout stays authoritative.

mod file;
mod memory;
mod record;
mod sample;

pub use file::FileLayoutStore;
pub use memory::MemoryLayoutStore;
pub use record::{AppIconRecord, DockLayoutRecord, MenuGroupRecord};
pub use sample::sample_layout;

use crate::model::DockLayout;

/// Durable storage for the dock layout.
pub trait LayoutStore {
    /// Load the stored layout, or a default layout when none is usable.
    fn load(&self) -> DockLayout;

    /// Store the full layout. Failures are logged, never returned.
    fn save(&self, layout: &DockLayout);
}
