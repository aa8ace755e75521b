//! In-memory layout store
//!
//! Keeps every saved snapshot. Clones share the same storage, so a host (or a
//! test) can keep a handle after giving one to the controller.

use std::cell::RefCell;
use std::rc::Rc;

use super::record::DockLayoutRecord;
use super::LayoutStore;
use crate::model::DockLayout;

#[derive(Debug, Clone, Default)]
pub struct MemoryLayoutStore {
    initial: Option<DockLayoutRecord>,
    saved: Rc<RefCell<Vec<DockLayoutRecord>>>,
}

impl MemoryLayoutStore {
    /// Store that loads an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that loads `layout` until something is saved.
    pub fn with_layout(layout: &DockLayout) -> Self {
        Self {
            initial: Some(DockLayoutRecord::from(layout)),
            saved: Rc::default(),
        }
    }

    pub fn save_count(&self) -> usize {
        self.saved.borrow().len()
    }

    pub fn last_saved(&self) -> Option<DockLayoutRecord> {
        self.saved.borrow().last().cloned()
    }
}

impl LayoutStore for MemoryLayoutStore {
    fn load(&self) -> DockLayout {
        let latest = self.saved.borrow().last().cloned().or_else(|| self.initial.clone());
        latest.map(DockLayout::from).unwrap_or_default()
    }

    fn save(&self, layout: &DockLayout) {
        self.saved.borrow_mut().push(DockLayoutRecord::from(layout));
    }
}
