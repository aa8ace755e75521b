//! Shared collaborator doubles for the integration tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dock_core::{
    DialogService, DockController, DockLayout, DockSettings, FileInteraction, LaunchError,
    Launcher, MemoryLayoutStore, Services,
};

/// Dialogs that answer every confirmation the same way and record what was asked.
#[derive(Clone, Default)]
pub struct ScriptedDialogs {
    pub answer: Rc<Cell<bool>>,
    pub confirms: Rc<RefCell<Vec<(String, String)>>>,
    pub notices: Rc<RefCell<Vec<(String, String)>>>,
}

impl ScriptedDialogs {
    pub fn answering(answer: bool) -> Self {
        let dialogs = Self::default();
        dialogs.answer.set(answer);
        dialogs
    }
}

impl DialogService for ScriptedDialogs {
    fn confirm(&self, message: &str, title: &str) -> bool {
        self.confirms
            .borrow_mut()
            .push((message.to_string(), title.to_string()));
        self.answer.get()
    }

    fn notify(&self, message: &str, title: &str) {
        self.notices
            .borrow_mut()
            .push((message.to_string(), title.to_string()));
    }
}

#[derive(Clone, Default)]
pub struct ScriptedFiles {
    pub file: Option<String>,
    pub folder: Option<String>,
}

impl FileInteraction for ScriptedFiles {
    fn pick_file(&self) -> Option<String> {
        self.file.clone()
    }

    fn pick_folder(&self) -> Option<String> {
        self.folder.clone()
    }
}

#[derive(Clone, Default)]
pub struct RecordingLauncher {
    pub opened: Rc<RefCell<Vec<String>>>,
    pub fail: bool,
}

impl Launcher for RecordingLauncher {
    fn open(&self, path: &str) -> Result<(), LaunchError> {
        self.opened.borrow_mut().push(path.to_string());
        if self.fail {
            Err(LaunchError::Rejected(path.to_string()))
        } else {
            Ok(())
        }
    }
}

pub struct Harness {
    pub dock: DockController,
    pub store: MemoryLayoutStore,
    pub dialogs: ScriptedDialogs,
    pub launcher: RecordingLauncher,
}

pub fn harness(layout: DockLayout) -> Harness {
    harness_with_files(layout, ScriptedFiles::default())
}

pub fn harness_with_files(layout: DockLayout, files: ScriptedFiles) -> Harness {
    let store = MemoryLayoutStore::with_layout(&layout);
    let dialogs = ScriptedDialogs::answering(true);
    let launcher = RecordingLauncher::default();
    let dock = DockController::new(
        store.clone(),
        Services::new(dialogs.clone(), files, launcher.clone()),
        DockSettings::with_config_dir(std::env::temp_dir().join("slidedock-tests")),
    );
    Harness {
        dock,
        store,
        dialogs,
        launcher,
    }
}

pub fn names(dock: &DockController, group: usize) -> Vec<String> {
    dock.groups()[group]
        .items()
        .iter()
        .map(|item| item.name.clone())
        .collect()
}
