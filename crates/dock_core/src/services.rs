//! Collaborator capabilities consumed by the dock
//!
//! Everything platform-specific (message boxes, file pickers, process
//! launching, icon extraction) sits behind these traits. The dock runs on a
//! single UI thread, so none of them need to be `Send`.

use std::fmt;
use thiserror::Error;

use crate::model::DockItemKind;

/// Confirmation and message dialogs.
pub trait DialogService {
    /// Ask a yes/no question. `true` means the user confirmed.
    fn confirm(&self, message: &str, title: &str) -> bool;

    /// Show an informational message.
    fn notify(&self, message: &str, title: &str);
}

/// Native file and folder pickers.
pub trait FileInteraction {
    /// Pick a single file; `None` when cancelled.
    fn pick_file(&self) -> Option<String>;

    /// Pick a single folder; `None` when cancelled.
    fn pick_folder(&self) -> Option<String>;
}

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Failed to start opener for {path}: {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Opener exited with failure for {0}")]
    Rejected(String),
}

/// Opens a path with whatever the platform associates with it.
pub trait Launcher {
    fn open(&self, path: &str) -> Result<(), LaunchError>;
}

/// Encoded icon image for an item.
#[derive(Clone, PartialEq, Eq)]
pub struct Icon {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixels, row-major
    pub pixels: Vec<u8>,
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icon")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Icon extraction; returning `None` lets the host draw a placeholder.
pub trait IconProvider {
    fn icon_for(&self, path: &str, kind: DockItemKind) -> Option<Icon>;
}

/// Icon provider for hosts that draw no icons.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoIcons;

impl IconProvider for NoIcons {
    fn icon_for(&self, _path: &str, _kind: DockItemKind) -> Option<Icon> {
        None
    }
}

/// The full set of collaborators handed to the dock controller.
pub struct Services {
    pub dialogs: Box<dyn DialogService>,
    pub files: Box<dyn FileInteraction>,
    pub launcher: Box<dyn Launcher>,
    pub icons: Box<dyn IconProvider>,
}

impl Services {
    pub fn new(
        dialogs: impl DialogService + 'static,
        files: impl FileInteraction + 'static,
        launcher: impl Launcher + 'static,
    ) -> Self {
        Self {
            dialogs: Box::new(dialogs),
            files: Box::new(files),
            launcher: Box::new(launcher),
            icons: Box::new(NoIcons),
        }
    }

    pub fn with_icons(mut self, icons: impl IconProvider + 'static) -> Self {
        self.icons = Box::new(icons);
        self
    }
}
