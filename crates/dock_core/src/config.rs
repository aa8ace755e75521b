//! Dock settings
//!
//! Resolved once at startup and handed to the controller; nothing in the core
//! reads the environment afterwards.

use std::path::{Path, PathBuf};

use crate::error::{DockError, Result};

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "SLIDEDOCK_CONFIG_DIR";

const APP_DIR_NAME: &str = "SlideDock";
const DEFAULT_LAYOUT_FILE: &str = "configuration.json";
const DEFAULT_GROUP_NAME: &str = "New Group";

/// Minimum pointer travel before a press turns into a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragThreshold {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Default for DragThreshold {
    fn default() -> Self {
        Self {
            horizontal: 4.0,
            vertical: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DockSettings {
    pub config_dir: PathBuf,
    pub layout_file: String,
    /// Extensions classified as applications, lowercase, without the dot
    pub executable_extensions: Vec<String>,
    pub drag_threshold: DragThreshold,
    pub default_group_name: String,
}

impl DockSettings {
    /// Resolve settings from `SLIDEDOCK_CONFIG_DIR` or the platform config dir.
    pub fn from_env() -> Result<Self> {
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => dirs::config_dir()
                .ok_or(DockError::ConfigDirUnavailable)?
                .join(APP_DIR_NAME),
        };
        Ok(Self::with_config_dir(config_dir))
    }

    pub fn with_config_dir<P: AsRef<Path>>(config_dir: P) -> Self {
        Self {
            config_dir: config_dir.as_ref().to_path_buf(),
            layout_file: DEFAULT_LAYOUT_FILE.to_string(),
            executable_extensions: vec!["exe".to_string()],
            drag_threshold: DragThreshold::default(),
            default_group_name: DEFAULT_GROUP_NAME.to_string(),
        }
    }

    /// Full path of the persisted layout record.
    pub fn layout_path(&self) -> PathBuf {
        self.config_dir.join(&self.layout_file)
    }
}
