//! Real collaborators for the command-line host

use log::{info, warn};
use std::process::Command;

use dock_core::{DialogService, FileInteraction, LaunchError, Launcher};

/// Native message boxes.
pub struct NativeDialogs;

impl DialogService for NativeDialogs {
    fn confirm(&self, message: &str, title: &str) -> bool {
        let result = rfd::MessageDialog::new()
            .set_title(title)
            .set_description(message)
            .set_level(rfd::MessageLevel::Warning)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        matches!(result, rfd::MessageDialogResult::Yes)
    }

    fn notify(&self, message: &str, title: &str) {
        rfd::MessageDialog::new()
            .set_title(title)
            .set_description(message)
            .set_level(rfd::MessageLevel::Info)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

/// Confirms everything; messages go to the log. Used with `--yes`.
pub struct AssumeYes;

impl DialogService for AssumeYes {
    fn confirm(&self, message: &str, title: &str) -> bool {
        info!("{}: {} (assumed yes)", title, message);
        true
    }

    fn notify(&self, message: &str, title: &str) {
        warn!("{}: {}", title, message);
    }
}

/// Native file and folder pickers.
pub struct NativeFilePicker;

impl FileInteraction for NativeFilePicker {
    fn pick_file(&self) -> Option<String> {
        rfd::FileDialog::new()
            .set_title("Add item")
            .pick_file()
            .map(|path| path.display().to_string())
    }

    fn pick_folder(&self) -> Option<String> {
        rfd::FileDialog::new()
            .set_title("Add folder")
            .pick_folder()
            .map(|path| path.display().to_string())
    }
}

/// Opens paths with the platform's default handler.
pub struct SystemLauncher;

impl SystemLauncher {
    fn command(path: &str) -> Command {
        if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", ""]).arg(path);
            command
        } else if cfg!(target_os = "macos") {
            let mut command = Command::new("open");
            command.arg(path);
            command
        } else {
            let mut command = Command::new("xdg-open");
            command.arg(path);
            command
        }
    }
}

impl Launcher for SystemLauncher {
    fn open(&self, path: &str) -> Result<(), LaunchError> {
        let status = Self::command(path)
            .status()
            .map_err(|source| LaunchError::Spawn {
                path: path.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::Rejected(path.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_yes_confirms() {
        assert!(AssumeYes.confirm("Remove the item 'x'?", "Confirm Removal"));
    }

    #[test]
    fn test_launcher_passes_path_as_last_argument() {
        let command = SystemLauncher::command("/tmp/some file.txt");
        let last = command.get_args().last().map(|arg| arg.to_string_lossy().to_string());
        assert_eq!(last.as_deref(), Some("/tmp/some file.txt"));
    }
}
