//! Item classification
//!
//! Turns a filesystem path into a kind and a display name. Total over every
//! string: paths that do not exist fall back to a generic file so that moved or
//! renamed targets are still accepted; existence is checked again at launch.

use log::debug;
use std::path::Path;

use crate::config::DockSettings;
use crate::model::DockItemKind;

/// Result of classifying a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: DockItemKind,
    pub name: String,
}

/// Path classifier configured with the extensions treated as applications.
#[derive(Debug, Clone)]
pub struct Classifier {
    executable_extensions: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(["exe"])
    }
}

impl Classifier {
    pub fn new<I, S>(executable_extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            executable_extensions: executable_extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
        }
    }

    pub fn from_settings(settings: &DockSettings) -> Self {
        Self::new(&settings.executable_extensions)
    }

    /// Classify `path` into a kind and display name.
    pub fn classify(&self, path: &str) -> Classification {
        let fs_path = Path::new(path);
        let segment = last_segment(path);

        if fs_path.is_dir() {
            return Classification {
                kind: DockItemKind::Folder,
                name: segment.to_string(),
            };
        }

        let name = strip_extension(segment).to_string();
        if fs_path.is_file() {
            let kind = if self.is_executable(segment) {
                DockItemKind::Application
            } else {
                DockItemKind::File
            };
            return Classification { kind, name };
        }

        debug!("Path not found while classifying, treating as file: {}", path);
        Classification {
            kind: DockItemKind::File,
            name,
        }
    }

    fn is_executable(&self, file_name: &str) -> bool {
        extension(file_name).is_some_and(|ext| {
            self.executable_extensions
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(ext))
        })
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Last path segment, accepting both `/` and `\` so Windows-style records read
/// the same on every platform.
fn last_segment(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    match trimmed.rfind(is_separator) {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    }
}

/// Split off the extension of a file name; dot-files keep their name.
fn split_extension(file_name: &str) -> (&str, Option<&str>) {
    if file_name == ".." {
        return (file_name, None);
    }
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (file_name, None),
    }
}

fn strip_extension(file_name: &str) -> &str {
    split_extension(file_name).0
}

fn extension(file_name: &str) -> Option<&str> {
    split_extension(file_name).1
}
