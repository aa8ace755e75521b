//! Dock error types

use thiserror::Error;

use crate::model::GroupId;

#[derive(Error, Debug)]
pub enum DockError {
    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),

    #[error("Group index {index} out of bounds (count: {count})")]
    GroupIndexOutOfBounds { index: usize, count: usize },

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("No configuration directory available on this platform")]
    ConfigDirUnavailable,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DockError>;
