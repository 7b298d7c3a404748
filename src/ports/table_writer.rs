//! Table Writer Port - Result table serialization interface.

use std::path::Path;

use thiserror::Error;

use crate::domain::analysis::RankedTable;

/// Port for writing the ranked result table.
///
/// # Contract
///
/// Implementations must write atomically: either the complete, well-formed
/// table lands at the target path, or nothing does. No partial output may be
/// left behind on failure.
pub trait TableWriter: Send + Sync {
    /// Serializes `table` to `path`.
    fn write(&self, path: &Path, table: &RankedTable) -> Result<(), WriteError>;
}

/// Errors from writing the result table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// The target path could not be created or written.
    #[error("Cannot write result to '{path}': {message}")]
    TargetUnwritable { path: String, message: String },

    /// Serialization of a row failed.
    #[error("Failed to serialize result row: {message}")]
    Serialization { message: String },
}

impl WriteError {
    /// Creates a target-unwritable error.
    pub fn target_unwritable(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TargetUnwritable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}
