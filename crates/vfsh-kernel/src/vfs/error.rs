//! Filesystem operation errors.

use thiserror::Error;

/// Result type for filesystem operations.
pub type FsResult<T> = Result<T, FsError>;

/// Why a filesystem operation was refused.
///
/// Display strings are the POSIX phrases, so command handlers can render
/// `cat: notes.txt: No such file or directory` without a lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    #[error("No such file or directory")]
    NotFound,
    #[error("File exists")]
    AlreadyExists,
    #[error("Not a directory")]
    NotADirectory,
    #[error("Is a directory")]
    IsADirectory,
    #[error("{0}")]
    InvalidOperation(String),
}

impl FsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        FsError::InvalidOperation(msg.into())
    }
}
