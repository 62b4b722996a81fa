//! Error types for directory-manager operations
//!
//! Every operation surfaces its outcome as a typed error instead of printing.
//! The presence conditions the manager checks for (`NotFound`, `AlreadyExists`,
//! `IsADirectory`, `InvalidName`) get dedicated variants; any other OS-level
//! failure (permission denied, disk full, ...) is wrapped as [`ManagerError::Io`]
//! and propagated to the caller rather than aborting the process.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for directory-manager operations
pub type Result<T> = std::result::Result<T, ManagerError>;

/// Errors that can occur during directory-manager operations
#[derive(Debug, Error)]
pub enum ManagerError {
    /// The target entry (or a required destination directory) does not exist
    #[error("'{}' not found", .0.display())]
    NotFound(PathBuf),

    /// The target path already exists and the operation requires exclusivity
    #[error("'{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// The operation expected a file but the target is a directory
    #[error("'{}' is a directory, not a file", .0.display())]
    IsADirectory(PathBuf),

    /// The caller-supplied name would escape the base directory
    #[error("invalid entry name '{}': must be a relative path that stays inside the base directory", .0.display())]
    InvalidName(PathBuf),

    /// Any other OS-level I/O failure (permission denied, disk full, ...)
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ManagerError {
    /// Whether this error is the not-found condition
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether this error is the already-exists condition
    #[must_use]
    pub const fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }
}
