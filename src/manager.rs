//! Base-directory file management operations
//!
//! [`DirectoryManager`] is bound to a resolved base path at construction
//! (creating it if absent). Every operation resolves a caller-supplied
//! relative name against that base, performs one filesystem action, and
//! reports the outcome as a typed [`Result`]. No state is retained between
//! calls; the filesystem is re-read as the source of truth on every call.
//!
//! All operations are synchronous and single-threaded. File handles are
//! scoped to a single call and released on every exit path. Concurrent
//! external modification of the tree is unguarded.

use crate::error::{ManagerError, Result};
use crate::paths;
use crate::permissions::{self, PermissionFlags};
use crate::search;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Kind of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (or anything that is not a directory)
    File,
    /// Directory
    Directory,
}

/// An immediate child of the base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Entry name (final path component)
    pub name: OsString,
    /// Whether the entry is a file or a directory
    pub kind: EntryKind,
}

/// File manager scoped to a single base directory
///
/// Holds nothing beyond the absolute base path; see the module docs for the
/// operation contract.
#[derive(Debug, Clone)]
pub struct DirectoryManager {
    base: PathBuf,
}

impl DirectoryManager {
    /// Create a manager bound to `base`, creating the directory (and any
    /// missing parents) if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError::Io`] if the directory cannot be created or
    /// the path cannot be canonicalized.
    pub fn new(base: impl AsRef<Path>) -> Result<Self> {
        let base = base.as_ref();
        if !base.exists() {
            fs::create_dir_all(base)?;
            debug!(base = %base.display(), "created base directory");
        }
        let base = base.canonicalize()?;
        Ok(Self { base })
    }

    /// The absolute base directory all names are resolved against
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Enumerate the immediate children of the base directory.
    ///
    /// No recursion; ordering follows whatever the underlying directory
    /// listing yields.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError::Io`] if the base directory cannot be read.
    pub fn list(&self) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.base)? {
            let entry = entry?;
            let kind = if entry.file_type()?.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(Entry {
                name: entry.file_name(),
                kind,
            });
        }
        Ok(entries)
    }

    /// Create an empty file at `base/name`. Never overwrites.
    ///
    /// # Errors
    ///
    /// - [`ManagerError::AlreadyExists`] if the path is already present
    /// - [`ManagerError::InvalidName`] if `name` escapes the base directory
    /// - [`ManagerError::Io`] for any other OS failure
    pub fn create_file(&self, name: &str) -> Result<()> {
        let path = paths::resolve(&self.base, name)?;
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => ManagerError::AlreadyExists(PathBuf::from(name)),
                _ => ManagerError::Io(e),
            })?;
        debug!(path = %path.display(), "created file");
        Ok(())
    }

    /// Create a single directory at `base/name` (non-recursive).
    ///
    /// # Errors
    ///
    /// - [`ManagerError::AlreadyExists`] if the path is already present
    /// - [`ManagerError::NotFound`] if an intermediate component is missing
    /// - [`ManagerError::InvalidName`] if `name` escapes the base directory
    /// - [`ManagerError::Io`] for any other OS failure
    pub fn create_dir(&self, name: &str) -> Result<()> {
        let path = paths::resolve(&self.base, name)?;
        fs::create_dir(&path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => ManagerError::AlreadyExists(PathBuf::from(name)),
            ErrorKind::NotFound => ManagerError::NotFound(PathBuf::from(name)),
            _ => ManagerError::Io(e),
        })?;
        debug!(path = %path.display(), "created directory");
        Ok(())
    }

    /// Delete `base/name`: recursively for a directory, directly for a file.
    ///
    /// # Errors
    ///
    /// - [`ManagerError::NotFound`] if the entry is absent
    /// - [`ManagerError::InvalidName`] if `name` escapes the base directory
    /// - [`ManagerError::Io`] for any other OS failure
    pub fn remove(&self, name: &str) -> Result<()> {
        let path = paths::resolve(&self.base, name)?;
        // symlink_metadata so a dangling symlink is still deletable
        let metadata = fs::symlink_metadata(&path)
            .map_err(|e| Self::map_not_found(e, name))?;
        if metadata.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        debug!(path = %path.display(), "removed entry");
        Ok(())
    }

    /// Relocate `base/name` to `base/target_dir/name`.
    ///
    /// The destination must be an existing directory; the entry is placed
    /// inside it, keeping its name.
    ///
    /// # Errors
    ///
    /// - [`ManagerError::NotFound`] if the source or the destination
    ///   directory is absent
    /// - [`ManagerError::InvalidName`] if either name escapes the base
    /// - [`ManagerError::Io`] for any other OS failure
    pub fn move_into(&self, name: &str, target_dir: &str) -> Result<()> {
        let src = paths::resolve(&self.base, name)?;
        let dir = paths::resolve(&self.base, target_dir)?;
        if fs::symlink_metadata(&src).is_err() {
            return Err(ManagerError::NotFound(PathBuf::from(name)));
        }
        if !dir.is_dir() {
            return Err(ManagerError::NotFound(PathBuf::from(target_dir)));
        }
        let dst = dir.join(name);
        fs::rename(&src, &dst)?;
        debug!(src = %src.display(), dst = %dst.display(), "moved entry");
        Ok(())
    }

    /// Rename `base/old` to `base/new` within the base directory.
    ///
    /// Policy for an existing destination: reject. Renaming an entry onto
    /// itself is a successful no-op.
    ///
    /// # Errors
    ///
    /// - [`ManagerError::NotFound`] if the source is absent
    /// - [`ManagerError::AlreadyExists`] if the destination is present
    /// - [`ManagerError::InvalidName`] if either name escapes the base
    /// - [`ManagerError::Io`] for any other OS failure
    pub fn rename(&self, old: &str, new: &str) -> Result<()> {
        let src = paths::resolve(&self.base, old)?;
        let dst = paths::resolve(&self.base, new)?;
        if fs::symlink_metadata(&src).is_err() {
            return Err(ManagerError::NotFound(PathBuf::from(old)));
        }
        if src == dst {
            return Ok(());
        }
        if fs::symlink_metadata(&dst).is_ok() {
            return Err(ManagerError::AlreadyExists(PathBuf::from(new)));
        }
        fs::rename(&src, &dst)?;
        debug!(src = %src.display(), dst = %dst.display(), "renamed entry");
        Ok(())
    }

    /// Copy `base/name` into `base/target_dir/name`.
    ///
    /// A directory source is copied recursively; a file source is copied
    /// directly. The destination path must not already exist.
    ///
    /// # Errors
    ///
    /// - [`ManagerError::NotFound`] if the source or the destination
    ///   directory is absent
    /// - [`ManagerError::AlreadyExists`] if the destination path is present
    /// - [`ManagerError::InvalidName`] if either name escapes the base
    /// - [`ManagerError::Io`] for any other OS failure
    pub fn copy_into(&self, name: &str, target_dir: &str) -> Result<()> {
        let src = paths::resolve(&self.base, name)?;
        let dir = paths::resolve(&self.base, target_dir)?;
        if fs::symlink_metadata(&src).is_err() {
            return Err(ManagerError::NotFound(PathBuf::from(name)));
        }
        if !dir.is_dir() {
            return Err(ManagerError::NotFound(PathBuf::from(target_dir)));
        }
        let dst = dir.join(name);
        if fs::symlink_metadata(&dst).is_ok() {
            return Err(ManagerError::AlreadyExists(Path::new(target_dir).join(name)));
        }
        if src.is_dir() {
            copy_tree(&src, &dst)?;
        } else {
            fs::copy(&src, &dst)?;
        }
        debug!(src = %src.display(), dst = %dst.display(), "copied entry");
        Ok(())
    }

    /// Apply owner permission bits computed from `flags` to `base/name`.
    ///
    /// # Errors
    ///
    /// - [`ManagerError::NotFound`] if the entry is absent
    /// - [`ManagerError::InvalidName`] if `name` escapes the base directory
    /// - [`ManagerError::Io`] for any other OS failure
    pub fn set_permissions(&self, name: &str, flags: PermissionFlags) -> Result<()> {
        let path = paths::resolve(&self.base, name)?;
        if fs::symlink_metadata(&path).is_err() {
            return Err(ManagerError::NotFound(PathBuf::from(name)));
        }
        permissions::apply(&path, flags)?;
        debug!(path = %path.display(), mode = flags.owner_mode(), "changed permissions");
        Ok(())
    }

    /// Recursively scan the base directory tree for entries whose name
    /// contains `keyword` (case-sensitive substring match).
    ///
    /// Matches are reported relative to the base directory.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError::Io`] if the tree cannot be traversed.
    pub fn search(&self, keyword: &str) -> Result<Vec<PathBuf>> {
        Ok(search::scan(&self.base, keyword)?)
    }

    /// Read the entire contents of the file at `base/name`.
    ///
    /// # Errors
    ///
    /// - [`ManagerError::NotFound`] if the entry is absent
    /// - [`ManagerError::IsADirectory`] if the entry is a directory
    /// - [`ManagerError::InvalidName`] if `name` escapes the base directory
    /// - [`ManagerError::Io`] for any other OS failure
    pub fn read_file(&self, name: &str) -> Result<String> {
        let path = self.resolve_file(name)?;
        Ok(fs::read_to_string(path)?)
    }

    /// Append `text` (preceded by a newline) to the end of `base/name`.
    ///
    /// The file handle is scoped to this call and released on every exit
    /// path. Use [`Self::read_file`] for the read phase of an edit flow.
    ///
    /// # Errors
    ///
    /// - [`ManagerError::NotFound`] if the entry is absent
    /// - [`ManagerError::IsADirectory`] if the entry is a directory
    /// - [`ManagerError::InvalidName`] if `name` escapes the base directory
    /// - [`ManagerError::Io`] for any other OS failure
    pub fn append_line(&self, name: &str, text: &str) -> Result<()> {
        let path = self.resolve_file(name)?;
        let mut file = OpenOptions::new().append(true).open(&path)?;
        file.write_all(b"\n")?;
        file.write_all(text.as_bytes())?;
        debug!(path = %path.display(), bytes = text.len(), "appended to file");
        Ok(())
    }

    /// Resolve `name` to an existing file path
    fn resolve_file(&self, name: &str) -> Result<PathBuf> {
        let path = paths::resolve(&self.base, name)?;
        let metadata = fs::metadata(&path)
            .map_err(|e| Self::map_not_found(e, name))?;
        if metadata.is_dir() {
            return Err(ManagerError::IsADirectory(PathBuf::from(name)));
        }
        Ok(path)
    }

    fn map_not_found(e: std::io::Error, name: &str) -> ManagerError {
        match e.kind() {
            ErrorKind::NotFound => ManagerError::NotFound(PathBuf::from(name)),
            _ => ManagerError::Io(e),
        }
    }
}

/// Recursively copy the directory tree at `src` to `dst`.
///
/// `dst` must not exist; it is created as the tree root.
fn copy_tree(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::create_dir(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let child_src = entry.path();
        let child_dst = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&child_src, &child_dst)?;
        } else {
            fs::copy(&child_src, &child_dst)?;
        }
    }
    Ok(())
}
