//! # dirman
//!
//! File-management operations scoped to a single base directory:
//! - Listing immediate children with their kind (file/directory)
//! - Creating empty files and single directories (never overwriting)
//! - Deleting entries (recursively for directories)
//! - Moving and copying entries into existing directories
//! - Renaming within the base directory (explicit reject-on-collision policy)
//! - Owner permission-bit changes from read/write/execute flags
//! - Recursive case-sensitive substring search over entry names
//! - Reading a file and appending a line to it
//!
//! Every operation resolves a caller-supplied relative name against the base
//! directory, performs one filesystem action, and reports the outcome as a
//! typed [`Result`]. Names that would escape the base directory are rejected
//! before any filesystem access.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dirman::{DirectoryManager, PermissionFlags};
//!
//! fn example() -> dirman::Result<()> {
//!     let manager = DirectoryManager::new("workdir")?;
//!     manager.create_file("notes.txt")?;
//!     manager.append_line("notes.txt", "first entry")?;
//!     manager.set_permissions("notes.txt", PermissionFlags::default())?;
//!     for hit in manager.search("notes")? {
//!         println!("{}", hit.display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod manager;
mod paths;
pub mod permissions;
mod search;

// Re-export main types
pub use error::{ManagerError, Result};
pub use manager::{DirectoryManager, Entry, EntryKind};
pub use permissions::PermissionFlags;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
