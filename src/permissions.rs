//! Owner permission-bit computation and application
//!
//! Permissions are expressed as three booleans (read/write/execute) that map
//! onto the owner bits of the Unix mode (0o400/0o200/0o100). Group and other
//! bits are always cleared, matching the original owner-only contract. On
//! non-Unix platforms only the write flag is honored (via the readonly bit).

use std::fs;
use std::io;
use std::path::Path;

/// Owner-level permission flags
///
/// Defaults to read+write, no execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionFlags {
    /// Owner read bit (0o400)
    pub read: bool,
    /// Owner write bit (0o200)
    pub write: bool,
    /// Owner execute bit (0o100)
    pub execute: bool,
}

impl Default for PermissionFlags {
    fn default() -> Self {
        Self {
            read: true,
            write: true,
            execute: false,
        }
    }
}

impl PermissionFlags {
    /// Compute the Unix owner mode bits for these flags
    #[must_use]
    pub const fn owner_mode(self) -> u32 {
        let mut mode = 0;
        if self.read {
            mode |= 0o400;
        }
        if self.write {
            mode |= 0o200;
        }
        if self.execute {
            mode |= 0o100;
        }
        mode
    }
}

/// Apply `flags` to the entry at `path`.
#[cfg(unix)]
pub(crate) fn apply(path: &Path, flags: PermissionFlags) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(flags.owner_mode()))
}

/// Apply `flags` to the entry at `path`.
///
/// Non-Unix fallback: only the write flag can be expressed.
#[cfg(not(unix))]
pub(crate) fn apply(path: &Path, flags: PermissionFlags) -> io::Result<()> {
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_readonly(!flags.write);
    fs::set_permissions(path, perms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PermissionFlags { read: true, write: true, execute: false }, 0o600)]
    #[case(PermissionFlags { read: true, write: true, execute: true }, 0o700)]
    #[case(PermissionFlags { read: true, write: false, execute: false }, 0o400)]
    #[case(PermissionFlags { read: false, write: false, execute: false }, 0o000)]
    #[case(PermissionFlags { read: false, write: false, execute: true }, 0o100)]
    fn owner_mode_composes_owner_bits(#[case] flags: PermissionFlags, #[case] expected: u32) {
        assert_eq!(flags.owner_mode(), expected);
    }

    #[test]
    fn default_is_read_write_no_execute() {
        assert_eq!(PermissionFlags::default().owner_mode(), 0o600);
    }
}
