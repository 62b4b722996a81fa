//! Relative-name validation and resolution against the base directory
//!
//! All operations form their target as `base / name` from a caller-supplied
//! relative name. Names are bound-checked before touching the filesystem:
//! absolute names, names with parent-directory components, and empty names
//! are rejected so no operation can escape the base directory.

use crate::error::{ManagerError, Result};
use std::path::{Component, Path, PathBuf};

/// Validate `name` and resolve it against `base`.
///
/// # Errors
///
/// Returns [`ManagerError::InvalidName`] if `name` is empty, absolute, or
/// contains a parent-directory (`..`) component.
pub(crate) fn resolve(base: &Path, name: &str) -> Result<PathBuf> {
    validate(name)?;
    Ok(base.join(name))
}

fn validate(name: &str) -> Result<()> {
    let path = Path::new(name);
    if name.is_empty() {
        return Err(ManagerError::InvalidName(path.to_path_buf()));
    }
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) | Component::ParentDir => {
                return Err(ManagerError::InvalidName(path.to_path_buf()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("file.txt")]
    #[case("dir/file.txt")]
    #[case("./file.txt")]
    fn accepts_relative_names(#[case] name: &str) {
        assert!(resolve(Path::new("/base"), name).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("..")]
    #[case("../escape.txt")]
    #[case("dir/../../escape.txt")]
    #[case("/etc/passwd")]
    fn rejects_escaping_names(#[case] name: &str) {
        let err = resolve(Path::new("/base"), name).unwrap_err();
        assert!(matches!(err, ManagerError::InvalidName(_)));
    }

    #[test]
    fn resolves_under_base() {
        let resolved = resolve(Path::new("/base"), "sub/file.txt").unwrap();
        assert_eq!(resolved, Path::new("/base/sub/file.txt"));
    }
}
