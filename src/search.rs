//! Recursive substring search over the base directory tree
//!
//! Equivalent to a `*keyword*` glob over recursively listed entry names:
//! case-sensitive, no regex, unbounded result size. Matches are reported as
//! paths relative to the base directory in traversal order.

use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scan the tree under `base` for entries whose name contains `keyword`.
///
/// The base directory itself is never a match candidate.
pub(crate) fn scan(base: &Path, keyword: &str) -> io::Result<Vec<PathBuf>> {
    let mut matches = Vec::new();
    for entry in WalkDir::new(base).min_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_name().to_string_lossy().contains(keyword) {
            let relative = entry
                .path()
                .strip_prefix(base)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            matches.push(relative.to_path_buf());
        }
    }
    Ok(matches)
}
