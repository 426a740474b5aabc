//! Source-tree discovery for whole-repository header scans.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::style::style_for;

/// Directories never descended into.
const SKIPPED_DIRS: &[&str] = &[".git", "target"];

/// Collects every recognized source file under `root`, sorted by path.
///
/// Files with unrecognized extensions are skipped, as are version-control
/// metadata and build output directories.
pub fn source_files(root: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        !(entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| SKIPPED_DIRS.contains(&name)))
    });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| Error::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && style_for(entry.path()).is_some() {
            files.push(entry.into_path());
        }
    }
    files.sort();

    Ok(files)
}
