//! License-header checking and insertion for source files.
//!
//! Every source file in the tree carries a year-dated copyright header.
//! [`check_paths`] reports the files missing one and never writes anything;
//! [`fix_paths`] inserts the header through an atomic staged write, skipping
//! files that already carry the marker so re-runs are no-ops.
//!
//! Recognized extensions and their comment styles live in `style`. Directory
//! walks ([`source_files`]) skip everything unrecognized, while explicitly
//! named files with an unrecognized extension are refused up front, before
//! any file in the batch is touched.

mod error;
mod header;
mod insert;
mod style;
mod walk;

use std::fs;
use std::path::{Path, PathBuf};

pub use error::{Error, Result};
pub use header::{has_marker, render_header};
pub use insert::{atomic_write, insert_header};
pub use style::{CommentStyle, style_for};
pub use walk::source_files;

/// Returns the subset of `paths` missing a license header.
///
/// Reads every file but modifies none, whatever it finds.
pub fn check_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    ensure_supported(paths)?;

    let mut missing = Vec::new();
    for path in paths {
        if !has_marker(&read(path)?) {
            missing.push(path.clone());
        }
    }
    Ok(missing)
}

/// Inserts a header dated `year` into every file in `paths` that does not
/// already carry one; returns the paths that were modified.
///
/// Every path is vetted before the first write, so one unsupported path
/// refuses the whole batch rather than leaving it half processed.
pub fn fix_paths(paths: &[PathBuf], year: i32) -> Result<Vec<PathBuf>> {
    ensure_supported(paths)?;

    let mut fixed = Vec::new();
    for path in paths {
        let source = read(path)?;
        if has_marker(&source) {
            continue;
        }
        insert_header(path, &source, year)?;
        fixed.push(path.clone());
    }
    Ok(fixed)
}

fn ensure_supported(paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        if style_for(path).is_none() {
            return Err(Error::UnknownCommentStyle { path: path.clone() });
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}
