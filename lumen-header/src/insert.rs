//! Atomic header insertion.
//!
//! The updated source is staged to a temporary file in the target's
//! directory and renamed over the original, so an interrupted write can
//! never leave a truncated source file behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::header::render_header;
use crate::style::style_for;

/// Inserts a header dated `year` at the top of `path`, or after the `#!`
/// line when the file starts with one. `source` must be the file's current
/// contents.
pub fn insert_header(path: &Path, source: &str, year: i32) -> Result<()> {
    let style = style_for(path).ok_or_else(|| Error::UnknownCommentStyle {
        path: path.to_path_buf(),
    })?;
    let header = render_header(style, year);

    let updated = if let Some((first, rest)) = source.split_once('\n') {
        if first.starts_with("#!") {
            format!("{first}\n{header}\n\n{rest}")
        } else {
            format!("{header}\n\n{source}")
        }
    } else if source.starts_with("#!") {
        // A shebang with no trailing newline still has to stay on line one.
        format!("{source}\n{header}\n")
    } else {
        format!("{header}\n\n{source}")
    };

    atomic_write(path, &updated)
}

/// Replaces the contents of `path` with `contents` through a staged
/// temporary file, keeping the original permission bits.
pub fn atomic_write(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let permissions = fs::metadata(path)
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?
        .permissions();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
    staged.write_all(contents.as_bytes()).map_err(write_err)?;
    staged.persist(path).map_err(|e| write_err(e.error))?;
    fs::set_permissions(path, permissions).map_err(write_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::has_marker;

    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("test file should be writable");
        path
    }

    #[test]
    fn inserts_at_the_top_of_plain_sources() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "lib.rs", "pub fn f() {}\n");

        insert_header(&path, "pub fn f() {}\n", 2024).expect("insert");

        let updated = fs::read_to_string(&path).expect("read back");
        assert!(updated.starts_with("// Copyright 2024 The Lumen Project Developers\n"));
        assert!(updated.ends_with("\n\npub fn f() {}\n"));
        assert!(has_marker(&updated));
    }

    #[test]
    fn keeps_a_shebang_on_line_one() {
        let dir = TempDir::new().expect("temp dir");
        let contents = "#!/usr/bin/env python3\nprint('hi')\n";
        let path = write_file(&dir, "tool.py", contents);

        insert_header(&path, contents, 2024).expect("insert");

        let updated = fs::read_to_string(&path).expect("read back");
        assert!(updated.starts_with(
            "#!/usr/bin/env python3\n# Copyright 2024 The Lumen Project Developers\n"
        ));
        assert!(updated.ends_with("\n\nprint('hi')\n"));
    }

    #[test]
    fn handles_a_shebang_with_no_trailing_newline() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "tool.py", "#!/bin/sh");

        insert_header(&path, "#!/bin/sh", 2024).expect("insert");

        let updated = fs::read_to_string(&path).expect("read back");
        assert!(updated.starts_with("#!/bin/sh\n# Copyright 2024"));
    }

    #[test]
    fn unknown_extension_is_refused_without_touching_the_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "main.c", "int main(void) { return 0; }\n");

        let err = insert_header(&path, "int main(void) { return 0; }\n", 2024);
        assert!(matches!(err, Err(Error::UnknownCommentStyle { .. })));

        let untouched = fs::read_to_string(&path).expect("read back");
        assert_eq!(untouched, "int main(void) { return 0; }\n");
    }

    #[test]
    fn atomic_write_leaves_no_staging_file_behind() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "lib.rs", "old\n");

        atomic_write(&path, "new\n").expect("write");

        assert_eq!(fs::read_to_string(&path).expect("read back"), "new\n");
        let entries = fs::read_dir(dir.path()).expect("read dir").count();
        assert_eq!(entries, 1);
    }

    #[cfg(unix)]
    #[test]
    fn atomic_write_preserves_permission_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "tool.py", "#!/usr/bin/env python3\n");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");

        atomic_write(&path, "#!/usr/bin/env python3\nprint('hi')\n").expect("write");

        let mode = fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn atomic_write_on_a_missing_file_is_a_read_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("absent.rs");

        let err = atomic_write(&path, "contents\n");
        assert!(matches!(err, Err(Error::Read { .. })));
    }
}
