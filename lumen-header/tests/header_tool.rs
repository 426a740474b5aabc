//! End-to-end flows over a real directory tree: walk, check, fix, re-check.

use std::fs;
use std::path::{Path, PathBuf};

use lumen_header::{Error, check_paths, fix_paths, has_marker, source_files};
use tempfile::TempDir;

fn write_file(root: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("test dirs should be creatable");
    }
    fs::write(&path, contents).expect("test file should be writable");
    path
}

#[test]
fn walk_check_fix_recheck_converges() {
    let dir = TempDir::new().expect("temp dir");
    let rs = write_file(dir.path(), "src/params.rs", "pub struct ParamSet;\n");
    let py = write_file(dir.path(), "tools/gen.py", "#!/usr/bin/env python3\nprint('hi')\n");
    write_file(dir.path(), "Cargo.toml", "[package]\n");
    write_file(dir.path(), "target/debug/out.rs", "fn ignored() {}\n");

    let files = source_files(dir.path()).expect("walk");
    assert_eq!(files, [rs.clone(), py.clone()]);

    let missing = check_paths(&files).expect("check");
    assert_eq!(missing, files);

    let fixed = fix_paths(&files, 2024).expect("fix");
    assert_eq!(fixed, files);

    assert!(check_paths(&files).expect("recheck").is_empty());

    let rs_contents = fs::read_to_string(&rs).expect("read rs");
    assert!(rs_contents.starts_with("// Copyright 2024 The Lumen Project Developers\n"));
    assert!(rs_contents.ends_with("\n\npub struct ParamSet;\n"));

    let py_contents = fs::read_to_string(&py).expect("read py");
    assert!(py_contents.starts_with(
        "#!/usr/bin/env python3\n# Copyright 2024 The Lumen Project Developers\n"
    ));
    assert!(py_contents.ends_with("\n\nprint('hi')\n"));
}

#[test]
fn fixing_twice_changes_nothing_the_second_time() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(dir.path(), "lib.rs", "pub fn f() {}\n");
    let paths = vec![path.clone()];

    let first = fix_paths(&paths, 2024).expect("first fix");
    assert_eq!(first, paths);
    let after_first = fs::read_to_string(&path).expect("read back");

    let second = fix_paths(&paths, 2025).expect("second fix");
    assert!(second.is_empty());
    let after_second = fs::read_to_string(&path).expect("read back");

    assert_eq!(after_first, after_second);
}

#[test]
fn headers_keep_the_year_they_were_inserted_with() {
    let dir = TempDir::new().expect("temp dir");
    let contents = "// Copyright 2019 The Lumen Project Developers\n\
                    //\n\
                    // Use of this source code is governed by the MIT license that can be\n\
                    // found in the LICENSE file.\n\
                    \nfn old() {}\n";
    let path = write_file(dir.path(), "old.rs", contents);

    let fixed = fix_paths(&[path.clone()], 2026).expect("fix");
    assert!(fixed.is_empty());
    assert_eq!(fs::read_to_string(&path).expect("read back"), contents);
}

#[test]
fn check_mode_reports_without_modifying() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(dir.path(), "lib.rs", "pub fn f() {}\n");

    let missing = check_paths(&[path.clone()]).expect("check");
    assert_eq!(missing, [path.clone()]);

    assert!(!has_marker(&fs::read_to_string(&path).expect("read back")));
    assert_eq!(fs::read_to_string(&path).expect("read back"), "pub fn f() {}\n");
}

#[test]
fn one_unknown_extension_refuses_the_whole_explicit_batch() {
    let dir = TempDir::new().expect("temp dir");
    let good = write_file(dir.path(), "good.rs", "pub fn g() {}\n");
    let bad = write_file(dir.path(), "notes.txt", "remember the milk\n");
    let paths = vec![good.clone(), bad];

    let err = fix_paths(&paths, 2024);
    assert!(matches!(err, Err(Error::UnknownCommentStyle { .. })));

    // Nothing in the batch may be touched, including the supported file.
    assert_eq!(fs::read_to_string(&good).expect("read back"), "pub fn g() {}\n");

    let err = check_paths(&paths);
    assert!(matches!(err, Err(Error::UnknownCommentStyle { .. })));
}

#[cfg(unix)]
#[test]
fn fixed_scripts_stay_executable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().expect("temp dir");
    let path = write_file(dir.path(), "run.py", "#!/usr/bin/env python3\nmain()\n");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");

    fix_paths(&[path.clone()], 2024).expect("fix");

    let mode = fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
    let contents = fs::read_to_string(&path).expect("read back");
    assert!(contents.starts_with("#!/usr/bin/env python3\n# Copyright 2024"));
}
