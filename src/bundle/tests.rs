// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

use super::export;
use std::io::Read;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn read_entry(archive_path: &std::path::Path, name: &str) -> String {
    let file = std::fs::File::open(archive_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn test_export_writes_all_entries() {
    let temp = temp_dir();
    let bundle = temp.path().join("doodba_bundle.zip");

    export(
        &bundle,
        &[
            ("addons.yaml", "web:\n  - web_responsive\n"),
            ("pip.txt", "requests\n"),
            ("apt.txt", "libxml2\n"),
        ],
    )
    .unwrap();

    let file = std::fs::File::open(&bundle).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["addons.yaml", "apt.txt", "pip.txt"]);

    assert_eq!(read_entry(&bundle, "addons.yaml"), "web:\n  - web_responsive\n");
    assert_eq!(read_entry(&bundle, "pip.txt"), "requests\n");
    assert_eq!(read_entry(&bundle, "apt.txt"), "libxml2\n");
}

#[test]
fn test_export_allows_empty_entries() {
    let temp = temp_dir();
    let bundle = temp.path().join("bundle.zip");
    export(&bundle, &[("pip.txt", "")]).unwrap();
    assert_eq!(read_entry(&bundle, "pip.txt"), "");
}

#[test]
fn test_export_to_missing_directory_fails_cleanly() {
    let temp = temp_dir();
    let bundle = temp.path().join("no_such_dir").join("bundle.zip");
    let result = export(&bundle, &[("addons.yaml", "")]);
    assert!(result.is_err());
    assert!(!bundle.exists());
}
