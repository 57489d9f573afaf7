//! Integration tests for the analyze operation

use crate::fixtures::{create_media_fixture, write_file_sync};
use bfr::models::FolderFiles;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_analyze_counts_and_extensions() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_media_fixture(root).unwrap();

    let analysis = bfr::analyze(root).unwrap();

    assert_eq!(analysis.total_subfolders, 2);
    assert_eq!(analysis.total_files, 3);
    assert_eq!(
        analysis.files_by_folder.get("A"),
        Some(&FolderFiles::Counted(2))
    );
    assert_eq!(
        analysis.files_by_folder.get("B"),
        Some(&FolderFiles::Counted(1))
    );
    assert_eq!(analysis.file_types, vec![".jpg", ".png"]);
}

#[test]
fn test_analyze_ignores_root_level_files_and_hidden_entries() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    // Files directly under the root are not inside a subfolder
    write_file_sync(root.join("loose.txt"), b"loose").unwrap();
    write_file_sync(root.join("A/keep.jpg"), b"keep").unwrap();
    write_file_sync(root.join("A/.DS_Store"), b"junk").unwrap();
    write_file_sync(root.join("A/Thumbs.db"), b"junk").unwrap();
    write_file_sync(root.join("A/.hidden"), b"junk").unwrap();
    // Nested directories are not recursed into
    fs::create_dir_all(root.join("A/nested")).unwrap();
    write_file_sync(root.join("A/nested/deep.jpg"), b"deep").unwrap();

    let analysis = bfr::analyze(root).unwrap();

    assert_eq!(analysis.total_subfolders, 1);
    assert_eq!(analysis.total_files, 1);
    assert_eq!(analysis.file_types, vec![".jpg"]);
}

#[test]
fn test_analyze_empty_subfolders() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("empty1")).unwrap();
    fs::create_dir_all(root.join("empty2")).unwrap();

    let analysis = bfr::analyze(root).unwrap();

    assert_eq!(analysis.total_subfolders, 2);
    assert_eq!(analysis.total_files, 0);
    assert!(analysis.file_types.is_empty());
    assert_eq!(
        analysis.files_by_folder.get("empty1"),
        Some(&FolderFiles::Counted(0))
    );
}
