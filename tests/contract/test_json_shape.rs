//! Contract tests for JSON output shape

use crate::fixtures::create_media_fixture;
use bfr::NamingConfig;
use tempfile::TempDir;

#[test]
fn test_report_json_fields() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_media_fixture(root).unwrap();

    let report = bfr::preview(root, &NamingConfig::default()).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("total_folders"));
    assert!(json.contains("total_files"));
    assert!(json.contains("renamed_files"));
    assert!(json.contains("errors"));
    assert!(json.contains("changes"));
    assert!(json.contains("old_name"));
    assert!(json.contains("new_name"));
    assert!(json.contains("\"status\":\"preview\""));

    // Absent error fields are omitted, not null
    assert!(!json.contains("\"error\":null"));

    // Reports round-trip through serde
    let parsed: bfr::BatchReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn test_analysis_json_number_or_string_folders() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_media_fixture(root).unwrap();

    let analysis = bfr::analyze(root).unwrap();

    let json = serde_json::to_string(&analysis).unwrap();
    assert!(json.contains("total_subfolders"));
    assert!(json.contains("files_by_folder"));
    assert!(json.contains("file_types"));

    // A readable folder serializes as a bare count
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["files_by_folder"]["A"], serde_json::json!(2));
    assert_eq!(value["file_types"], serde_json::json!([".jpg", ".png"]));
}
