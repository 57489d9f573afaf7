//! Data models for directory entries, planned changes, and batch results

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One child of a scanned directory, snapshotted at scan time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Lifecycle of a planned rename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    /// Computed but not applied (dry run, or not yet executed)
    Preview,
    /// Rename applied to the filesystem
    Success,
    /// Rename attempted and failed
    Error,
}

/// One file's rename intent: old name -> new name inside `path`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedChange {
    pub folder: String,
    pub old_name: String,
    pub new_name: String,
    /// Containing directory
    pub path: String,
    pub status: ChangeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate result of a preview or rename pass over one root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub total_folders: usize,
    /// Eligible files seen across all subfolders
    pub total_files: usize,
    /// Files actually renamed (always 0 in a dry run)
    pub renamed_files: usize,
    pub errors: Vec<String>,
    pub changes: Vec<PlannedChange>,
}

/// Per-folder file count, or the error that prevented counting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FolderFiles {
    Counted(usize),
    Unreadable(String),
}

/// Read-only inspection of a root directory, produced without mutation intent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderAnalysis {
    pub total_subfolders: usize,
    pub total_files: usize,
    pub files_by_folder: BTreeMap<String, FolderFiles>,
    /// Distinct extensions seen, sorted ascending
    pub file_types: Vec<String>,
}
