//! Batch orchestration: fold per-subfolder scan, plan, and execution results
//! into a `BatchReport` or `FolderAnalysis`.
//!
//! A subfolder that cannot be read contributes an error entry and is skipped;
//! only a root-level read failure escalates out of these functions.

use crate::models::{BatchReport, FolderAnalysis, FolderFiles};
use crate::services::classify::{self, PathClassifier};
use crate::services::{execute, plan, scan};
use crate::{Error, NamingConfig, Result};
use std::collections::BTreeSet;
use std::path::Path;

fn scan_error(root: &Path, source: std::io::Error) -> Error {
    Error::Scan {
        path: root.to_string_lossy().to_string(),
        source,
    }
}

/// Run one preview or rename batch across the immediate subfolders of `root`
pub fn run_batch(root: &Path, config: &NamingConfig) -> Result<BatchReport> {
    let classifier = PathClassifier::default();
    let subfolders = scan::list_subfolders(root).map_err(|e| scan_error(root, e))?;

    let mut report = BatchReport {
        total_folders: subfolders.len(),
        ..BatchReport::default()
    };

    for subfolder in &subfolders {
        let dir = root.join(&subfolder.name);

        let files = match scan::list_eligible_files(&dir, &classifier, &config.file_types) {
            Ok(files) => files,
            Err(err) => {
                log::warn!("Skipping unreadable folder {}: {err}", dir.display());
                report
                    .errors
                    .push(format!("failed to read folder {}: {err}", subfolder.name));
                continue;
            }
        };

        report.total_files += files.len();

        let mut folder_plan = plan::plan_folder(&subfolder.name, &dir, &files, config);
        report.errors.append(&mut folder_plan.errors);

        let mut outcome = execute::execute(&dir, &mut folder_plan.changes, config.dry_run);
        report.renamed_files += outcome.renamed;
        report.errors.append(&mut outcome.errors);
        report.changes.append(&mut folder_plan.changes);
    }

    log::info!(
        "Batch over {} complete: {} folders, {} files, {} renamed, {} errors",
        root.display(),
        report.total_folders,
        report.total_files,
        report.renamed_files,
        report.errors.len()
    );
    Ok(report)
}

/// Inspect the immediate subfolders of `root` without any mutation intent
pub fn analyze_folders(root: &Path) -> Result<FolderAnalysis> {
    let classifier = PathClassifier::default();
    let no_filter = BTreeSet::new();
    let subfolders = scan::list_subfolders(root).map_err(|e| scan_error(root, e))?;

    let mut analysis = FolderAnalysis {
        total_subfolders: subfolders.len(),
        ..FolderAnalysis::default()
    };
    let mut extensions: BTreeSet<String> = BTreeSet::new();

    for subfolder in &subfolders {
        let dir = root.join(&subfolder.name);

        match scan::list_eligible_files(&dir, &classifier, &no_filter) {
            Ok(files) => {
                analysis.total_files += files.len();
                for file in &files {
                    let ext = classify::extension_of(&file.name);
                    if !ext.is_empty() {
                        extensions.insert(ext);
                    }
                }
                analysis
                    .files_by_folder
                    .insert(subfolder.name.clone(), FolderFiles::Counted(files.len()));
            }
            Err(err) => {
                log::warn!("Cannot analyze folder {}: {err}", dir.display());
                analysis.files_by_folder.insert(
                    subfolder.name.clone(),
                    FolderFiles::Unreadable(format!("error: {err}")),
                );
            }
        }
    }

    analysis.file_types = extensions.into_iter().collect();
    Ok(analysis)
}
