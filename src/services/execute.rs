//! Rename execution.
//!
//! Changes are applied in input order. A failed rename marks its own change
//! and is recorded; it never aborts the remaining items, and renames already
//! applied are not rolled back.

use crate::models::{ChangeStatus, PlannedChange};
use std::fs;
use std::path::Path;

/// Execution outcome for one subfolder's plan
#[derive(Debug, Default)]
pub struct ExecutionOutcome {
    pub renamed: usize,
    pub errors: Vec<String>,
}

/// Apply (or, in dry-run, skip) every planned change, finalizing statuses in
/// place
pub fn execute(dir: &Path, changes: &mut [PlannedChange], dry_run: bool) -> ExecutionOutcome {
    let mut outcome = ExecutionOutcome::default();

    if dry_run {
        // Statuses stay Preview; the result shape is identical to a real run
        return outcome;
    }

    for change in changes {
        let old_path = dir.join(&change.old_name);
        let new_path = dir.join(&change.new_name);

        match fs::rename(&old_path, &new_path) {
            Ok(()) => {
                log::debug!("Renamed {} -> {}", change.old_name, change.new_name);
                change.status = ChangeStatus::Success;
                outcome.renamed += 1;
            }
            Err(err) => {
                log::warn!("Failed to rename {}: {err}", old_path.display());
                change.status = ChangeStatus::Error;
                change.error = Some(err.to_string());
                outcome
                    .errors
                    .push(format!("failed to rename {}: {err}", change.old_name));
            }
        }
    }

    outcome
}
