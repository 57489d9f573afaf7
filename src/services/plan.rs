//! Target-name planning and collision detection.
//!
//! The counter advances after every input file whether or not a collision was
//! recorded for it, so raw input order maps 1:1 onto consumed sequence slots.

use crate::NamingConfig;
use crate::models::{ChangeStatus, FolderEntry, PlannedChange};
use crate::services::classify;
use std::collections::HashSet;
use std::path::Path;

/// Planning outcome for a single subfolder
#[derive(Debug, Default)]
pub struct FolderPlan {
    pub changes: Vec<PlannedChange>,
    pub errors: Vec<String>,
}

/// Left-pad `value` with zeros to at least `width` characters.
///
/// Values wider than `width` are never truncated: `zero_pad(1000, 3)` is
/// `"1000"`.
#[must_use]
pub fn zero_pad(value: u32, width: usize) -> String {
    format!("{value:0width$}")
}

/// Compute the planned rename for every file of one subfolder.
///
/// `files` must be in the order sequence numbers should be assigned. A file
/// whose target is already occupied on disk by an unrelated entry, or already
/// claimed by an earlier change of this plan, is recorded as an error and
/// emits no change; the sequence slot is consumed either way.
pub fn plan_folder(
    folder: &str,
    dir: &Path,
    files: &[FolderEntry],
    config: &NamingConfig,
) -> FolderPlan {
    let mut plan = FolderPlan::default();
    let mut claimed: HashSet<String> = HashSet::new();
    let mut counter = config.start_number;

    for file in files {
        let extension = classify::extension_of(&file.name);
        let new_name = format!(
            "{folder}{}{}{extension}",
            config.separator,
            zero_pad(counter, config.digits)
        );
        counter += 1;

        // Occupied by something that is not the file being processed?
        let occupied = new_name != file.name && dir.join(&new_name).exists();
        if occupied || claimed.contains(&new_name) {
            log::warn!("Target {new_name} already exists in {folder}, skipping {}", file.name);
            plan.errors
                .push(format!("file already exists: {new_name} in {folder}"));
            continue;
        }

        log::debug!("Planned {folder}/{} -> {new_name}", file.name);
        claimed.insert(new_name.clone());
        plan.changes.push(PlannedChange {
            folder: folder.to_string(),
            old_name: file.name.clone(),
            new_name,
            path: dir.to_string_lossy().to_string(),
            status: ChangeStatus::Preview,
            error: None,
        });
    }

    plan
}
