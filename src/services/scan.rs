//! Read-only directory scanning.
//!
//! Both listing functions sort their results by name (byte-wise) so that
//! sequence-number assignment is reproducible across platforms; the raw
//! `read_dir` order is implementation-defined and never observed by callers.

use crate::models::FolderEntry;
use crate::services::classify::{self, PathClassifier};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

/// List the immediate subfolders of `root`, sorted by name
pub fn list_subfolders(root: &Path) -> io::Result<Vec<FolderEntry>> {
    let mut subfolders = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            subfolders.push(FolderEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                is_dir: true,
            });
        }
    }

    subfolders.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!(
        "Listed {} subfolders under {}",
        subfolders.len(),
        root.display()
    );
    Ok(subfolders)
}

/// List the eligible files of `dir`, sorted by name.
///
/// Entries are filtered through the classifier first; when `file_types` is
/// non-empty, only files whose extension appears in it are retained.
pub fn list_eligible_files(
    dir: &Path,
    classifier: &PathClassifier,
    file_types: &BTreeSet<String>,
) -> io::Result<Vec<FolderEntry>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let candidate = FolderEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            is_dir: file_type.is_dir(),
        };

        if !classifier.is_eligible(&candidate) {
            continue;
        }
        if !file_types.is_empty() && !file_types.contains(&classify::extension_of(&candidate.name))
        {
            continue;
        }
        files.push(candidate);
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!("Listed {} eligible files in {}", files.len(), dir.display());
    Ok(files)
}
