//! File eligibility classification and extension extraction

use crate::models::FolderEntry;

/// Names excluded even though they are regular files (OS metadata artifacts)
const SYSTEM_ARTIFACTS: &[&str] = &[".DS_Store", "Thumbs.db", ".gitkeep", "desktop.ini"];

/// Decides whether a directory entry is a real, renameable file.
///
/// Hidden entries (leading `.`) and entries in the exclusion set are never
/// eligible. The exclusion set defaults to common OS metadata files.
#[derive(Debug, Clone)]
pub struct PathClassifier {
    excluded: Vec<String>,
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self {
            excluded: SYSTEM_ARTIFACTS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl PathClassifier {
    /// Build a classifier with a custom exclusion set
    #[must_use]
    pub fn with_exclusions<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    /// An entry is eligible iff it is a file, not hidden, and not an artifact
    #[must_use]
    pub fn is_eligible(&self, entry: &FolderEntry) -> bool {
        !entry.is_dir
            && !entry.name.starts_with('.')
            && !self.excluded.iter().any(|e| e == &entry.name)
    }
}

/// Lower-cased extension of `name`, including the leading dot.
///
/// A dot that starts the name does not begin an extension (`.bashrc` has
/// none), and a name without a dot yields the empty string.
#[must_use]
pub fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx..].to_lowercase(),
        _ => String::new(),
    }
}
