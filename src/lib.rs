//! Bulk File Renamer Library
//!
//! This library renames the files inside the immediate subfolders of a root
//! directory into a folder-derived sequential scheme
//! (`<folder><separator><zero-padded counter><extension>`), with dry-run
//! preview, syntactic collision detection, and per-item error aggregation.

pub mod cli;
pub mod models;
pub mod services;

pub use models::{BatchReport, ChangeStatus, FolderAnalysis, FolderEntry, PlannedChange};

use std::collections::BTreeSet;
use std::path::Path;
use std::result;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidInput(String),
    /// The root directory itself could not be read
    Scan {
        path: String,
        source: std::io::Error,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::Scan { path, source } => write!(f, "Cannot read folder {path}: {source}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Naming options for one batch run.
///
/// Read-only for the lifetime of the batch; the engine never mutates it.
#[derive(Debug, Clone)]
pub struct NamingConfig {
    /// First sequence value assigned per subfolder
    pub start_number: u32,
    /// Minimum zero-pad width of the sequence number (values wider than this
    /// are never truncated)
    pub digits: usize,
    /// Joins the folder name and the sequence number
    pub separator: String,
    /// Lower-cased extensions with leading dot; empty means all types
    pub file_types: BTreeSet<String>,
    /// When true, no filesystem mutation occurs
    pub dry_run: bool,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            start_number: 1,
            digits: 3,
            separator: "_".to_string(),
            file_types: BTreeSet::new(),
            dry_run: false,
        }
    }
}

fn validate_root(root: &Path) -> Result<()> {
    let display = root.to_string_lossy();
    if !root.exists() {
        return Err(Error::InvalidInput(format!("Path does not exist: {display}")));
    }
    if !root.is_dir() {
        return Err(Error::InvalidInput(format!(
            "Path is not a directory: {display}"
        )));
    }
    Ok(())
}

/// Inspect the subfolders of `root` without touching anything.
///
/// # Errors
/// Fails only when the root itself is missing, not a directory, or unreadable.
pub fn analyze<P: AsRef<Path>>(root: P) -> Result<FolderAnalysis> {
    let root = root.as_ref();
    validate_root(root)?;
    services::batch::analyze_folders(root)
}

/// Compute the full rename plan for `root` without mutating the filesystem.
///
/// Dry-run is forced regardless of `config.dry_run`.
pub fn preview<P: AsRef<Path>>(root: P, config: &NamingConfig) -> Result<BatchReport> {
    let root = root.as_ref();
    validate_root(root)?;

    let dry_config = NamingConfig {
        dry_run: true,
        ..config.clone()
    };
    services::batch::run_batch(root, &dry_config)
}

/// Rename the files of `root`'s subfolders per `config`.
///
/// Per-item failures are aggregated into the returned report, never raised;
/// only a root-level failure yields `Err`.
pub fn rename<P: AsRef<Path>>(root: P, config: &NamingConfig) -> Result<BatchReport> {
    let root = root.as_ref();
    validate_root(root)?;
    services::batch::run_batch(root, config)
}
