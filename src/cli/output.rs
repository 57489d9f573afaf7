//! Output formatting for CLI

use crate::models::{BatchReport, ChangeStatus, FolderAnalysis, FolderFiles};

fn status_label(status: ChangeStatus) -> &'static str {
    match status {
        ChangeStatus::Preview => "preview",
        ChangeStatus::Success => "renamed",
        ChangeStatus::Error => "error",
    }
}

/// Render a batch report as human-readable text
pub fn format_report_text(report: &BatchReport) -> String {
    let mut out = String::new();

    for change in &report.changes {
        let label = status_label(change.status);
        out.push_str(&format!(
            "[{label}] {}/{} -> {}\n",
            change.folder, change.old_name, change.new_name
        ));
        if let Some(err) = &change.error {
            out.push_str(&format!("         {err}\n"));
        }
    }

    out.push_str(&format!(
        "\n{} folders, {} files, {} renamed\n",
        report.total_folders, report.total_files, report.renamed_files
    ));

    if !report.errors.is_empty() {
        out.push_str(&format!("\n{} error(s):\n", report.errors.len()));
        for error in &report.errors {
            out.push_str(&format!("  - {error}\n"));
        }
    }

    out
}

/// Render a folder analysis as human-readable text
pub fn format_analysis_text(analysis: &FolderAnalysis) -> String {
    let mut out = String::new();

    for (folder, files) in &analysis.files_by_folder {
        match files {
            FolderFiles::Counted(count) => {
                out.push_str(&format!("{folder}: {count} file(s)\n"));
            }
            FolderFiles::Unreadable(err) => {
                out.push_str(&format!("{folder}: {err}\n"));
            }
        }
    }

    out.push_str(&format!(
        "\n{} subfolders, {} files\n",
        analysis.total_subfolders, analysis.total_files
    ));

    if !analysis.file_types.is_empty() {
        out.push_str(&format!("File types: {}\n", analysis.file_types.join(", ")));
    }

    out
}

/// Serialize a batch report as pretty JSON
pub fn format_report_json(report: &BatchReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

/// Serialize a folder analysis as pretty JSON
pub fn format_analysis_json(analysis: &FolderAnalysis) -> String {
    serde_json::to_string_pretty(analysis).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}
